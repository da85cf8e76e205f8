mod accessor;
pub use accessor::Accessors;

mod audit;

mod cache;
pub use cache::MappingCache;

mod config;
pub use config::Config;

pub mod mapper;
pub use mapper::{CacheSizes, Mapper};

mod record;
pub use record::Record;

pub use tablemap_core::{
    driver::{self, Driver},
    schema::{
        self,
        db::{SqlType, TableRef},
        TableMapping, TypeOverrides,
    },
    stmt::{Type, Value},
    Error, Result,
};
pub use tablemap_macros::Record;
pub use tablemap_sql::SqlAndParams;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Accessors, Record, Result};
    pub use std::sync::OnceLock;
    pub use tablemap_core::{
        schema::{db::SqlType, ColumnAttr, FieldDescriptor, RecordDescriptor, Role, TableAttr},
        stmt::{Primitive, Value},
    };
}
