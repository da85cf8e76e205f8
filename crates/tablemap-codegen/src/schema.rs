mod column;
pub(crate) use column::{Column, ColumnType};

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Base, Field, Role};

mod record;
pub(crate) use record::Record;

mod table_attr;
pub(crate) use table_attr::TableAttr;
