mod builder;
pub use builder::Builder;

pub mod db;

mod descriptor;
pub use descriptor::{ColumnAttr, FieldDescriptor, RecordDescriptor, Role, TableAttr};

mod mapping;
pub use mapping::{IdPropertyInfo, PropertyMapping, TableMapping};

mod type_override;
pub use type_override::TypeOverrides;

mod verify;

use crate::Result;
