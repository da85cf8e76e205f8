use super::Value;
use crate::schema::db::SqlType;

/// A value bound together with the SQL type it must be sent as.
///
/// Drivers use the type instead of inferring one from the value, which
/// matters for large objects and timezone-aware timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub value: Value,
    pub ty: SqlType,
}

impl TypedValue {
    pub fn new(value: impl Into<Value>, ty: SqlType) -> TypedValue {
        TypedValue {
            value: value.into(),
            ty,
        }
    }
}
