use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use tablemap_core::{
    schema::db::SqlType,
    stmt::{TypedValue, Value as CoreValue},
};

/// A statement parameter in the shape SQLite stores it.
///
/// Dates, timestamps and UUIDs are stored as text.
#[derive(Debug)]
pub(crate) struct Value<'a>(&'a TypedValue);

impl<'a> From<&'a TypedValue> for Value<'a> {
    fn from(value: &'a TypedValue) -> Self {
        Value(value)
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let TypedValue { value, ty } = self.0;

        // Large objects are stored by their marker, not by the value's type.
        if ty.is_large_object() {
            let bytes = match value {
                CoreValue::String(v) => Some(v.as_bytes()),
                CoreValue::Bytes(v) => Some(&v[..]),
                _ => None,
            };

            if let Some(bytes) = bytes {
                return Ok(ToSqlOutput::Borrowed(match ty {
                    SqlType::Blob => ValueRef::Blob(bytes),
                    _ => ValueRef::Text(bytes),
                }));
            }
        }

        let value = match value {
            CoreValue::String(v) => {
                return Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())));
            }
            CoreValue::Bytes(v) => return Ok(ToSqlOutput::Borrowed(ValueRef::Blob(v))),
            CoreValue::Null => SqlValue::Null,
            CoreValue::Bool(v) => SqlValue::Integer(i64::from(*v)),
            CoreValue::I16(v) => SqlValue::Integer(i64::from(*v)),
            CoreValue::I32(v) => SqlValue::Integer(i64::from(*v)),
            CoreValue::I64(v) => SqlValue::Integer(*v),
            CoreValue::F32(v) => SqlValue::Real(f64::from(*v)),
            CoreValue::F64(v) => SqlValue::Real(*v),
            CoreValue::Uuid(v) => SqlValue::Text(v.to_string()),
            CoreValue::Date(v) => SqlValue::Text(v.to_string()),
            CoreValue::DateTime(v) => SqlValue::Text(v.to_string()),
            CoreValue::DateTimeTz(v) => SqlValue::Text(v.to_rfc3339()),
        };

        Ok(ToSqlOutput::Owned(value))
    }
}

/// Converts a stored value. Callers convert further to the declared type of
/// the record field.
pub(crate) fn from_sql(value: SqlValue) -> CoreValue {
    match value {
        SqlValue::Null => CoreValue::Null,
        SqlValue::Integer(v) => CoreValue::I64(v),
        SqlValue::Real(v) => CoreValue::F64(v),
        SqlValue::Text(v) => CoreValue::String(v),
        SqlValue::Blob(v) => CoreValue::Bytes(v),
    }
}
