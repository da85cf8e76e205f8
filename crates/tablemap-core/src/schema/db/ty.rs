use crate::stmt;

/// Native column types as reported by a database catalog.
///
/// The catalog reports a type for every column. A record may override the
/// reported type for a property, either per column or through the mapper's
/// [`TypeOverrides`](crate::schema::TypeOverrides) table, and the overridden
/// type is what values are bound with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    Boolean,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Double,
    Decimal,
    Char,
    Varchar,
    Text,

    /// Character large object
    Clob,

    Binary,

    /// Binary large object
    Blob,

    Date,
    Time,
    Timestamp,
    TimestampWithTimeZone,
    Uuid,

    /// Any type without a dedicated variant
    Other,
}

impl SqlType {
    /// Parses the type names accepted by `#[column(type = ...)]`.
    pub fn from_name(name: &str) -> Option<SqlType> {
        Some(match name.to_ascii_lowercase().as_str() {
            "boolean" | "bool" => SqlType::Boolean,
            "smallint" => SqlType::SmallInt,
            "integer" | "int" => SqlType::Integer,
            "bigint" => SqlType::BigInt,
            "real" | "float" => SqlType::Real,
            "double" => SqlType::Double,
            "decimal" | "numeric" => SqlType::Decimal,
            "char" => SqlType::Char,
            "varchar" => SqlType::Varchar,
            "text" => SqlType::Text,
            "clob" => SqlType::Clob,
            "binary" | "varbinary" => SqlType::Binary,
            "blob" => SqlType::Blob,
            "date" => SqlType::Date,
            "time" => SqlType::Time,
            "timestamp" => SqlType::Timestamp,
            "timestamp_tz" | "timestamp_with_time_zone" => SqlType::TimestampWithTimeZone,
            "uuid" => SqlType::Uuid,
            _ => return None,
        })
    }

    /// Large objects must be bound with an explicit type marker.
    pub fn is_large_object(self) -> bool {
        matches!(self, SqlType::Clob | SqlType::Blob)
    }

    /// The type used when no catalog information is available for a value.
    pub fn default_for(ty: stmt::Type) -> SqlType {
        match ty {
            stmt::Type::Bool => SqlType::Boolean,
            stmt::Type::I16 => SqlType::SmallInt,
            stmt::Type::I32 => SqlType::Integer,
            stmt::Type::I64 => SqlType::BigInt,
            stmt::Type::F32 => SqlType::Real,
            stmt::Type::F64 => SqlType::Double,
            stmt::Type::String => SqlType::Varchar,
            stmt::Type::Bytes => SqlType::Binary,
            stmt::Type::Uuid => SqlType::Uuid,
            stmt::Type::Date => SqlType::Date,
            stmt::Type::DateTime => SqlType::Timestamp,
            stmt::Type::DateTimeTz => SqlType::TimestampWithTimeZone,
        }
    }
}
