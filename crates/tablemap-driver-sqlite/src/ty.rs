use tablemap_core::schema::db::SqlType;

/// Maps a declared column type to a native type code.
///
/// Names SQLite does not recognise fall back to its type affinity rules.
pub(crate) fn from_decl_type(decl: &str) -> SqlType {
    let decl = decl.trim().to_ascii_uppercase();
    let base = decl.split('(').next().unwrap_or_default().trim();

    match base {
        "BOOLEAN" | "BOOL" => SqlType::Boolean,
        "SMALLINT" | "INT2" | "TINYINT" => SqlType::SmallInt,
        "INTEGER" | "INT" | "INT4" | "MEDIUMINT" => SqlType::Integer,
        "BIGINT" | "INT8" => SqlType::BigInt,
        "REAL" | "FLOAT" => SqlType::Real,
        "DOUBLE" | "DOUBLE PRECISION" => SqlType::Double,
        "DECIMAL" | "NUMERIC" => SqlType::Decimal,
        "CHAR" | "CHARACTER" | "NCHAR" => SqlType::Char,
        "VARCHAR" | "NVARCHAR" | "VARYING CHARACTER" => SqlType::Varchar,
        "TEXT" => SqlType::Text,
        "CLOB" => SqlType::Clob,
        "BINARY" | "VARBINARY" => SqlType::Binary,
        "BLOB" => SqlType::Blob,
        "DATE" => SqlType::Date,
        "TIME" => SqlType::Time,
        "DATETIME" | "TIMESTAMP" => SqlType::Timestamp,
        "TIMESTAMPTZ" | "TIMESTAMP WITH TIME ZONE" => SqlType::TimestampWithTimeZone,
        "UUID" => SqlType::Uuid,
        base if base.contains("INT") => SqlType::BigInt,
        base if base.contains("CHAR") || base.contains("CLOB") || base.contains("TEXT") => {
            SqlType::Text
        }
        base if base.contains("BLOB") || base.is_empty() => SqlType::Blob,
        base if base.contains("REAL") || base.contains("FLOA") || base.contains("DOUB") => {
            SqlType::Double
        }
        _ => SqlType::Other,
    }
}
