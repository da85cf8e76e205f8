use super::SqlType;

/// A column as reported by the database catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Column name, lower-cased.
    pub name: String,

    /// Native type reported by the catalog.
    pub ty: SqlType,
}

impl ColumnInfo {
    pub fn new(name: &str, ty: SqlType) -> ColumnInfo {
        ColumnInfo {
            name: name.to_lowercase(),
            ty,
        }
    }
}
