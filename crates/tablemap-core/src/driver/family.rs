use crate::{schema::db::TableRef, Error, Result};

use std::fmt;

/// Database families, as far as table qualification is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseFamily {
    /// MySQL and MariaDB: a table is qualified by catalog (database).
    MySql,

    /// Oracle: a table is qualified by schema.
    Oracle,

    PostgreSql,
    SqlServer,
    Sqlite,
    Db2,
    Other,
}

impl DatabaseFamily {
    /// Detects the family from the product name the database reports.
    pub fn from_product_name(name: &str) -> DatabaseFamily {
        let name = name.trim().to_ascii_lowercase();

        if name.contains("mysql") || name.contains("mariadb") {
            DatabaseFamily::MySql
        } else if name.contains("oracle") {
            DatabaseFamily::Oracle
        } else if name.contains("postgres") {
            DatabaseFamily::PostgreSql
        } else if name.contains("sql server") {
            DatabaseFamily::SqlServer
        } else if name.contains("sqlite") {
            DatabaseFamily::Sqlite
        } else if name.starts_with("db2") {
            DatabaseFamily::Db2
        } else {
            DatabaseFamily::Other
        }
    }

    /// Rejects the qualifier this family does not use.
    pub fn check_qualifiers(self, table: &TableRef, type_name: &str) -> Result<()> {
        match self {
            DatabaseFamily::MySql if table.schema.is_some() => Err(Error::annotation(format!(
                "{self}: {type_name} is qualified by schema '{}'. Use `catalog` instead of \
                 `schema`, both in #[table] and in the mapper configuration",
                table.schema.as_deref().unwrap_or_default()
            ))),
            DatabaseFamily::Oracle if table.catalog.is_some() => Err(Error::annotation(format!(
                "{self}: {type_name} is qualified by catalog '{}'. Use `schema` instead of \
                 `catalog`, both in #[table] and in the mapper configuration",
                table.catalog.as_deref().unwrap_or_default()
            ))),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for DatabaseFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DatabaseFamily::MySql => "MySQL",
            DatabaseFamily::Oracle => "Oracle",
            DatabaseFamily::PostgreSql => "PostgreSQL",
            DatabaseFamily::SqlServer => "Microsoft SQL Server",
            DatabaseFamily::Sqlite => "SQLite",
            DatabaseFamily::Db2 => "DB2",
            DatabaseFamily::Other => "other",
        })
    }
}
