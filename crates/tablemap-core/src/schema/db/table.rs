use std::fmt;

/// A table name together with the schema and catalog that qualify it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef {
    pub name: String,
    pub schema: Option<String>,
    pub catalog: Option<String>,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> TableRef {
        TableRef {
            name: name.into(),
            schema: None,
            catalog: None,
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> TableRef {
        self.schema = Some(schema.into());
        self
    }

    pub fn catalog(mut self, catalog: impl Into<String>) -> TableRef {
        self.catalog = Some(catalog.into());
        self
    }

    /// The name used in generated SQL: `catalog.schema.table`, skipping the
    /// qualifiers that are not set.
    pub fn qualified_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for qualifier in [&self.catalog, &self.schema].into_iter().flatten() {
            write!(f, "{qualifier}.")?;
        }
        f.write_str(&self.name)
    }
}
