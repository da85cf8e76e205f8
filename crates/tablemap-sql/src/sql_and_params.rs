use indexmap::IndexSet;

/// Update SQL text together with the named parameters it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlAndParams {
    sql: String,
    params: IndexSet<String>,
}

impl SqlAndParams {
    /// # Panics
    ///
    /// Panics if either the SQL text or the parameter set is empty.
    pub fn new(sql: String, params: IndexSet<String>) -> SqlAndParams {
        assert!(!sql.is_empty(), "sql must not be empty");
        assert!(!params.is_empty(), "params must not be empty");
        SqlAndParams { sql, params }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Parameter names in order of first appearance.
    pub fn params(&self) -> &IndexSet<String> {
        &self.params
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.params.contains(name)
    }
}
