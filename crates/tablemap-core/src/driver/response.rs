use crate::{stmt::Value, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,

    /// Key generated by an insert, if one was requested.
    pub generated_key: Option<Value>,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Rows returned by a query
    Values(Vec<Row>),
}

/// A result row. Column lookup ignores case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Response {
    pub fn count(count: u64) -> Response {
        Response {
            rows: Rows::Count(count),
            generated_key: None,
        }
    }

    pub fn rows(rows: Vec<Row>) -> Response {
        Response {
            rows: Rows::Values(rows),
            generated_key: None,
        }
    }

    pub fn with_generated_key(mut self, key: Value) -> Response {
        self.generated_key = Some(key);
        self
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Rows::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Rows::Values(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            Rows::Values(_) => crate::bail!("expected an affected-row count, got rows"),
        }
    }

    pub fn into_values(self) -> Result<Vec<Row>> {
        match self {
            Rows::Values(rows) => Ok(rows),
            Rows::Count(_) => crate::bail!("expected rows, got an affected-row count"),
        }
    }
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.columns.push((column.into(), value));
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value)
    }

    /// Removes and returns the value of `column`.
    pub fn take(&mut self, column: &str) -> Option<Value> {
        let index = self
            .columns
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case(column))?;
        Some(self.columns.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Row {
        Row {
            columns: iter.into_iter().collect(),
        }
    }
}
