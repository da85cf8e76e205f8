use crate::{schema::db::TableRef, stmt::TypedValue};

use indexmap::IndexMap;

/// A unit of work handed to the driver.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Insert one row, optionally returning the generated key.
    Insert(Insert),

    /// A statement returning rows.
    Query(Statement),

    /// A statement returning an affected-row count.
    Execute(Statement),
}

/// An insert specification. The driver renders the statement text.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: TableRef,

    /// Column names, in the same order as `values`.
    pub columns: Vec<String>,

    pub values: Vec<TypedValue>,

    /// Column whose database-generated value is returned.
    pub generated_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Statement {
    pub sql: String,
    pub params: Params,
}

/// Statement parameters: `?` placeholders or `:name` placeholders.
#[derive(Debug, Clone)]
pub enum Params {
    Positional(Vec<TypedValue>),
    Named(IndexMap<String, TypedValue>),
}

impl Operation {
    /// SQL text for query and execute operations.
    pub fn sql(&self) -> Option<&str> {
        match self {
            Operation::Insert(_) => None,
            Operation::Query(stmt) | Operation::Execute(stmt) => Some(&stmt.sql),
        }
    }
}

impl Statement {
    pub fn positional(sql: impl Into<String>, params: Vec<TypedValue>) -> Statement {
        Statement {
            sql: sql.into(),
            params: Params::Positional(params),
        }
    }

    pub fn named(sql: impl Into<String>, params: IndexMap<String, TypedValue>) -> Statement {
        Statement {
            sql: sql.into(),
            params: Params::Named(params),
        }
    }
}

impl Params {
    pub fn len(&self) -> usize {
        match self {
            Params::Positional(params) => params.len(),
            Params::Named(params) => params.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Operation {
        Operation::Insert(value)
    }
}
