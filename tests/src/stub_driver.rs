use crate::logging_driver::OpsLog;

use std::collections::HashMap;
use tablemap::driver::Driver;
use tablemap_core::{
    async_trait,
    driver::{Catalog, Operation, Response},
    schema::db::{ColumnInfo, SqlType, TableRef},
    stmt::Value,
    Result,
};

/// A driver with a scripted catalog. Statements are logged and report one
/// affected row; queries return no rows.
#[derive(Debug)]
pub struct StubDriver {
    product_name: String,

    /// Columns by qualified table name
    tables: HashMap<String, Vec<ColumnInfo>>,

    ops_log: OpsLog,
}

impl StubDriver {
    pub fn new(product_name: &str) -> Self {
        Self {
            product_name: product_name.to_string(),
            tables: HashMap::new(),
            ops_log: OpsLog::default(),
        }
    }

    pub fn table(mut self, table: &TableRef, columns: &[(&str, SqlType)]) -> Self {
        let columns = columns
            .iter()
            .map(|(name, ty)| ColumnInfo::new(name, *ty))
            .collect();
        self.tables.insert(table.qualified_name(), columns);
        self
    }

    pub fn ops_log_handle(&self) -> OpsLog {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Catalog for StubDriver {
    async fn database_product_name(&self) -> Result<String> {
        Ok(self.product_name.clone())
    }

    async fn columns(&self, table: &TableRef) -> Result<Vec<ColumnInfo>> {
        Ok(self
            .tables
            .get(&table.qualified_name())
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl Driver for StubDriver {
    async fn exec(&self, operation: Operation) -> Result<Response> {
        self.ops_log.push(operation.clone());

        Ok(match operation {
            Operation::Insert(insert) if insert.generated_key.is_some() => {
                Response::count(1).with_generated_key(Value::I64(1))
            }
            Operation::Query(_) => Response::rows(vec![]),
            _ => Response::count(1),
        })
    }
}
