use std::sync::{Arc, Mutex};
use tablemap::driver::Driver;
use tablemap_core::{
    async_trait,
    driver::{Catalog, Operation, Response},
    schema::db::{ColumnInfo, TableRef},
    Result,
};

/// Operations executed through a driver, shared with the test body.
#[derive(Debug, Clone, Default)]
pub struct OpsLog(Arc<Mutex<Vec<Operation>>>);

impl OpsLog {
    pub fn push(&self, op: Operation) {
        self.0.lock().expect("ops log lock").push(op);
    }

    pub fn ops(&self) -> Vec<Operation> {
        self.0.lock().expect("ops log lock").clone()
    }

    /// SQL text of the logged query and execute operations
    pub fn sql(&self) -> Vec<String> {
        self.ops()
            .iter()
            .filter_map(|op| op.sql().map(str::to_string))
            .collect()
    }

    pub fn last(&self) -> Option<Operation> {
        self.0.lock().expect("ops log lock").last().cloned()
    }

    pub fn len(&self) -> usize {
        self.0.lock().expect("ops log lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.0.lock().expect("ops log lock").clear();
    }
}

/// A driver wrapper that logs every executed operation
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,
    ops_log: OpsLog,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: OpsLog::default(),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> OpsLog {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Catalog for LoggingDriver {
    async fn database_product_name(&self) -> Result<String> {
        self.inner.database_product_name().await
    }

    async fn columns(&self, table: &TableRef) -> Result<Vec<ColumnInfo>> {
        self.inner.columns(table).await
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    async fn exec(&self, operation: Operation) -> Result<Response> {
        self.ops_log.push(operation.clone());
        self.inner.exec(operation).await
    }
}
