mod family;
pub use family::DatabaseFamily;

pub mod operation;
pub use operation::Operation;

mod response;
pub use response::{Response, Row, Rows};

use crate::{
    async_trait,
    schema::db::{ColumnInfo, TableRef},
    Result,
};

use std::fmt::Debug;

/// Resolves table metadata from the database catalog.
#[async_trait]
pub trait Catalog: Debug + Send + Sync + 'static {
    /// Product name as reported by the database, e.g. `PostgreSQL`.
    async fn database_product_name(&self) -> Result<String>;

    /// Columns of `table`. An empty list means the table was not found.
    async fn columns(&self, table: &TableRef) -> Result<Vec<ColumnInfo>>;
}

/// Executes statements on behalf of the mapper.
#[async_trait]
pub trait Driver: Catalog {
    /// Execute a database operation
    async fn exec(&self, op: Operation) -> Result<Response>;
}
