use super::Mapper;
use crate::Record;

use tablemap_core::{
    driver::{operation::Statement, Operation},
    schema::TableMapping,
    stmt::{TypedValue, Value},
    Error, Result,
};

impl Mapper {
    /// Deletes the row of `record` and returns the number of rows deleted.
    pub async fn delete<R: Record>(&self, record: &R) -> Result<u64> {
        let mapping = self.table_mapping::<R>().await?;
        let id = R::accessors().get(record, mapping.id_property_name())?;
        self.exec_delete(&mapping, id).await
    }

    /// Deletes the row of type `R` with the given id and returns the number
    /// of rows deleted.
    pub async fn delete_by_id<R: Record>(&self, id: impl Into<Value>) -> Result<u64> {
        let mapping = self.table_mapping::<R>().await?;
        self.exec_delete(&mapping, id.into()).await
    }

    async fn exec_delete(&self, mapping: &TableMapping, id: Value) -> Result<u64> {
        if id.is_null() {
            return Err(Error::mapper(format!(
                "{}.{} is the id and must not be null",
                mapping.type_name(),
                mapping.id_property_name()
            )));
        }

        let sql = self.delete_sql_for(mapping);
        let params = vec![TypedValue::new(id, mapping.id_column_ty())];
        let op = Operation::Execute(Statement::positional(sql.as_str(), params));

        self.driver.exec(op).await?.rows.into_count()
    }
}
