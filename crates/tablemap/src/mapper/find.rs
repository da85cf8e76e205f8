use super::Mapper;
use crate::Record;

use std_util::str;
use tablemap_core::{
    driver::{operation::Statement, Operation, Row},
    schema::TableMapping,
    stmt::{TypedValue, Value},
    Result,
};

impl Mapper {
    /// Finds the record of type `R` with the given id.
    ///
    /// Returns `None` when no row matches.
    pub async fn find_by_id<R: Record>(&self, id: impl Into<Value>) -> Result<Option<R>> {
        let mapping = self.table_mapping::<R>().await?;
        let sql = self.find_by_id_sql_for(&mapping);

        let params = vec![TypedValue::new(id, mapping.id_column_ty())];
        let op = Operation::Query(Statement::positional(sql.as_str(), params));

        let rows = self.driver.exec(op).await?.rows.into_values()?;

        match rows.into_iter().next() {
            Some(row) => load_record(&mapping, row).map(Some),
            None => Ok(None),
        }
    }

    /// Every record of type `R`, in the order the database returns them.
    pub async fn find_all<R: Record>(&self) -> Result<Vec<R>> {
        let mapping = self.table_mapping::<R>().await?;
        let sql = self.find_all_sql_for(&mapping);

        let op = Operation::Query(Statement::positional(sql.as_str(), vec![]));
        let rows = self.driver.exec(op).await?.rows.into_values()?;

        rows.into_iter()
            .map(|row| load_record(&mapping, row))
            .collect()
    }
}

/// Builds a record from a row of a find statement. Columns are matched by
/// the underscore form of the property name first, then by column name.
fn load_record<R: Record>(mapping: &TableMapping, mut row: Row) -> Result<R> {
    let accessors = R::accessors();
    let mut record = R::default();

    for property in mapping.properties() {
        let name = property.property_name;
        let value = row
            .take(&str::to_underscore_name(name))
            .or_else(|| row.take(&property.column_name))
            .unwrap_or_default();

        accessors
            .set(&mut record, name, value)
            .map_err(|err| {
                err.context(format!(
                    "failed to load {}.{name} from column {}",
                    mapping.type_name(),
                    property.column_name
                ))
            })?;
    }

    Ok(record)
}
