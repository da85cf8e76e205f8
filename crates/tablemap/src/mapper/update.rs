use super::Mapper;
use crate::Record;

use tablemap_core::{
    driver::{operation::Statement, Operation},
    schema::{db::SqlType, TableMapping},
    stmt::{Primitive, TypedValue, Value},
    Error, Result,
};
use tablemap_sql::{SqlAndParams, INCREMENTED_VERSION};

use indexmap::IndexMap;

impl Mapper {
    /// Updates every mutable property of `record` and returns the number of
    /// rows updated.
    ///
    /// For a versioned record the update only applies when the row still has
    /// the record's version. Otherwise an optimistic lock error is returned.
    /// On success the record's version is advanced.
    pub async fn update<R: Record>(&self, record: &mut R) -> Result<u64> {
        let mapping = self.table_mapping::<R>().await?;
        let sql = self.update_sql_for(&mapping);
        self.exec_update(&mapping, &sql, record).await
    }

    /// Updates the named properties of `record`, plus its updated on/by and
    /// version properties.
    ///
    /// Naming the id, an auto-assign property, or an unmapped property is a
    /// mapper error, raised before any statement runs.
    pub async fn update_specific_properties<R: Record>(
        &self,
        record: &mut R,
        properties: &[&str],
    ) -> Result<u64> {
        let mapping = self.table_mapping::<R>().await?;
        let sql = self.update_properties_sql_for(&mapping, properties)?;
        self.exec_update(&mapping, &sql, record).await
    }

    async fn exec_update<R: Record>(
        &self,
        mapping: &TableMapping,
        sql: &SqlAndParams,
        record: &mut R,
    ) -> Result<u64> {
        let accessors = R::accessors();
        let type_name = mapping.type_name();
        let id_property = mapping.id_property_name();

        let id = accessors.get(record, id_property)?;
        if id.is_null() {
            return Err(Error::mapper(format!(
                "{type_name}.{id_property} is the id and must not be null"
            )));
        }

        self.populate_update_audit(mapping, sql, record)?;

        let next_version = if sql.has_param(INCREMENTED_VERSION) {
            Some(self.next_version(mapping, record)?)
        } else {
            None
        };

        let mut params = IndexMap::with_capacity(sql.params().len());
        for name in sql.params() {
            let param = if name == INCREMENTED_VERSION {
                TypedValue::new(next_version, SqlType::Integer)
            } else {
                let Some(property) = mapping.property(name) else {
                    return Err(Error::mapper(format!(
                        "no mapping found for property '{name}' in {type_name}"
                    )));
                };
                TypedValue::new(accessors.get(record, name)?, property.effective_ty())
            };

            params.insert(name.clone(), param);
        }

        let op = Operation::Execute(Statement::named(sql.sql(), params));
        let count = self.driver.exec(op).await?.rows.into_count()?;

        let (Some(next_version), Some(version)) = (next_version, mapping.version_mapping()) else {
            return Ok(count);
        };

        if count == 0 {
            let current = accessors.get(record, version.property_name)?;

            log::warn!(
                "optimistic lock failure; type={type_name} {}={id} {}={current}",
                mapping.id_column_name(),
                version.column_name
            );

            return Err(Error::optimistic_lock(format!(
                "{type_name} update failed due to stale data. Failed for {} = {id} and {} = {current}",
                mapping.id_column_name(),
                version.column_name
            )));
        }

        accessors.set(record, version.property_name, Value::I32(next_version))?;

        Ok(count)
    }

    /// Sets updated on/by from the suppliers when the statement binds them.
    fn populate_update_audit<R: Record>(
        &self,
        mapping: &TableMapping,
        sql: &SqlAndParams,
        record: &mut R,
    ) -> Result<()> {
        let accessors = R::accessors();

        if let Some(updated_on) = mapping.updated_on_mapping() {
            if sql.has_param(updated_on.property_name) {
                if let Some(value) = self.audit.on() {
                    accessors.set(record, updated_on.property_name, value)?;
                }
            }
        }

        if let Some(updated_by) = mapping.updated_by_mapping() {
            if sql.has_param(updated_by.property_name) {
                if let Some(value) = self.audit.by() {
                    accessors.set(record, updated_by.property_name, value)?;
                }
            }
        }

        Ok(())
    }

    fn next_version<R: Record>(&self, mapping: &TableMapping, record: &R) -> Result<i32> {
        let type_name = mapping.type_name();

        let Some(version) = mapping.version_mapping() else {
            return Err(Error::mapper(format!(
                "{type_name} has no #[version] property"
            )));
        };

        let current = R::accessors().get(record, version.property_name)?;
        let Some(current) = Option::<i32>::load(current)? else {
            return Err(Error::mapper(format!(
                "{type_name}.{0} is declared #[version]. {0} must not be null when updating",
                version.property_name
            )));
        };

        current.checked_add(1).ok_or_else(|| {
            Error::mapper(format!(
                "{type_name}.{} cannot be incremented past {current}",
                version.property_name
            ))
        })
    }
}
