use super::Mapper;
use crate::Record;

use tablemap_core::{
    driver::{operation::Insert, Operation},
    schema::{
        db::{SqlType, TableRef},
        Role, TableMapping,
    },
    stmt::{TypedValue, Value},
    Error, Result,
};

use std::sync::Arc;

/// Everything needed to insert a record of one type, minus the values.
#[derive(Debug)]
pub(super) struct InsertSpec {
    table: TableRef,

    /// (property, column, bind type) in declaration order. A generated id
    /// is left out.
    columns: Vec<(&'static str, String, SqlType)>,

    generated_key: Option<String>,
}

impl InsertSpec {
    fn new(mapping: &TableMapping) -> InsertSpec {
        let generated = mapping.is_id_auto_generated();

        let columns = mapping
            .properties()
            .iter()
            .filter(|p| !(generated && p.is_id))
            .map(|p| (p.property_name, p.column_name.clone(), p.effective_ty()))
            .collect();

        InsertSpec {
            table: mapping.table().clone(),
            columns,
            generated_key: generated.then(|| mapping.id_column_name().to_string()),
        }
    }
}

impl Mapper {
    /// Inserts `record`.
    ///
    /// A generated id must be unset and is written back to the record after
    /// the insert. Any other id must be set. Created/updated on/by properties
    /// are populated from the installed suppliers and the version starts
    /// at 1.
    pub async fn insert<R: Record>(&self, record: &mut R) -> Result<()> {
        let mapping = self.table_mapping::<R>().await?;
        let accessors = R::accessors();
        let type_name = mapping.type_name();
        let id_property = mapping.id_property_name();

        let id = accessors.get(record, id_property)?;

        if mapping.is_id_auto_generated() {
            if !id.is_null() {
                return Err(Error::mapper(format!(
                    "for insert the property {type_name}.{id_property} has to be unset since \
                     the id of {type_name} is auto generated"
                )));
            }
        } else if id.is_null() {
            return Err(Error::mapper(format!(
                "for insert the property {type_name}.{id_property} must be set since the id \
                 of {type_name} is not auto generated"
            )));
        }

        if mapping.has_auto_assign_properties() {
            self.populate_insert_audit(&mapping, record)?;
        }

        let spec = self.insert_spec(&mapping);

        let mut values = Vec::with_capacity(spec.columns.len());
        for (property, _, ty) in &spec.columns {
            values.push(TypedValue::new(accessors.get(record, property)?, *ty));
        }

        let insert = Insert {
            table: spec.table.clone(),
            columns: spec.columns.iter().map(|(_, column, _)| column.clone()).collect(),
            values,
            generated_key: spec.generated_key.clone(),
        };

        let response = self.driver.exec(Operation::Insert(insert)).await?;

        if spec.generated_key.is_some() {
            let Some(key) = response.generated_key else {
                return Err(Error::mapper(format!(
                    "the database did not return a generated key for {type_name}.{id_property}"
                )));
            };

            accessors.set(record, id_property, key).map_err(|err| {
                err.context(format!(
                    "failed to assign the generated key to {type_name}.{id_property}"
                ))
            })?;
        }

        Ok(())
    }

    fn populate_insert_audit<R: Record>(&self, mapping: &TableMapping, record: &mut R) -> Result<()> {
        let accessors = R::accessors();

        for property in mapping.properties() {
            let value = match property.role() {
                Some(Role::CreatedOn | Role::UpdatedOn) => self.audit.on(),
                Some(Role::CreatedBy | Role::UpdatedBy) => self.audit.by(),
                Some(Role::Version) => Some(Value::I32(1)),
                _ => None,
            };

            if let Some(value) = value {
                accessors.set(record, property.property_name, value)?;
            }
        }

        Ok(())
    }

    fn insert_spec(&self, mapping: &TableMapping) -> Arc<InsertSpec> {
        let type_id = mapping.type_id();

        if let Some(spec) = self.caches.insert.get(&type_id) {
            log::trace!("insert cache hit; type={}", mapping.type_name());
            return spec;
        }

        let spec = InsertSpec::new(mapping);
        log::debug!(
            "built insert spec; type={} table={} columns={}",
            mapping.type_name(),
            mapping.qualified_table_name(),
            spec.columns.len()
        );

        self.caches.insert.put(type_id, spec)
    }
}
