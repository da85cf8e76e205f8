use super::{
    db::{ColumnInfo, SqlType, TableRef},
    FieldDescriptor, IdPropertyInfo, PropertyMapping, RecordDescriptor, Result, TableMapping,
    TypeOverrides,
};
use crate::{driver::DatabaseFamily, Error};

use std::{any::TypeId, collections::HashMap};
use std_util::str;

/// Builds a [`TableMapping`] from a record descriptor and catalog metadata.
///
/// Building happens in two steps so the caller can fetch catalog metadata
/// in between: [`Builder::table`] resolves and checks the table reference,
/// then [`Builder::build`] merges the fetched columns into a validated
/// mapping.
#[derive(Debug)]
pub struct Builder<'a> {
    descriptor: &'a RecordDescriptor,
    overrides: Option<&'a TypeOverrides>,
    schema: Option<&'a str>,
    catalog: Option<&'a str>,
}

impl<'a> Builder<'a> {
    pub fn new(descriptor: &'a RecordDescriptor) -> Self {
        Builder {
            descriptor,
            overrides: None,
            schema: None,
            catalog: None,
        }
    }

    pub fn type_overrides(mut self, overrides: &'a TypeOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Schema used when `#[table]` leaves it blank.
    pub fn default_schema(mut self, schema: Option<&'a str>) -> Self {
        self.schema = schema;
        self
    }

    /// Catalog used when `#[table]` leaves it blank.
    pub fn default_catalog(mut self, catalog: Option<&'a str>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Checks the record declaration and resolves the table it maps to.
    pub fn table(&self, family: DatabaseFamily) -> Result<TableRef> {
        let descriptor = self.descriptor;
        let type_name = descriptor.type_name;

        let Some(attr) = &descriptor.table else {
            return Err(Error::annotation(format!(
                "{type_name} does not have a #[table] declaration. It is required"
            )));
        };

        if str::is_blank(attr.name) {
            return Err(Error::annotation(format!(
                "for {type_name} the #[table] declaration has a blank name"
            )));
        }

        self.id_field()?;

        let table = TableRef {
            name: attr.name.trim().to_string(),
            schema: str::non_blank(attr.schema)
                .or(str::non_blank(self.schema))
                .map(String::from),
            catalog: str::non_blank(attr.catalog)
                .or(str::non_blank(self.catalog))
                .map(String::from),
        };

        family.check_qualifiers(&table, type_name)?;

        Ok(table)
    }

    /// Merges the catalog's columns for `table` into a validated mapping.
    pub fn build(
        &self,
        type_id: TypeId,
        table: TableRef,
        columns: &[ColumnInfo],
    ) -> Result<TableMapping> {
        let type_name = self.descriptor.type_name;

        if columns.is_empty() {
            return Err(Error::annotation(table_not_found(type_name, &table)));
        }

        let column_types: HashMap<String, SqlType> = columns
            .iter()
            .map(|column| (column.name.to_lowercase(), column.ty))
            .collect();

        let id_field = self.id_field()?;

        let mut properties = vec![];
        let mut by_name = HashMap::new();

        for field in self.descriptor.mapped_fields() {
            let column_name = column_name(field);

            let Some(column_ty) = column_types.get(&column_name) else {
                return Err(Error::annotation(format!(
                    "{column_name} column not found in table {} for property {type_name}.{}",
                    table.name, field.name
                )));
            };

            let mut property = PropertyMapping {
                nullable: field.nullable,
                column_ty: *column_ty,
                overridden_ty: self.overridden_ty(field),
                ..PropertyMapping::new(field.name, field.ty, &column_name)
            };

            for role in &field.roles {
                property.set_role(*role);
            }

            by_name.insert(field.name, properties.len());
            properties.push(property);
        }

        let mapping = TableMapping {
            type_id,
            type_name,
            table,
            id: IdPropertyInfo {
                property_name: id_field.name,
                auto_generated: id_field.auto_generated,
            },
            properties,
            by_name,
        };

        mapping.verify()?;

        log::debug!(
            "built table mapping; type={} table={} properties={}",
            type_name,
            mapping.qualified_table_name(),
            mapping.properties.len()
        );

        Ok(mapping)
    }

    fn id_field(&self) -> Result<&'a FieldDescriptor> {
        let type_name = self.descriptor.type_name;

        let Some(field) = self.descriptor.id_field() else {
            return Err(Error::annotation(format!("#[id] not found in {type_name}")));
        };

        if !field.nullable {
            return Err(Error::annotation(format!(
                "{type_name}.{} is an id and cannot be a non-nullable type. Declare it as Option<{}>",
                field.name, field.ty
            )));
        }

        Ok(field)
    }

    fn overridden_ty(&self, field: &FieldDescriptor) -> Option<SqlType> {
        field
            .column
            .as_ref()
            .and_then(|column| column.sql_type)
            .or_else(|| self.overrides.and_then(|o| o.get(field.ty)))
    }
}

/// `#[column("name")]` if given, otherwise the underscore form of the field.
fn column_name(field: &FieldDescriptor) -> String {
    match field.column.as_ref().and_then(|c| str::non_blank(c.name)) {
        Some(name) => name.trim().to_lowercase(),
        None => str::to_underscore_name(field.name),
    }
}

fn table_not_found(type_name: &str, table: &TableRef) -> String {
    let mut msg = format!("unable to locate metadata for table '{}'", table.name);

    match (&table.schema, &table.catalog) {
        (Some(schema), Some(catalog)) => {
            msg.push_str(&format!(" in schema {schema} and catalog {catalog}"))
        }
        (Some(schema), None) => msg.push_str(&format!(" in schema {schema}")),
        (None, Some(catalog)) => msg.push_str(&format!(" in catalog {catalog}")),
        (None, None) => {}
    }

    msg.push_str(&format!(" for {type_name}"));
    msg
}
