use super::{
    db::{SqlType, TableRef},
    Role,
};
use crate::stmt::Type;

use std::{any::TypeId, collections::HashMap};

/// One mapped field of a record type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMapping {
    pub property_name: &'static str,
    pub property_ty: Type,
    pub nullable: bool,

    /// Column name, always lower-cased.
    pub column_name: String,

    /// Type reported by the catalog.
    pub column_ty: SqlType,

    /// Type forced by a column attribute or the type-override table.
    pub overridden_ty: Option<SqlType>,

    pub is_id: bool,
    pub is_version: bool,
    pub is_created_on: bool,
    pub is_created_by: bool,
    pub is_updated_on: bool,
    pub is_updated_by: bool,
}

/// Identifies the id property and whether the database generates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPropertyInfo {
    pub property_name: &'static str,
    pub auto_generated: bool,
}

/// The validated mapping between a record type and its table.
#[derive(Debug, Clone)]
pub struct TableMapping {
    pub(super) type_id: TypeId,
    pub(super) type_name: &'static str,
    pub(super) table: TableRef,
    pub(super) id: IdPropertyInfo,
    pub(super) properties: Vec<PropertyMapping>,
    pub(super) by_name: HashMap<&'static str, usize>,
}

impl PropertyMapping {
    pub fn new(property_name: &'static str, property_ty: Type, column_name: &str) -> Self {
        PropertyMapping {
            property_name,
            property_ty,
            nullable: true,
            column_name: column_name.to_lowercase(),
            column_ty: SqlType::default_for(property_ty),
            overridden_ty: None,
            is_id: false,
            is_version: false,
            is_created_on: false,
            is_created_by: false,
            is_updated_on: false,
            is_updated_by: false,
        }
    }

    pub fn set_role(&mut self, role: Role) {
        *self.role_flag_mut(role) = true;
    }

    pub fn has_role(&self, role: Role) -> bool {
        match role {
            Role::Id => self.is_id,
            Role::Version => self.is_version,
            Role::CreatedOn => self.is_created_on,
            Role::CreatedBy => self.is_created_by,
            Role::UpdatedOn => self.is_updated_on,
            Role::UpdatedBy => self.is_updated_by,
        }
    }

    fn role_flag_mut(&mut self, role: Role) -> &mut bool {
        match role {
            Role::Id => &mut self.is_id,
            Role::Version => &mut self.is_version,
            Role::CreatedOn => &mut self.is_created_on,
            Role::CreatedBy => &mut self.is_created_by,
            Role::UpdatedOn => &mut self.is_updated_on,
            Role::UpdatedBy => &mut self.is_updated_by,
        }
    }

    /// Roles set on this property.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(|role| self.has_role(*role))
    }

    /// The single role of a valid mapping, if any.
    pub fn role(&self) -> Option<Role> {
        self.roles().next()
    }

    /// Version or created/updated on/by.
    pub fn is_auto_assign(&self) -> bool {
        self.roles().any(Role::is_auto_assign)
    }

    /// The type values of this property are bound with.
    pub fn effective_ty(&self) -> SqlType {
        self.overridden_ty.unwrap_or(self.column_ty)
    }
}

impl TableMapping {
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    pub fn table_name(&self) -> &str {
        &self.table.name
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.table.schema.as_deref()
    }

    pub fn catalog_name(&self) -> Option<&str> {
        self.table.catalog.as_deref()
    }

    pub fn qualified_table_name(&self) -> String {
        self.table.qualified_name()
    }

    pub fn id(&self) -> &IdPropertyInfo {
        &self.id
    }

    pub fn is_id_auto_generated(&self) -> bool {
        self.id.auto_generated
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> &[PropertyMapping] {
        &self.properties
    }

    pub fn property(&self, property_name: &str) -> Option<&PropertyMapping> {
        self.by_name
            .get(property_name)
            .map(|index| &self.properties[*index])
    }

    pub fn id_mapping(&self) -> &PropertyMapping {
        &self.properties[self.by_name[self.id.property_name]]
    }

    pub fn id_property_name(&self) -> &'static str {
        self.id.property_name
    }

    pub fn id_column_name(&self) -> &str {
        &self.id_mapping().column_name
    }

    pub fn id_column_ty(&self) -> SqlType {
        self.id_mapping().effective_ty()
    }

    /// The property carrying `role`. Only meaningful after validation, when
    /// each role appears at most once.
    pub fn role_mapping(&self, role: Role) -> Option<&PropertyMapping> {
        self.properties.iter().find(|p| p.has_role(role))
    }

    pub fn version_mapping(&self) -> Option<&PropertyMapping> {
        self.role_mapping(Role::Version)
    }

    pub fn created_on_mapping(&self) -> Option<&PropertyMapping> {
        self.role_mapping(Role::CreatedOn)
    }

    pub fn created_by_mapping(&self) -> Option<&PropertyMapping> {
        self.role_mapping(Role::CreatedBy)
    }

    pub fn updated_on_mapping(&self) -> Option<&PropertyMapping> {
        self.role_mapping(Role::UpdatedOn)
    }

    pub fn updated_by_mapping(&self) -> Option<&PropertyMapping> {
        self.role_mapping(Role::UpdatedBy)
    }

    pub fn has_auto_assign_properties(&self) -> bool {
        self.properties.iter().any(PropertyMapping::is_auto_assign)
    }

    pub fn column_ty(&self, property_name: &str) -> Option<SqlType> {
        self.property(property_name).map(|p| p.column_ty)
    }

    pub fn overridden_column_ty(&self, property_name: &str) -> Option<SqlType> {
        self.property(property_name).and_then(|p| p.overridden_ty)
    }

    /// Property name to column name, in declaration order.
    pub fn property_to_column(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.properties
            .iter()
            .map(|p| (p.property_name, p.column_name.as_str()))
    }
}
