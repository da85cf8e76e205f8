use super::db::SqlType;
use crate::stmt::Type;

use std::fmt;

/// The declaration of a record type: its table and its fields.
///
/// Produced once per type by `#[derive(Record)]` and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RecordDescriptor {
    /// The record's type name, used in error messages.
    pub type_name: &'static str,

    /// `#[table(...)]`, if declared.
    pub table: Option<TableAttr>,

    /// Own fields first, in declaration order, followed by inherited ones.
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAttr {
    pub name: &'static str,
    pub schema: Option<&'static str>,
    pub catalog: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,

    /// Declared type, with any `Option` stripped.
    pub ty: Type,

    /// `true` when the field is an `Option`.
    pub nullable: bool,

    /// `#[column(...)]`, if declared.
    pub column: Option<ColumnAttr>,

    /// Role attributes, in the order they were written.
    pub roles: Vec<Role>,

    /// `#[id(auto)]`: the database generates the id on insert.
    pub auto_generated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnAttr {
    /// Explicit column name; defaults to the underscore form of the field name.
    pub name: Option<&'static str>,

    /// Type the column's values are always bound with.
    pub sql_type: Option<SqlType>,
}

/// Attributes that give a field a system-managed behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Id,
    Version,
    CreatedOn,
    CreatedBy,
    UpdatedOn,
    UpdatedBy,
}

impl RecordDescriptor {
    pub fn new(type_name: &'static str) -> RecordDescriptor {
        RecordDescriptor {
            type_name,
            table: None,
            fields: vec![],
        }
    }

    /// Appends the fields of an embedded base record.
    ///
    /// Fields already declared on this record shadow base fields of the same
    /// name. The base's table declaration is used when this record has none.
    pub fn with_base(mut self, base: &RecordDescriptor) -> RecordDescriptor {
        if self.table.is_none() {
            self.table = base.table.clone();
        }

        for field in &base.fields {
            if !self.fields.iter().any(|own| own.name == field.name) {
                self.fields.push(field.clone());
            }
        }

        self
    }

    /// Fields that take part in the table mapping.
    pub fn mapped_fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().filter(|field| field.is_mapped())
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The first field carrying `#[id]`.
    pub fn id_field(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.has_role(Role::Id))
    }
}

impl FieldDescriptor {
    pub fn new(name: &'static str, ty: Type, nullable: bool) -> FieldDescriptor {
        FieldDescriptor {
            name,
            ty,
            nullable,
            column: None,
            roles: vec![],
            auto_generated: false,
        }
    }

    /// A field is mapped when it has a column or a role attribute.
    pub fn is_mapped(&self) -> bool {
        self.column.is_some() || !self.roles.is_empty()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Id,
        Role::Version,
        Role::CreatedOn,
        Role::CreatedBy,
        Role::UpdatedOn,
        Role::UpdatedBy,
    ];

    /// The attribute that declares the role.
    pub fn attr_name(self) -> &'static str {
        match self {
            Role::Id => "id",
            Role::Version => "version",
            Role::CreatedOn => "created_on",
            Role::CreatedBy => "created_by",
            Role::UpdatedOn => "updated_on",
            Role::UpdatedBy => "updated_by",
        }
    }

    /// Roles whose values are assigned by the mapper rather than the caller.
    pub fn is_auto_assign(self) -> bool {
        !matches!(self, Role::Id)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#[{}]", self.attr_name())
    }
}
