use super::db::SqlType;
use crate::stmt::Type;

use std::collections::HashMap;

/// Forces the SQL type used for properties of a given declared type.
///
/// Catalogs sometimes report the wrong type for a property type, e.g. a
/// timezone-aware timestamp column reported as a plain timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeOverrides {
    entries: HashMap<Type, SqlType>,
}

impl TypeOverrides {
    pub fn new() -> TypeOverrides {
        TypeOverrides::default()
    }

    pub fn insert(&mut self, ty: Type, sql_type: SqlType) -> &mut Self {
        self.entries.insert(ty, sql_type);
        self
    }

    pub fn get(&self, ty: Type) -> Option<SqlType> {
        self.entries.get(&ty).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(Type, SqlType)> for TypeOverrides {
    fn from_iter<I: IntoIterator<Item = (Type, SqlType)>>(iter: I) -> TypeOverrides {
        TypeOverrides {
            entries: iter.into_iter().collect(),
        }
    }
}
