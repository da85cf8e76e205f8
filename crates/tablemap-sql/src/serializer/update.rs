use super::{delim::And, Assign, Comma, Formatter, Serializer, TableName, ToSql};
use crate::{SqlAndParams, INCREMENTED_VERSION};

use tablemap_core::{
    schema::{PropertyMapping, Role},
    Error, Result,
};

/// The SET target of a property in an update statement.
struct SetColumn<'a>(&'a PropertyMapping);

/// `<id> = :<id>[ AND <version> = :<version>]`
struct Guard<'a>(&'a PropertyMapping, Option<&'a PropertyMapping>);

impl Serializer<'_> {
    /// Updates every mapped property except the id and the created on/by
    /// properties.
    ///
    /// With a version property the statement sets it to the
    /// `incremented_version` parameter and guards on its current value.
    pub fn update(&self) -> SqlAndParams {
        let set = self
            .mapping
            .properties()
            .iter()
            .filter(|p| !matches!(p.role(), Some(Role::Id | Role::CreatedOn | Role::CreatedBy)));

        self.update_statement(set)
    }

    /// Updates the named properties plus the updated on/by and version
    /// properties of the record.
    ///
    /// Naming an unknown property, the id, or any auto-assign property is a
    /// mapper error.
    pub fn update_properties(&self, properties: &[&str]) -> Result<SqlAndParams> {
        let mapping = self.mapping;
        let type_name = mapping.type_name();

        if properties.is_empty() {
            return Err(Error::mapper(format!(
                "at least one property is required to update {type_name}"
            )));
        }

        for name in properties {
            let Some(property) = mapping.property(name) else {
                return Err(Error::mapper(format!(
                    "no mapping found for property '{name}' in {type_name}"
                )));
            };

            if property.is_id {
                return Err(Error::mapper(format!(
                    "id property {type_name}.{name} cannot be updated"
                )));
            }

            if property.is_auto_assign() {
                return Err(Error::mapper(format!(
                    "auto assign property {type_name}.{name} cannot be updated"
                )));
            }
        }

        let set = mapping.properties().iter().filter(|p| {
            properties.contains(&p.property_name)
                || matches!(
                    p.role(),
                    Some(Role::UpdatedOn | Role::UpdatedBy | Role::Version)
                )
        });

        Ok(self.update_statement(set))
    }

    fn update_statement<'b>(&self, set: impl Iterator<Item = &'b PropertyMapping>) -> SqlAndParams {
        let mapping = self.mapping;

        let (sql, params) = self.render(|f| {
            fmt!(f, "UPDATE " TableName(mapping.table()) " SET " Comma(set.map(SetColumn)) " WHERE "
                Guard(mapping.id_mapping(), mapping.version_mapping()));
        });

        SqlAndParams::new(sql, params)
    }
}

impl ToSql for SetColumn<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let property = self.0;
        let param = if property.is_version {
            INCREMENTED_VERSION
        } else {
            property.property_name
        };

        fmt!(f, Assign { column: &property.column_name, param });
    }
}

impl ToSql for Guard<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Guard(id, version) = self;
        let guards = Some(id).into_iter().chain(version).map(|p| Assign {
            column: &p.column_name,
            param: p.property_name,
        });
        fmt!(f, And(guards));
    }
}
