use super::{Result, Role, TableMapping};
use crate::{stmt::Type, Error};

struct Verify<'a> {
    mapping: &'a TableMapping,
}

impl TableMapping {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { mapping: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_roles_are_unique()?;
        self.verify_roles_do_not_conflict()?;
        self.verify_version_type()?;
        Ok(())
    }

    /// At most one property per role across the type.
    fn verify_roles_are_unique(&self) -> Result<()> {
        for role in Role::ALL {
            let count = self
                .mapping
                .properties
                .iter()
                .filter(|p| p.has_role(role))
                .count();

            if count > 1 {
                return Err(Error::annotation(format!(
                    "{} has multiple {role} attributes",
                    self.mapping.type_name
                )));
            }
        }

        Ok(())
    }

    /// At most one role per property.
    fn verify_roles_do_not_conflict(&self) -> Result<()> {
        for property in &self.mapping.properties {
            if property.roles().count() > 1 {
                return Err(Error::annotation(format!(
                    "{}.{} has multiple role attributes that conflict",
                    self.mapping.type_name, property.property_name
                )));
            }
        }

        Ok(())
    }

    fn verify_version_type(&self) -> Result<()> {
        if let Some(version) = self.mapping.version_mapping() {
            if version.property_ty != Type::I32 {
                return Err(Error::annotation(format!(
                    "#[version] requires the type of property {}.{} to be i32",
                    self.mapping.type_name, version.property_name
                )));
            }
        }

        Ok(())
    }
}
