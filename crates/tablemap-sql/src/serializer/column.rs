use super::{Formatter, Named, ToSql};

use std_util::str;
use tablemap_core::schema::PropertyMapping;

/// A column in a SELECT list, aliased when its name differs from the
/// underscore form of the property.
pub(super) struct SelectColumn<'a>(pub(super) &'a PropertyMapping);

/// `<column> = :<param>`
pub(super) struct Assign<'a> {
    pub(super) column: &'a str,
    pub(super) param: &'a str,
}

impl ToSql for SelectColumn<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let property = self.0;
        let alias = str::to_underscore_name(property.property_name);

        fmt!(f, property.column_name.as_str());

        if !property.column_name.eq_ignore_ascii_case(&alias) {
            fmt!(f, " AS " alias.as_str());
        }
    }
}

impl ToSql for Assign<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.column " = " Named(self.param));
    }
}
