use super::{Formatter, ToSql};

/// A positional `?` placeholder.
pub(super) struct Placeholder;

/// A `:name` placeholder. The name is recorded in the formatter's parameter
/// set.
pub(super) struct Named<'a>(pub(super) &'a str);

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('?');
    }
}

impl ToSql for Named<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push(':');
        f.dst.push_str(self.0);

        if !f.params.contains(self.0) {
            f.params.insert(self.0.to_string());
        }
    }
}
