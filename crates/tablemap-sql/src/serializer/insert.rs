use super::{Comma, Formatter, Placeholder, TableName, ToSql};

use indexmap::IndexSet;
use tablemap_core::driver::operation::Insert;

/// Renders an insert specification as
/// `INSERT INTO <table> (<columns>) VALUES (?, ...)`.
///
/// Values bind positionally in column order. Drivers obtain the generated
/// key themselves.
pub fn serialize_insert(insert: &Insert) -> String {
    let mut dst = String::new();
    let mut params = IndexSet::new();
    let f = &mut Formatter {
        dst: &mut dst,
        params: &mut params,
    };

    let columns = insert.columns.iter().map(String::as_str);
    let placeholders = insert.columns.iter().map(|_| Placeholder);

    fmt!(f, "INSERT INTO " TableName(&insert.table) " (" Comma(columns) ") VALUES (" Comma(placeholders) ")");

    dst
}
