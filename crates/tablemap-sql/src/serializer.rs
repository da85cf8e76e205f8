#[macro_use]
mod fmt;
use fmt::ToSql;

mod column;
use column::{Assign, SelectColumn};

mod delim;
use delim::Comma;

mod insert;
pub use insert::serialize_insert;

mod param;
use param::{Named, Placeholder};

mod update;

use tablemap_core::{schema::db::TableRef, TableMapping};

use std::fmt::Write;

use indexmap::IndexSet;

/// Generates the SQL statements for one table mapping.
///
/// Every statement lists columns in the mapping's declaration order, so the
/// text for a given mapping is always the same.
#[derive(Debug)]
pub struct Serializer<'a> {
    mapping: &'a TableMapping,
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Named parameters, in order of first appearance
    params: &'a mut IndexSet<String>,
}

/// A possibly qualified table name, rendered as `TableRef` displays it.
struct TableName<'a>(&'a TableRef);

impl<'a> Serializer<'a> {
    pub fn new(mapping: &'a TableMapping) -> Serializer<'a> {
        Serializer { mapping }
    }

    /// Column list for SELECT statements.
    ///
    /// A column is aliased to the underscore form of its property when the
    /// two names differ, so rows can be matched by either name.
    pub fn column_list(&self) -> String {
        self.render(|f| self.fmt_column_list(f)).0
    }

    /// `SELECT <columns> FROM <table> WHERE <id> = ?`
    pub fn find_by_id(&self) -> String {
        let mapping = self.mapping;
        self.render(|f| {
            fmt!(f, "SELECT ");
            self.fmt_column_list(f);
            fmt!(f, " FROM " TableName(mapping.table()) " WHERE " mapping.id_column_name() " = " Placeholder);
        })
        .0
    }

    /// `SELECT <columns> FROM <table>`
    pub fn find_all(&self) -> String {
        let mapping = self.mapping;
        self.render(|f| {
            fmt!(f, "SELECT ");
            self.fmt_column_list(f);
            fmt!(f, " FROM " TableName(mapping.table()));
        })
        .0
    }

    /// `DELETE FROM <table> WHERE <id> = ?`
    pub fn delete_by_id(&self) -> String {
        let mapping = self.mapping;
        self.render(|f| {
            fmt!(f, "DELETE FROM " TableName(mapping.table()) " WHERE " mapping.id_column_name() " = " Placeholder);
        })
        .0
    }

    fn fmt_column_list(&self, f: &mut Formatter<'_>) {
        fmt!(f, Comma(self.mapping.properties().iter().map(SelectColumn)));
    }

    fn render(&self, body: impl FnOnce(&mut Formatter<'_>)) -> (String, IndexSet<String>) {
        let mut dst = String::new();
        let mut params = IndexSet::new();

        body(&mut Formatter {
            dst: &mut dst,
            params: &mut params,
        });

        (dst, params)
    }
}

impl ToSql for TableName<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let _ = write!(f.dst, "{}", self.0);
    }
}
