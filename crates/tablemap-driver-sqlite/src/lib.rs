mod ty;
mod value;
use value::Value;

use rusqlite::{types::Value as SqlValue, Connection};
use std::{
    path::Path,
    sync::{Mutex, MutexGuard, PoisonError},
};
use tablemap_core::{
    async_trait,
    driver::{
        operation::{Insert, Params, Statement},
        Catalog, Driver, Operation, Response, Row,
    },
    err,
    schema::db::{ColumnInfo, TableRef},
    stmt, Error, Result,
};
use url::Url;

/// A SQLite database.
///
/// Statements run one at a time on a single connection.
#[derive(Debug)]
pub struct Sqlite {
    connection: Mutex<Connection>,
}

impl Sqlite {
    /// Opens the database named by a `sqlite:` URL. `sqlite::memory:` opens
    /// a private in-memory database.
    pub fn new(url: impl Into<String>) -> Result<Sqlite> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            return Err(err!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            ));
        }

        if url.path() == ":memory:" {
            Sqlite::in_memory()
        } else {
            Sqlite::open(url.path())
        }
    }

    pub fn in_memory() -> Result<Sqlite> {
        let connection = Connection::open_in_memory().map_err(Error::driver)?;
        Ok(Sqlite::from_connection(connection))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Sqlite> {
        let connection = Connection::open(path).map_err(Error::driver)?;
        Ok(Sqlite::from_connection(connection))
    }

    pub fn from_connection(connection: Connection) -> Sqlite {
        Sqlite {
            connection: Mutex::new(connection),
        }
    }

    /// Runs semicolon-separated statements without parameters, e.g. a schema
    /// script.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.connection()
            .execute_batch(sql)
            .map_err(Error::driver)
    }

    fn connection(&self) -> MutexGuard<'_, Connection> {
        self.connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Catalog for Sqlite {
    async fn database_product_name(&self) -> Result<String> {
        Ok("SQLite".to_string())
    }

    async fn columns(&self, table: &TableRef) -> Result<Vec<ColumnInfo>> {
        let connection = self.connection();

        if let Some(schema) = &table.schema {
            if !has_schema(&connection, schema)? {
                log::trace!("unknown schema; table={table}");
                return Ok(vec![]);
            }
        }

        let pragma = match &table.schema {
            Some(schema) => format!(
                "PRAGMA {}.table_info({})",
                quote_ident(schema),
                quote_ident(&table.name)
            ),
            None => format!("PRAGMA table_info({})", quote_ident(&table.name)),
        };

        let mut stmt = connection.prepare(&pragma).map_err(Error::driver)?;

        let columns = stmt
            .query_map([], |row| {
                let name: String = row.get(1)?;
                let decl: String = row.get(2)?;
                Ok(ColumnInfo::new(&name, ty::from_decl_type(&decl)))
            })
            .map_err(Error::driver)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Error::driver)?;

        log::trace!(
            "read table metadata; table={} columns={}",
            table,
            columns.len()
        );

        Ok(columns)
    }
}

#[async_trait]
impl Driver for Sqlite {
    async fn exec(&self, op: Operation) -> Result<Response> {
        let connection = self.connection();

        match op {
            Operation::Insert(insert) => exec_insert(&connection, &insert),
            Operation::Query(stmt) => exec_query(&connection, &stmt),
            Operation::Execute(stmt) => exec_statement(&connection, &stmt),
        }
    }
}

fn exec_insert(connection: &Connection, insert: &Insert) -> Result<Response> {
    let sql = tablemap_sql::serialize_insert(insert);
    log::debug!("exec insert; sql={sql}");

    let mut stmt = connection.prepare_cached(&sql).map_err(Error::driver)?;
    let count = stmt
        .execute(rusqlite::params_from_iter(insert.values.iter().map(Value::from)))
        .map_err(Error::driver)?;

    let response = Response::count(count as u64);

    if insert.generated_key.is_some() {
        let key = connection.last_insert_rowid();
        return Ok(response.with_generated_key(stmt::Value::I64(key)));
    }

    Ok(response)
}

fn exec_query(connection: &Connection, statement: &Statement) -> Result<Response> {
    log::debug!("exec query; sql={}", statement.sql);

    let mut stmt = connection
        .prepare_cached(&statement.sql)
        .map_err(Error::driver)?;
    bind(&mut stmt, &statement.params)?;

    let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    let mut rows = stmt.raw_query();
    let mut ret = vec![];

    while let Some(row) = rows.next().map_err(Error::driver)? {
        let mut record = Row::new();

        for (index, name) in names.iter().enumerate() {
            let value: SqlValue = row.get(index).map_err(Error::driver)?;
            record.push(name.as_str(), value::from_sql(value));
        }

        ret.push(record);
    }

    Ok(Response::rows(ret))
}

fn exec_statement(connection: &Connection, statement: &Statement) -> Result<Response> {
    log::debug!("exec statement; sql={}", statement.sql);

    let mut stmt = connection
        .prepare_cached(&statement.sql)
        .map_err(Error::driver)?;
    bind(&mut stmt, &statement.params)?;

    let count = stmt.raw_execute().map_err(Error::driver)?;
    Ok(Response::count(count as u64))
}

fn bind(stmt: &mut rusqlite::Statement<'_>, params: &Params) -> Result<()> {
    match params {
        Params::Positional(values) => {
            for (index, value) in values.iter().enumerate() {
                stmt.raw_bind_parameter(index + 1, Value::from(value))
                    .map_err(Error::driver)?;
            }
        }
        Params::Named(values) => {
            for (name, value) in values {
                let placeholder = format!(":{name}");
                let Some(index) = stmt
                    .parameter_index(&placeholder)
                    .map_err(Error::driver)?
                else {
                    return Err(err!(
                        "statement has no parameter named {placeholder}; sql={}",
                        stmt.expanded_sql().unwrap_or_default()
                    ));
                };

                stmt.raw_bind_parameter(index, Value::from(value))
                    .map_err(Error::driver)?;
            }
        }
    }

    Ok(())
}

/// Whether `schema` names an attached database.
fn has_schema(connection: &Connection, schema: &str) -> Result<bool> {
    let mut stmt = connection
        .prepare("PRAGMA database_list")
        .map_err(Error::driver)?;

    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(Error::driver)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Error::driver)?;

    Ok(names.iter().any(|name| name.eq_ignore_ascii_case(schema)))
}

fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
