use crate::logging_driver::{LoggingDriver, OpsLog};

use chrono::{NaiveDate, NaiveDateTime};
use tablemap::{mapper::Builder, Mapper};
use tablemap_driver_sqlite::Sqlite;

/// Tables backing the records in [`crate::models`].
pub const SCHEMA: &str = "
    CREATE TABLE orders (
        order_id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_dt TIMESTAMP,
        customer_name VARCHAR(100),
        status VARCHAR(20),
        version INTEGER,
        created_on TIMESTAMP,
        created_by VARCHAR(50),
        updated_on TIMESTAMP,
        updated_by VARCHAR(50)
    );

    CREATE TABLE product (
        product_id INTEGER PRIMARY KEY,
        name VARCHAR(100),
        cost DOUBLE,
        description TEXT
    );

    CREATE TABLE customer (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name VARCHAR(50),
        last_name VARCHAR(50),
        created_on TIMESTAMP,
        created_by VARCHAR(50)
    );

    CREATE TABLE small_key (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        label TEXT
    );

    CREATE TABLE event (
        id TEXT PRIMARY KEY,
        name TEXT,
        happened_at TIMESTAMP
    );
";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A mapper over a fresh in-memory database holding [`SCHEMA`].
pub fn sqlite() -> (Mapper, OpsLog) {
    sqlite_with(&Mapper::builder())
}

pub fn sqlite_with(builder: &Builder) -> (Mapper, OpsLog) {
    init_logging();

    let db = Sqlite::in_memory().expect("open in-memory database");
    db.execute_batch(SCHEMA).expect("create tables");

    let driver = LoggingDriver::new(Box::new(db));
    let ops = driver.ops_log_handle();

    (builder.build(driver), ops)
}

pub fn timestamp(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .and_then(|date| date.and_hms_opt(hour, 30, 0))
        .expect("valid timestamp")
}
