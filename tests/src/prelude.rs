//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::{
    logging_driver::{LoggingDriver, OpsLog},
    models::*,
    setup::{init_logging, sqlite, sqlite_with, timestamp},
    stub_driver::StubDriver,
};

pub use std_util::prelude::*;
pub use tablemap::{Error, Mapper, Record, SqlType, Value};
