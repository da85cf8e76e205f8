pub mod logging_driver;
pub mod models;
pub mod prelude;
pub mod setup;
pub mod stub_driver;

pub use std_util::*;
