pub mod driver;
pub use driver::{Catalog, Driver};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{RecordDescriptor, TableMapping};

pub mod stmt;

/// A Result type alias that uses tablemap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
