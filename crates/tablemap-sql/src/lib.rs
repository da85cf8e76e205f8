pub mod serializer;
pub use serializer::{serialize_insert, Serializer};

mod sql_and_params;
pub use sql_and_params::SqlAndParams;

/// Parameter carrying the next version value in versioned updates.
pub const INCREMENTED_VERSION: &str = "incremented_version";
