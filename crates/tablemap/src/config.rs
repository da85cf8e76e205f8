use serde::Deserialize;

/// Mapper configuration.
///
/// Every field has a default, so a partial document deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema used when a record's `#[table]` does not name one.
    pub schema: Option<String>,

    /// Catalog used when a record's `#[table]` does not name one.
    pub catalog: Option<String>,

    /// Partial updates naming at most this many properties have their SQL
    /// cached.
    pub cacheable_update_properties_count: usize,

    /// Capacity of the partial update SQL cache.
    pub update_properties_cache_capacity: usize,

    /// Bind timezone-aware timestamp properties as
    /// `TIMESTAMP WITH TIME ZONE`, whatever the catalog reports.
    pub offset_date_time_as_timestamp_tz: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            schema: None,
            catalog: None,
            cacheable_update_properties_count: 3,
            update_properties_cache_capacity: 2000,
            offset_date_time_as_timestamp_tz: false,
        }
    }
}
