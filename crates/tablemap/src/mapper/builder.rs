use super::Mapper;
use crate::{Config, Driver};

use std::sync::Arc;

#[cfg(feature = "sqlite")]
use tablemap_core::{err, Error, Result};

/// Configures and creates a [`Mapper`].
#[derive(Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Replaces the whole configuration.
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Default schema for records whose `#[table]` does not name one.
    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        self.config.schema = Some(schema.into());
        self
    }

    /// Default catalog for records whose `#[table]` does not name one.
    pub fn catalog(&mut self, catalog: impl Into<String>) -> &mut Self {
        self.config.catalog = Some(catalog.into());
        self
    }

    pub fn cacheable_update_properties_count(&mut self, count: usize) -> &mut Self {
        self.config.cacheable_update_properties_count = count;
        self
    }

    pub fn update_properties_cache_capacity(&mut self, capacity: usize) -> &mut Self {
        self.config.update_properties_cache_capacity = capacity;
        self
    }

    pub fn offset_date_time_as_timestamp_tz(&mut self, enabled: bool) -> &mut Self {
        self.config.offset_date_time_as_timestamp_tz = enabled;
        self
    }

    pub fn build(&self, driver: impl Driver) -> Mapper {
        Mapper::from_parts(Arc::new(driver), self.config.clone())
    }

    /// Connects to the database at `url` with one of the built-in drivers.
    #[cfg(feature = "sqlite")]
    pub fn connect(&self, url: &str) -> Result<Mapper> {
        let parsed = url::Url::parse(url).map_err(Error::driver)?;

        match parsed.scheme() {
            "sqlite" => Ok(self.build(tablemap_driver_sqlite::Sqlite::new(url)?)),
            scheme => Err(err!("unsupported database; scheme={scheme}; url={url}")),
        }
    }
}
