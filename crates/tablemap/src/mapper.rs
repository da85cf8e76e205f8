mod builder;
pub use builder::Builder;

mod delete;
mod find;
mod insert;
mod update;

use crate::{audit::AuditSuppliers, cache::MappingCache, Config, Record};

use tablemap_core::{
    driver::{DatabaseFamily, Driver},
    schema::{self, db::SqlType, TableMapping, TypeOverrides},
    stmt::{Type, Value},
    Error, Result,
};
use tablemap_sql::{Serializer, SqlAndParams};

use indexmap::IndexMap;
use std::{
    any::TypeId,
    sync::{Arc, OnceLock},
};
use tokio::sync::OnceCell;

/// Maps record types to database tables and runs CRUD statements for them.
///
/// A mapper owns the table mappings and generated SQL it derives. Both are
/// computed on first use and kept for the lifetime of the mapper. The mapper
/// is `Send + Sync` and meant to be shared, e.g. behind an `Arc`.
#[derive(Debug)]
pub struct Mapper {
    driver: Arc<dyn Driver>,
    config: Config,

    /// Resolved on first use, once.
    product_name: OnceCell<String>,

    audit: AuditSuppliers,
    type_overrides: OnceLock<TypeOverrides>,
    caches: Caches,
}

#[derive(Debug)]
struct Caches {
    tables: MappingCache<TypeId, TableMapping>,
    find_by_id: MappingCache<TypeId, String>,
    find_all: MappingCache<TypeId, String>,
    columns: MappingCache<TypeId, String>,
    insert: MappingCache<TypeId, insert::InsertSpec>,
    update: MappingCache<TypeId, SqlAndParams>,
    update_properties: MappingCache<(TypeId, Vec<String>), SqlAndParams>,
    delete: MappingCache<TypeId, String>,
}

/// Number of entries held by each of the mapper's caches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheSizes {
    pub table_mappings: usize,
    pub find_by_id_sql: usize,
    pub find_all_sql: usize,
    pub column_sql: usize,
    pub insert: usize,
    pub update_sql: usize,
    pub update_properties_sql: usize,
    pub delete_sql: usize,
}

/// Generated SQL that can be logged.
trait SqlText {
    fn sql_text(&self) -> &str;
}

impl SqlText for String {
    fn sql_text(&self) -> &str {
        self
    }
}

impl SqlText for SqlAndParams {
    fn sql_text(&self) -> &str {
        self.sql()
    }
}

impl Mapper {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Creates a mapper with the default configuration.
    pub fn new(driver: impl Driver) -> Mapper {
        Mapper::builder().build(driver)
    }

    pub(crate) fn from_parts(driver: Arc<dyn Driver>, config: Config) -> Mapper {
        let caches = Caches {
            tables: MappingCache::new(),
            find_by_id: MappingCache::new(),
            find_all: MappingCache::new(),
            columns: MappingCache::new(),
            insert: MappingCache::new(),
            update: MappingCache::new(),
            update_properties: MappingCache::with_capacity(
                config.update_properties_cache_capacity,
            ),
            delete: MappingCache::new(),
        };

        Mapper {
            driver,
            config,
            product_name: OnceCell::new(),
            audit: AuditSuppliers::default(),
            type_overrides: OnceLock::new(),
            caches,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Schema used for records whose `#[table]` does not name one.
    pub fn schema_name(&self) -> Option<&str> {
        self.config.schema.as_deref()
    }

    /// Catalog used for records whose `#[table]` does not name one.
    pub fn catalog_name(&self) -> Option<&str> {
        self.config.catalog.as_deref()
    }

    /// Installs the supplier for `#[created_on]` and `#[updated_on]`
    /// properties. It can be set only once.
    pub fn set_record_audited_on_supplier<V, F>(&self, supplier: F) -> Result<()>
    where
        V: Into<Value>,
        F: Fn() -> V + Send + Sync + 'static,
    {
        self.audit.set_on(Box::new(move || supplier().into()))
    }

    /// Installs the supplier for `#[created_by]` and `#[updated_by]`
    /// properties. It can be set only once.
    pub fn set_record_audited_by_supplier<V, F>(&self, supplier: F) -> Result<()>
    where
        V: Into<Value>,
        F: Fn() -> V + Send + Sync + 'static,
    {
        self.audit.set_by(Box::new(move || supplier().into()))
    }

    /// Installs the type-override table. It can be set only once, and only
    /// affects table mappings built afterwards.
    pub fn set_type_overrides(&self, overrides: TypeOverrides) -> Result<()> {
        self.type_overrides
            .set(overrides)
            .map_err(|_| Error::mapper("the type overrides were already set"))
    }

    /// The database product name, queried once.
    pub async fn database_product_name(&self) -> Result<&str> {
        let name = self
            .product_name
            .get_or_try_init(|| async {
                let name = self.driver.database_product_name().await?;
                log::debug!("resolved database product name; name={name}");
                Ok::<_, Error>(name)
            })
            .await?;

        Ok(name.as_str())
    }

    pub async fn database_family(&self) -> Result<DatabaseFamily> {
        let name = self.database_product_name().await?;
        Ok(DatabaseFamily::from_product_name(name))
    }

    /// The mapping of `R` to its table, built on first use.
    pub async fn table_mapping<R: Record>(&self) -> Result<Arc<TableMapping>> {
        let type_id = TypeId::of::<R>();
        let descriptor = R::descriptor();

        if let Some(mapping) = self.caches.tables.get(&type_id) {
            log::trace!("table mapping cache hit; type={}", descriptor.type_name);
            return Ok(mapping);
        }

        let overrides = self.effective_type_overrides();
        let builder = schema::Builder::new(descriptor)
            .type_overrides(&overrides)
            .default_schema(self.schema_name())
            .default_catalog(self.catalog_name());

        let table = builder.table(self.database_family().await?)?;
        let columns = self.driver.columns(&table).await?;
        let mapping = builder.build(type_id, table, &columns)?;

        Ok(self.caches.tables.put(type_id, mapping))
    }

    /// Builds and caches the mapping of `R`, surfacing declaration errors
    /// early.
    pub async fn load_mapping<R: Record>(&self) -> Result<()> {
        self.table_mapping::<R>().await.map(drop)
    }

    /// Property name to column name, in declaration order.
    pub async fn property_to_column_mappings<R: Record>(
        &self,
    ) -> Result<IndexMap<&'static str, String>> {
        let mapping = self.table_mapping::<R>().await?;

        Ok(mapping
            .property_to_column()
            .map(|(property, column)| (property, column.to_string()))
            .collect())
    }

    /// The column list of `R`'s find statements, e.g.
    /// `id, order_dt AS order_date`.
    pub async fn column_sql<R: Record>(&self) -> Result<Arc<String>> {
        let mapping = self.table_mapping::<R>().await?;
        Ok(cached(&self.caches.columns, &mapping, "column", |s| {
            s.column_list()
        }))
    }

    pub async fn find_by_id_sql<R: Record>(&self) -> Result<Arc<String>> {
        let mapping = self.table_mapping::<R>().await?;
        Ok(self.find_by_id_sql_for(&mapping))
    }

    pub async fn find_all_sql<R: Record>(&self) -> Result<Arc<String>> {
        let mapping = self.table_mapping::<R>().await?;
        Ok(self.find_all_sql_for(&mapping))
    }

    pub async fn update_sql<R: Record>(&self) -> Result<Arc<SqlAndParams>> {
        let mapping = self.table_mapping::<R>().await?;
        Ok(self.update_sql_for(&mapping))
    }

    /// Update statement for the named properties of `R`.
    ///
    /// Statements naming at most
    /// [`cacheable_update_properties_count`](Config::cacheable_update_properties_count)
    /// properties are cached, keyed by the sorted property names.
    pub async fn update_properties_sql<R: Record>(
        &self,
        properties: &[&str],
    ) -> Result<Arc<SqlAndParams>> {
        let mapping = self.table_mapping::<R>().await?;
        self.update_properties_sql_for(&mapping, properties)
    }

    pub async fn delete_by_id_sql<R: Record>(&self) -> Result<Arc<String>> {
        let mapping = self.table_mapping::<R>().await?;
        Ok(self.delete_sql_for(&mapping))
    }

    pub fn cache_sizes(&self) -> CacheSizes {
        let caches = &self.caches;

        CacheSizes {
            table_mappings: caches.tables.len(),
            find_by_id_sql: caches.find_by_id.len(),
            find_all_sql: caches.find_all.len(),
            column_sql: caches.columns.len(),
            insert: caches.insert.len(),
            update_sql: caches.update.len(),
            update_properties_sql: caches.update_properties.len(),
            delete_sql: caches.delete.len(),
        }
    }

    /// Drops every cached mapping and statement.
    pub fn clear_caches(&self) {
        let caches = &self.caches;

        caches.tables.clear();
        caches.find_by_id.clear();
        caches.find_all.clear();
        caches.columns.clear();
        caches.insert.clear();
        caches.update.clear();
        caches.update_properties.clear();
        caches.delete.clear();
    }

    fn find_by_id_sql_for(&self, mapping: &TableMapping) -> Arc<String> {
        cached(&self.caches.find_by_id, mapping, "find by id", |s| {
            s.find_by_id()
        })
    }

    fn find_all_sql_for(&self, mapping: &TableMapping) -> Arc<String> {
        cached(&self.caches.find_all, mapping, "find all", |s| s.find_all())
    }

    fn update_sql_for(&self, mapping: &TableMapping) -> Arc<SqlAndParams> {
        cached(&self.caches.update, mapping, "update", |s| s.update())
    }

    fn delete_sql_for(&self, mapping: &TableMapping) -> Arc<String> {
        cached(&self.caches.delete, mapping, "delete", |s| s.delete_by_id())
    }

    fn update_properties_sql_for(
        &self,
        mapping: &TableMapping,
        properties: &[&str],
    ) -> Result<Arc<SqlAndParams>> {
        let serializer = Serializer::new(mapping);

        if properties.len() > self.config.cacheable_update_properties_count {
            let sql = serializer.update_properties(properties)?;
            log::debug!(
                "generated update properties sql; type={} sql={}",
                mapping.type_name(),
                sql.sql()
            );
            return Ok(Arc::new(sql));
        }

        let mut names: Vec<String> = properties.iter().map(|p| p.to_string()).collect();
        names.sort();
        let key = (mapping.type_id(), names);

        if let Some(sql) = self.caches.update_properties.get(&key) {
            log::trace!(
                "update properties sql cache hit; type={} properties={:?}",
                mapping.type_name(),
                key.1
            );
            return Ok(sql);
        }

        let sql = serializer.update_properties(properties)?;
        log::debug!(
            "generated update properties sql; type={} sql={}",
            mapping.type_name(),
            sql.sql()
        );

        Ok(self.caches.update_properties.put(key, sql))
    }

    /// User overrides, plus the built-in timezone-aware timestamp entry when
    /// enabled. User entries win.
    fn effective_type_overrides(&self) -> TypeOverrides {
        let mut overrides = self.type_overrides.get().cloned().unwrap_or_default();

        if self.config.offset_date_time_as_timestamp_tz && overrides.get(Type::DateTimeTz).is_none()
        {
            overrides.insert(Type::DateTimeTz, SqlType::TimestampWithTimeZone);
        }

        overrides
    }
}

fn cached<V: SqlText>(
    cache: &MappingCache<TypeId, V>,
    mapping: &TableMapping,
    kind: &str,
    generate: impl FnOnce(Serializer<'_>) -> V,
) -> Arc<V> {
    let type_id = mapping.type_id();

    if let Some(sql) = cache.get(&type_id) {
        log::trace!("{kind} sql cache hit; type={}", mapping.type_name());
        return sql;
    }

    let sql = generate(Serializer::new(mapping));
    log::debug!(
        "generated {kind} sql; type={} sql={}",
        mapping.type_name(),
        sql.sql_text()
    );

    cache.put(type_id, sql)
}
