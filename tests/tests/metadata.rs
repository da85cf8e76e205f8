use tests::prelude::*;

use pretty_assertions::assert_eq;
use tablemap::{
    driver::{operation::Insert, Operation},
    schema::Role,
    TableRef, Type, TypeOverrides,
};

fn orders_columns() -> Vec<(&'static str, SqlType)> {
    vec![
        ("order_id", SqlType::BigInt),
        ("order_dt", SqlType::Timestamp),
        ("customer_name", SqlType::Varchar),
        ("status", SqlType::Varchar),
        ("version", SqlType::Integer),
        ("created_on", SqlType::Timestamp),
        ("created_by", SqlType::Varchar),
        ("updated_on", SqlType::Timestamp),
        ("updated_by", SqlType::Varchar),
    ]
}

fn event_columns() -> Vec<(&'static str, SqlType)> {
    vec![
        ("id", SqlType::Varchar),
        ("name", SqlType::Varchar),
        ("happened_at", SqlType::Timestamp),
    ]
}

fn product_columns() -> Vec<(&'static str, SqlType)> {
    vec![
        ("product_id", SqlType::Integer),
        ("name", SqlType::Varchar),
        ("cost", SqlType::Double),
        ("description", SqlType::Text),
    ]
}

fn last_insert(ops: &OpsLog) -> Insert {
    match assert_some!(ops.last()) {
        Operation::Insert(insert) => insert,
        op => panic!("expected insert; op={op:#?}"),
    }
}

#[tokio::test]
async fn table_mapping_of_order() {
    let (mapper, _ops) = sqlite();

    let mapping = assert_ok!(mapper.table_mapping::<Order>().await);

    assert_eq!(mapping.type_name(), "Order");
    assert_eq!(mapping.qualified_table_name(), "orders");
    assert_eq!(mapping.id_property_name(), "order_id");
    assert!(mapping.is_id_auto_generated());
    assert!(mapping.has_auto_assign_properties());
    assert_eq!(mapping.properties().len(), 9);
    assert_none!(mapping.property("scratch"));

    let order_date = assert_some!(mapping.property("order_date"));
    assert_eq!(order_date.column_name, "order_dt");
    assert_eq!(order_date.column_ty, SqlType::Timestamp);

    let roles: Vec<_> = mapping
        .properties()
        .iter()
        .filter_map(|p| p.role().map(|role| (p.property_name, role)))
        .collect();
    assert_eq!(
        roles,
        [
            ("order_id", Role::Id),
            ("version", Role::Version),
            ("created_on", Role::CreatedOn),
            ("created_by", Role::CreatedBy),
            ("updated_on", Role::UpdatedOn),
            ("updated_by", Role::UpdatedBy),
        ]
    );

    let columns = assert_ok!(mapper.property_to_column_mappings::<Order>().await);
    assert_eq!(columns["order_date"], "order_dt");
    assert_eq!(columns["customer_name"], "customer_name");
}

#[tokio::test]
async fn default_schema_qualifies_tables() {
    let driver = StubDriver::new("PostgreSQL")
        .table(&TableRef::new("orders").schema("sales"), &orders_columns());
    let mapper = Mapper::builder().schema("sales").build(driver);

    assert_eq!(mapper.schema_name(), Some("sales"));
    assert_none!(mapper.catalog_name());

    let mapping = assert_ok!(mapper.table_mapping::<Order>().await);
    assert_eq!(mapping.qualified_table_name(), "sales.orders");

    let sql = assert_ok!(mapper.delete_by_id_sql::<Order>().await);
    assert_eq!(sql.as_str(), "DELETE FROM sales.orders WHERE order_id = ?");
}

#[tokio::test]
async fn mysql_rejects_schema() {
    let driver = StubDriver::new("MySQL");
    let ops = driver.ops_log_handle();
    let mapper = Mapper::new(driver);

    assert_eq!(assert_ok!(mapper.database_product_name().await), "MySQL");

    let err = assert_err!(mapper.load_mapping::<Product>().await, is = is_annotation);
    assert!(
        err.to_string()
            .starts_with("MySQL: Product is qualified by schema 'main'"),
        "{err}"
    );
    assert!(ops.is_empty());
}

#[tokio::test]
async fn mysql_accepts_catalog() {
    let driver = StubDriver::new("MariaDB")
        .table(&TableRef::new("orders").catalog("shop"), &orders_columns());
    let mapper = Mapper::builder().catalog("shop").build(driver);

    let mapping = assert_ok!(mapper.table_mapping::<Order>().await);
    assert_eq!(mapping.catalog_name(), Some("shop"));
    assert_eq!(mapping.qualified_table_name(), "shop.orders");
}

#[tokio::test]
async fn oracle_rejects_catalog() {
    let mapper = Mapper::builder()
        .catalog("shop")
        .build(StubDriver::new("Oracle"));

    assert_err!(mapper.load_mapping::<Order>().await, is = is_annotation);
}

#[tokio::test]
async fn timestamp_tz_override_flag() {
    let event = || Event {
        id: Some("e-1".to_string()),
        name: Some("launch".to_string()),
        happened_at: chrono::DateTime::parse_from_rfc3339("2024-03-01T10:00:00+02:00").ok(),
    };

    // Catalog type by default
    let driver = StubDriver::new("PostgreSQL").table(&TableRef::new("event"), &event_columns());
    let ops = driver.ops_log_handle();
    let mapper = Mapper::new(driver);

    assert_ok!(mapper.insert(&mut event()).await);
    let insert = last_insert(&ops);
    assert_eq!(insert.values[2].ty, SqlType::Timestamp);

    // Forced by the flag
    let driver = StubDriver::new("PostgreSQL").table(&TableRef::new("event"), &event_columns());
    let ops = driver.ops_log_handle();
    let mapper = Mapper::builder()
        .offset_date_time_as_timestamp_tz(true)
        .build(driver);

    let mapping = assert_ok!(mapper.table_mapping::<Event>().await);
    assert_eq!(
        mapping.overridden_column_ty("happened_at"),
        Some(SqlType::TimestampWithTimeZone)
    );

    assert_ok!(mapper.insert(&mut event()).await);
    let insert = last_insert(&ops);
    assert_eq!(insert.columns, ["id", "name", "happened_at"]);
    assert_eq!(insert.values[2].ty, SqlType::TimestampWithTimeZone);
    assert_none!(insert.generated_key);
}

#[tokio::test]
async fn type_overrides() {
    let driver =
        StubDriver::new("PostgreSQL").table(&TableRef::new("product").schema("main"), &product_columns());
    let ops = driver.ops_log_handle();
    let mapper = Mapper::new(driver);

    let overrides: TypeOverrides = [(Type::String, SqlType::Char)].into_iter().collect();
    assert_ok!(mapper.set_type_overrides(overrides));
    assert_err!(
        mapper.set_type_overrides(TypeOverrides::new()),
        is = is_mapper
    );

    let mapping = assert_ok!(mapper.table_mapping::<Product>().await);

    // Column attribute wins over the table.
    assert_eq!(mapping.overridden_column_ty("description"), Some(SqlType::Clob));
    assert_eq!(mapping.overridden_column_ty("name"), Some(SqlType::Char));
    assert_none!(mapping.overridden_column_ty("cost"));

    let mut product = Product {
        product_id: Some(1),
        name: Some("Widget".to_string()),
        cost: Some(1.5),
        description: Some("long text".to_string()),
    };
    assert_ok!(mapper.update(&mut product).await);

    let Some(Operation::Execute(stmt)) = ops.last() else {
        panic!("expected an execute operation");
    };
    let tablemap::driver::operation::Params::Named(params) = stmt.params else {
        panic!("expected named parameters");
    };

    let types: Vec<_> = params.iter().map(|(name, v)| (name.as_str(), v.ty)).collect();
    assert_eq!(
        types,
        [
            ("name", SqlType::Char),
            ("cost", SqlType::Double),
            ("description", SqlType::Clob),
            ("product_id", SqlType::Integer),
        ]
    );
}

#[tokio::test]
async fn product_name_is_resolved_once() {
    let (mapper, _ops) = sqlite();

    let first = assert_ok!(mapper.database_product_name().await).as_ptr();
    let second = assert_ok!(mapper.database_product_name().await).as_ptr();
    assert_eq!(first, second);
    assert_eq!(
        assert_ok!(mapper.database_family().await),
        tablemap::driver::DatabaseFamily::Sqlite
    );
}
