use tests::prelude::*;

use pretty_assertions::assert_eq;
use std::sync::Arc;
use tablemap::CacheSizes;

const ORDER_COLUMNS: &str = "order_id, order_dt AS order_date, customer_name, status, version, \
                             created_on, created_by, updated_on, updated_by";

#[tokio::test]
async fn generated_statements() {
    let (mapper, _ops) = sqlite();

    assert_eq!(assert_ok!(mapper.column_sql::<Order>().await).as_str(), ORDER_COLUMNS);

    assert_eq!(
        *assert_ok!(mapper.find_by_id_sql::<Order>().await),
        format!("SELECT {ORDER_COLUMNS} FROM orders WHERE order_id = ?")
    );

    assert_eq!(
        *assert_ok!(mapper.find_all_sql::<Order>().await),
        format!("SELECT {ORDER_COLUMNS} FROM orders")
    );

    assert_eq!(
        assert_ok!(mapper.delete_by_id_sql::<Order>().await).as_str(),
        "DELETE FROM orders WHERE order_id = ?"
    );

    let update = assert_ok!(mapper.update_sql::<Order>().await);
    assert_eq!(
        update.sql(),
        "UPDATE orders SET order_dt = :order_date, customer_name = :customer_name, \
         status = :status, version = :incremented_version, updated_on = :updated_on, \
         updated_by = :updated_by WHERE order_id = :order_id AND version = :version"
    );

    let params: Vec<_> = update.params().iter().map(String::as_str).collect();
    assert_eq!(
        params,
        [
            "order_date",
            "customer_name",
            "status",
            "incremented_version",
            "updated_on",
            "updated_by",
            "order_id",
            "version",
        ]
    );
}

#[tokio::test]
async fn find_by_id_sql_is_generated_once() {
    let (mapper, _ops) = sqlite();

    let first = assert_ok!(mapper.find_by_id_sql::<Order>().await);
    let sizes = mapper.cache_sizes();
    assert_eq!(sizes.table_mappings, 1);
    assert_eq!(sizes.find_by_id_sql, 1);

    let second = assert_ok!(mapper.find_by_id_sql::<Order>().await);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(mapper.cache_sizes(), sizes);
}

#[tokio::test]
async fn partial_update_keys_ignore_property_order() {
    let (mapper, _ops) = sqlite();

    let a = assert_ok!(
        mapper
            .update_properties_sql::<Order>(&["status", "customer_name"])
            .await
    );
    let b = assert_ok!(
        mapper
            .update_properties_sql::<Order>(&["customer_name", "status"])
            .await
    );

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(mapper.cache_sizes().update_properties_sql, 1);

    // SET order follows the record, not the request.
    assert!(a.sql().starts_with("UPDATE orders SET customer_name = :customer_name, status = :status"));
}

#[tokio::test]
async fn large_partial_updates_are_not_cached() {
    let (mapper, _ops) = sqlite_with(Mapper::builder().cacheable_update_properties_count(1));

    let a = assert_ok!(mapper.update_properties_sql::<Order>(&["status"]).await);
    let b = assert_ok!(mapper.update_properties_sql::<Order>(&["status"]).await);
    assert!(Arc::ptr_eq(&a, &b));

    let c = assert_ok!(
        mapper
            .update_properties_sql::<Order>(&["status", "customer_name"])
            .await
    );
    let d = assert_ok!(
        mapper
            .update_properties_sql::<Order>(&["status", "customer_name"])
            .await
    );
    assert!(!Arc::ptr_eq(&c, &d));
    assert_eq!(c.sql(), d.sql());

    assert_eq!(mapper.cache_sizes().update_properties_sql, 1);
}

#[tokio::test]
async fn partial_update_cache_capacity() {
    let (mapper, _ops) = sqlite_with(Mapper::builder().update_properties_cache_capacity(1));

    assert_ok!(mapper.update_properties_sql::<Order>(&["status"]).await);
    let sql = assert_ok!(mapper.update_properties_sql::<Order>(&["customer_name"]).await);

    assert!(sql.sql().contains("customer_name = :customer_name"));
    assert_eq!(mapper.cache_sizes().update_properties_sql, 1);
}

#[tokio::test]
async fn invalid_partial_updates_are_not_cached() {
    let (mapper, _ops) = sqlite();

    assert_err!(
        mapper.update_properties_sql::<Order>(&["version"]).await,
        is = is_mapper
    );
    assert_eq!(mapper.cache_sizes().update_properties_sql, 0);
}

#[tokio::test]
async fn crud_fills_caches() {
    let (mapper, _ops) = sqlite();

    let mut order = Order::default();
    assert_ok!(mapper.insert(&mut order).await);
    assert_ok!(mapper.find_by_id::<Order>(order.order_id).await);
    assert_ok!(mapper.find_all::<Order>().await);
    assert_ok!(mapper.update(&mut order).await);
    assert_ok!(mapper.update_specific_properties(&mut order, &["status"]).await);
    assert_ok!(mapper.delete(&order).await);
    assert_ok!(mapper.column_sql::<Order>().await);

    let expect = CacheSizes {
        table_mappings: 1,
        find_by_id_sql: 1,
        find_all_sql: 1,
        column_sql: 1,
        insert: 1,
        update_sql: 1,
        update_properties_sql: 1,
        delete_sql: 1,
    };
    assert_eq!(mapper.cache_sizes(), expect);

    mapper.clear_caches();
    assert_eq!(mapper.cache_sizes(), CacheSizes::default());

    // Everything is rebuilt on demand.
    assert_ok!(mapper.find_all::<Order>().await);
    assert_eq!(mapper.cache_sizes().table_mappings, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_use() {
    let (mapper, _ops) = sqlite();
    let mapper = Arc::new(mapper);

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let mapper = mapper.clone();
            tokio::spawn(async move { mapper.find_by_id_sql::<Order>().await })
        })
        .collect();

    let mut sql = vec![];
    for task in tasks {
        sql.push(assert_ok!(assert_ok!(task.await)));
    }

    assert!(sql.iter().all(|s| **s == *sql[0]));
    assert_eq!(mapper.cache_sizes().table_mappings, 1);
    assert_eq!(mapper.cache_sizes().find_by_id_sql, 1);
}
