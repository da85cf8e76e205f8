use tests::prelude::*;

use pretty_assertions::assert_eq;

#[tokio::test]
async fn updates_only_named_properties() {
    let (mapper, ops) = sqlite();

    let mut order = Order {
        customer_name: Some("Acme".to_string()),
        status: Some("NEW".to_string()),
        ..Order::default()
    };
    assert_ok!(mapper.insert(&mut order).await);

    order.customer_name = Some("Globex".to_string());
    order.status = Some("SHIPPED".to_string());

    let count = assert_ok!(mapper.update_specific_properties(&mut order, &["status"]).await);
    assert_eq!(count, 1);

    assert_eq!(
        ops.sql().last().map(String::as_str),
        Some(
            "UPDATE orders SET status = :status, version = :incremented_version, \
             updated_on = :updated_on, updated_by = :updated_by \
             WHERE order_id = :order_id AND version = :version"
        )
    );

    let found = assert_some!(assert_ok!(mapper.find_by_id::<Order>(order.order_id).await));
    assert_eq!(found.status.as_deref(), Some("SHIPPED"));
    assert_eq!(found.customer_name.as_deref(), Some("Acme"));
}

#[tokio::test]
async fn system_managed_properties_are_rejected() {
    let (mapper, ops) = sqlite();

    let mut order = Order {
        order_id: Some(1),
        version: Some(1),
        ..Order::default()
    };

    for property in [
        "order_id",
        "version",
        "created_on",
        "created_by",
        "updated_on",
        "updated_by",
    ] {
        let err = assert_err!(
            mapper
                .update_specific_properties(&mut order, &["status", property])
                .await,
            is = is_mapper
        );
        assert!(err.to_string().contains(&format!("Order.{property}")), "{err}");
    }

    assert!(ops.is_empty());
    assert_eq!(order.version, Some(1));
}

#[tokio::test]
async fn unmapped_properties_are_rejected() {
    let (mapper, ops) = sqlite();
    let mut order = Order {
        order_id: Some(1),
        version: Some(1),
        ..Order::default()
    };

    let err = assert_err!(
        mapper.update_specific_properties(&mut order, &["scratch"]).await,
        is = is_mapper
    );
    assert_eq!(err.to_string(), "no mapping found for property 'scratch' in Order");

    assert_err!(
        mapper.update_specific_properties(&mut order, &["nope"]).await,
        is = is_mapper
    );

    assert_err!(
        mapper.update_specific_properties(&mut order, &[]).await,
        is = is_mapper
    );

    assert!(ops.is_empty());
}

#[tokio::test]
async fn unversioned_record() {
    let (mapper, ops) = sqlite();

    let mut product = Product {
        product_id: Some(1),
        name: Some("Widget".to_string()),
        cost: Some(3.0),
        description: Some("small".to_string()),
    };
    assert_ok!(mapper.insert(&mut product).await);

    product.cost = Some(4.0);
    product.description = Some("large".to_string());
    assert_ok!(mapper.update_specific_properties(&mut product, &["cost"]).await);

    assert_eq!(
        ops.sql().last().map(String::as_str),
        Some("UPDATE main.product SET cost = :cost WHERE product_id = :product_id")
    );

    let found = assert_some!(assert_ok!(mapper.find_by_id::<Product>(1).await));
    assert_eq!(found.cost, Some(4.0));
    assert_eq!(found.description.as_deref(), Some("small"));
}
