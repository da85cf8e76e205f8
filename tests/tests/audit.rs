use tests::prelude::*;

use pretty_assertions::assert_eq;
use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc, Mutex,
};

/// Installs suppliers whose values the test can change between calls.
fn install_suppliers(mapper: &Mapper) -> (Arc<AtomicU32>, Arc<Mutex<String>>) {
    let hour = Arc::new(AtomicU32::new(8));
    let user = Arc::new(Mutex::new("alice".to_string()));

    let h = hour.clone();
    assert_ok!(mapper.set_record_audited_on_supplier(move || timestamp(1, h.load(Ordering::SeqCst))));

    let u = user.clone();
    assert_ok!(mapper.set_record_audited_by_supplier(move || u.lock().unwrap().clone()));

    (hour, user)
}

#[tokio::test]
async fn insert_populates_created_and_updated() {
    let (mapper, _ops) = sqlite();
    install_suppliers(&mapper);

    let mut order = Order::default();
    assert_ok!(mapper.insert(&mut order).await);

    assert_eq!(order.created_on, Some(timestamp(1, 8)));
    assert_eq!(order.updated_on, Some(timestamp(1, 8)));
    assert_eq!(order.created_by.as_deref(), Some("alice"));
    assert_eq!(order.updated_by.as_deref(), Some("alice"));

    let found = assert_some!(assert_ok!(mapper.find_by_id::<Order>(order.order_id).await));
    assert_eq!(found, order);
}

#[tokio::test]
async fn update_populates_updated_only() {
    let (mapper, _ops) = sqlite();
    let (hour, user) = install_suppliers(&mapper);

    let mut order = Order::default();
    assert_ok!(mapper.insert(&mut order).await);

    hour.store(17, Ordering::SeqCst);
    *user.lock().unwrap() = "bob".to_string();

    // In-memory created values are never written by an update.
    order.created_by = Some("mallory".to_string());
    assert_ok!(mapper.update(&mut order).await);

    assert_eq!(order.updated_on, Some(timestamp(1, 17)));
    assert_eq!(order.updated_by.as_deref(), Some("bob"));

    let found = assert_some!(assert_ok!(mapper.find_by_id::<Order>(order.order_id).await));
    assert_eq!(found.created_on, Some(timestamp(1, 8)));
    assert_eq!(found.created_by.as_deref(), Some("alice"));
    assert_eq!(found.updated_on, Some(timestamp(1, 17)));
    assert_eq!(found.updated_by.as_deref(), Some("bob"));
}

#[tokio::test]
async fn partial_update_populates_updated() {
    let (mapper, _ops) = sqlite();
    let (hour, _user) = install_suppliers(&mapper);

    let mut order = Order::default();
    assert_ok!(mapper.insert(&mut order).await);

    hour.store(20, Ordering::SeqCst);
    order.status = Some("PAID".to_string());
    assert_ok!(mapper.update_specific_properties(&mut order, &["status"]).await);

    let found = assert_some!(assert_ok!(mapper.find_by_id::<Order>(order.order_id).await));
    assert_eq!(found.updated_on, Some(timestamp(1, 20)));
    assert_eq!(found.created_on, Some(timestamp(1, 8)));
}

#[tokio::test]
async fn without_suppliers_audit_fields_stay_unset() {
    let (mapper, _ops) = sqlite();

    let mut order = Order::default();
    assert_ok!(mapper.insert(&mut order).await);

    assert_none!(order.created_on);
    assert_none!(order.created_by);
    assert_none!(order.updated_on);
    assert_none!(order.updated_by);
    assert_eq!(order.version, Some(1));
}

#[tokio::test]
async fn suppliers_are_set_once() {
    let (mapper, _ops) = sqlite();
    install_suppliers(&mapper);

    assert_err!(
        mapper.set_record_audited_on_supplier(|| timestamp(2, 0)),
        is = is_mapper
    );
    assert_err!(
        mapper.set_record_audited_by_supplier(|| "carol"),
        is = is_mapper
    );
}
