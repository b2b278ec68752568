use cart_resource::clients::{CartStore, DocumentStore, ItemStore};
use cart_resource::config::CartConfig;
use cart_resource::framework::mock::MockStore;
use cart_resource::framework::{StorageId, StoreActor, StoreError};
use cart_resource::item_actor::ItemError;
use cart_resource::lifecycle::CartSystem;
use cart_resource::model::{Cart, CustomerId, Item, ItemId};
use cart_resource::resource::{CartResource, FoundItem, Resource, ResourceError};
use cart_resource::service::{CartService, ItemService};
use cart_resource::{cart_actor, item_actor};
use rust_decimal::Decimal;

struct Harness {
    carts: CartService,
    items: ItemService,
    cart_store: CartStore,
}

/// Real stores, wired the same way `CartSystem` wires them.
fn harness() -> Harness {
    let (item_actor, item_store) = item_actor::new(16);
    let (cart_actor, cart_store) = cart_actor::new(16);
    tokio::spawn(item_actor.run(()));
    tokio::spawn(cart_actor.run(item_store.clone()));

    Harness {
        carts: CartService::new(cart_store.clone()),
        items: ItemService::new(cart_store.clone(), item_store),
        cart_store,
    }
}

fn item(item_id: &str, quantity: u32, cents: i64) -> Item {
    Item::new(item_id, quantity, Decimal::new(cents, 2)).expect("valid item")
}

fn line_ids(items: &[Item]) -> Vec<(&str, u32)> {
    items
        .iter()
        .map(|line| (line.item_id().as_str(), line.quantity()))
        .collect()
}

#[tokio::test]
async fn test_value_twice_creates_one_cart() {
    let h = harness();
    let mut resource = CartResource::new(h.cart_store.clone(), "alice");

    let first = resource.value().await.expect("first value");
    let second = resource.value().await.expect("second value");
    assert_eq!(first.id(), second.id());

    let stored = h
        .cart_store
        .find_all_by_customer_id(&CustomerId::new("alice"))
        .await
        .expect("lookup");
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_get_creates_then_returns_same_cart() {
    let h = harness();
    let alice = CustomerId::new("alice");

    let created = h.carts.get(&alice).await.expect("get-or-create");
    let fetched = h.carts.get(&alice).await.expect("get");
    assert!(created.items().is_empty());
    assert_eq!(created.id(), fetched.id());
    assert_eq!(fetched.customer_id(), &alice);
}

#[tokio::test]
async fn test_add_then_find() {
    let h = harness();
    let alice = CustomerId::new("alice");

    h.items
        .add(&alice, item("sock-1", 1, 999))
        .await
        .expect("add");

    let contents = h.items.list(&alice).await.expect("list");
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0], Item::from_id("sock-1"));

    let lookup = Item::from_id("sock-1");
    assert!(FoundItem::new(&contents, &lookup).has_item());

    let found = h
        .items
        .get(&alice, &ItemId::new("sock-1"))
        .await
        .expect("get item");
    assert_eq!(found.unit_price(), Decimal::new(999, 2));
    assert!(found.id().is_some());
}

#[tokio::test]
async fn test_duplicate_add_increments_quantity() {
    let h = harness();
    let alice = CustomerId::new("alice");

    let first = h.items.add(&alice, item("sock-1", 1, 500)).await.unwrap();
    let second = h.items.add(&alice, item("sock-1", 1, 500)).await.unwrap();

    assert_eq!(first.id(), second.id());
    assert_eq!(second.quantity(), 2);

    let contents = h.items.list(&alice).await.unwrap();
    assert_eq!(line_ids(&contents), vec![("sock-1", 2)]);
}

#[tokio::test]
async fn test_duplicate_add_increments_by_one_regardless_of_posted_quantity() {
    let h = harness();
    let alice = CustomerId::new("alice");

    h.items.add(&alice, item("sock-1", 3, 500)).await.unwrap();
    let updated = h.items.add(&alice, item("sock-1", 10, 500)).await.unwrap();

    assert_eq!(updated.quantity(), 4);
}

#[tokio::test]
async fn test_add_rejects_invalid_item() {
    let h = harness();
    let alice = CustomerId::new("alice");
    let body: Item = serde_json::from_str(r#"{ "itemId": "", "quantity": 1 }"#).unwrap();

    let err = h.items.add(&alice, body).await.unwrap_err();
    assert!(matches!(err, ResourceError::Item(ItemError::MissingItemId)));
}

#[tokio::test]
async fn test_add_from_request_body() {
    let h = harness();
    let alice = CustomerId::new("alice");
    let body: Item = serde_json::from_str(r#"{ "itemId": "sock-9", "unitPrice": 7.25 }"#).unwrap();

    let added = h.items.add(&alice, body).await.unwrap();
    assert_eq!(added.quantity(), 1);
    assert_eq!(added.unit_price(), Decimal::new(725, 2));
}

#[tokio::test]
async fn test_remove_then_absent() {
    let h = harness();
    let alice = CustomerId::new("alice");

    h.items.add(&alice, item("sock-1", 1, 100)).await.unwrap();
    h.items.add(&alice, item("sock-2", 1, 100)).await.unwrap();
    h.items
        .remove(&alice, &ItemId::new("sock-1"))
        .await
        .expect("remove");

    let contents = h.items.list(&alice).await.unwrap();
    let lookup = Item::from_id("sock-1");
    assert!(!FoundItem::new(&contents, &lookup).has_item());
    assert_eq!(line_ids(&contents), vec![("sock-2", 1)]);

    let err = h
        .items
        .get(&alice, &ItemId::new("sock-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResourceError::NotFound(_)));
}

#[tokio::test]
async fn test_remove_never_added_is_noop() {
    let h = harness();
    let alice = CustomerId::new("alice");

    h.items.add(&alice, item("sock-1", 1, 100)).await.unwrap();
    h.items
        .remove(&alice, &ItemId::new("never-added"))
        .await
        .expect("no-op");

    let contents = h.items.list(&alice).await.unwrap();
    assert_eq!(line_ids(&contents), vec![("sock-1", 1)]);
}

#[tokio::test]
async fn test_update_sets_quantity() {
    let h = harness();
    let alice = CustomerId::new("alice");

    let added = h.items.add(&alice, item("sock-1", 1, 250)).await.unwrap();
    let updated = h
        .items
        .update(&alice, Item::new("sock-1", 5, Decimal::ZERO).unwrap())
        .await
        .expect("update");

    assert_eq!(updated.id(), added.id());
    assert_eq!(updated.quantity(), 5);
    assert_eq!(updated.unit_price(), Decimal::new(250, 2));

    let contents = h.items.list(&alice).await.unwrap();
    assert_eq!(line_ids(&contents), vec![("sock-1", 5)]);
    assert_eq!(
        h.carts.get(&alice).await.unwrap().total(),
        Some(Decimal::new(1250, 2))
    );
}

#[tokio::test]
async fn test_update_missing_item_is_not_found() {
    let h = harness();
    let alice = CustomerId::new("alice");

    let err = h
        .items
        .update(&alice, Item::from_id("sock-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResourceError::NotFound(_)));
}

#[tokio::test]
async fn test_update_to_zero_is_rejected() {
    let h = harness();
    let alice = CustomerId::new("alice");
    h.items.add(&alice, item("sock-1", 2, 100)).await.unwrap();

    let body: Item = serde_json::from_str(r#"{ "itemId": "sock-1", "quantity": 0 }"#).unwrap();
    let err = h.items.update(&alice, body).await.unwrap_err();
    assert!(matches!(
        err,
        ResourceError::Item(ItemError::InvalidQuantity(0))
    ));

    let contents = h.items.list(&alice).await.unwrap();
    assert_eq!(line_ids(&contents), vec![("sock-1", 2)]);
}

#[tokio::test]
async fn test_merge_concatenates_in_order() {
    let h = harness();
    let alice = CustomerId::new("alice");
    let session = CustomerId::new("session-1");

    h.items.add(&alice, item("x", 1, 100)).await.unwrap();
    h.items.add(&session, item("y", 2, 100)).await.unwrap();

    let merged = h.carts.merge(&alice, &session).await.expect("merge");
    assert_eq!(line_ids(merged.items()), vec![("x", 1), ("y", 2)]);

    let contents = h.items.list(&alice).await.unwrap();
    assert_eq!(line_ids(&contents), vec![("x", 1), ("y", 2)]);
}

#[tokio::test]
async fn test_merge_keeps_overlapping_items_as_separate_lines() {
    let h = harness();
    let alice = CustomerId::new("alice");
    let session = CustomerId::new("session-1");

    h.items.add(&alice, item("x", 1, 100)).await.unwrap();
    h.items.add(&session, item("x", 3, 100)).await.unwrap();

    let merged = h.carts.merge(&alice, &session).await.unwrap();
    assert_eq!(line_ids(merged.items()), vec![("x", 1), ("x", 3)]);
}

#[tokio::test]
async fn test_merge_into_missing_customer_cart_creates_it() {
    let h = harness();
    let alice = CustomerId::new("alice");
    let session = CustomerId::new("session-1");

    h.items.add(&session, item("y", 1, 100)).await.unwrap();

    let merged = h.carts.merge(&alice, &session).await.unwrap();
    assert_eq!(merged.customer_id(), &alice);
    assert_eq!(line_ids(merged.items()), vec![("y", 1)]);
}

#[tokio::test]
async fn test_session_cart_is_gone_after_merge() {
    let h = harness();
    let alice = CustomerId::new("alice");
    let session = CustomerId::new("session-1");

    h.items.add(&session, item("y", 1, 100)).await.unwrap();
    h.carts.merge(&alice, &session).await.unwrap();

    let lookup = h
        .cart_store
        .find_by_customer_id(session.clone())
        .await
        .expect("lookup");
    assert!(lookup.is_none());
}

#[tokio::test]
async fn test_merge_with_itself_changes_nothing() {
    let h = harness();
    let alice = CustomerId::new("alice");

    h.items.add(&alice, item("x", 1, 100)).await.unwrap();
    let merged = h.carts.merge(&alice, &alice).await.unwrap();

    assert_eq!(line_ids(merged.items()), vec![("x", 1)]);
}

#[tokio::test]
async fn test_destroy_cart() {
    let h = harness();
    let alice = CustomerId::new("alice");

    let before = h.carts.get(&alice).await.unwrap();
    h.items.add(&alice, item("x", 1, 100)).await.unwrap();
    h.carts.destroy(&alice).await.expect("destroy");

    assert!(h
        .cart_store
        .find_by_customer_id(alice.clone())
        .await
        .unwrap()
        .is_none());

    let after = h.carts.get(&alice).await.unwrap();
    assert!(after.items().is_empty());
    assert_ne!(before.id(), after.id());
}

#[tokio::test]
async fn test_destroy_missing_cart_is_noop() {
    let h = harness();
    h.carts
        .destroy(&CustomerId::new("nobody"))
        .await
        .expect("no-op");
}

#[tokio::test]
async fn test_store_unavailable_propagates() {
    let (cart_actor, cart_store) = cart_actor::new(4);
    let (item_actor, item_store) = item_actor::new(4);
    drop(cart_actor);
    drop(item_actor);

    let carts = CartService::new(cart_store.clone());
    let err = carts.get(&CustomerId::new("alice")).await.unwrap_err();
    assert!(matches!(err, ResourceError::Store(StoreError::Unavailable)));

    let items = ItemService::new(cart_store, item_store);
    let err = items
        .add(&CustomerId::new("alice"), Item::from_id("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResourceError::Store(StoreError::Unavailable)));
}

#[tokio::test]
async fn test_item_store_failure_during_add_propagates() {
    let (cart_actor, cart_store) = cart_actor::new(4);
    let (item_actor, item_store): (StoreActor<Item>, ItemStore) = item_actor::new(4);
    tokio::spawn(cart_actor.run(item_store.clone()));
    drop(item_actor);

    let items = ItemService::new(cart_store.clone(), item_store);
    let err = items
        .add(&CustomerId::new("alice"), Item::from_id("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResourceError::Store(StoreError::Unavailable)));

    let cart: Cart = cart_store
        .find_by_customer_id("alice")
        .await
        .unwrap()
        .expect("cart created before the item save failed");
    assert!(cart.items().is_empty());
}

#[tokio::test]
async fn test_item_store_keeps_superseded_item_under_same_id() {
    let h = harness();
    let alice = CustomerId::new("alice");
    let added = h.items.add(&alice, item("x", 1, 100)).await.unwrap();
    h.items.add(&alice, item("x", 1, 100)).await.unwrap();

    let lines = h.items.list(&alice).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id(), added.id());
}

#[tokio::test]
async fn test_cart_system_lifecycle() {
    let system = CartSystem::new(&CartConfig::default());
    let alice = CustomerId::new("alice");

    {
        let items = system.items();
        items.add(&alice, item("sock-1", 1, 1000)).await.unwrap();
        items.add(&alice, item("sock-1", 1, 1000)).await.unwrap();

        let cart = system.carts().get(&alice).await.unwrap();
        assert_eq!(line_ids(cart.items()), vec![("sock-1", 2)]);
        assert_eq!(cart.total(), Some(Decimal::new(2000, 2)));
    }

    system.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn test_document_store_delete_of_unsaved_cart() {
    let h = harness();
    let unsaved = Cart::new("alice").unwrap();
    assert!(!h.cart_store.delete(&unsaved).await.unwrap());
}

#[tokio::test]
async fn test_concurrent_get_shares_one_cart() {
    let h = harness();
    let alice = CustomerId::new("alice");

    let (a, b) = tokio::join!(h.carts.get(&alice), h.carts.get(&alice));
    assert_eq!(a.unwrap().id(), b.unwrap().id());

    let stored = h.cart_store.find_all_by_customer_id(&alice).await.unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_concurrent_adds_land_in_one_cart() {
    let h = harness();
    let alice = CustomerId::new("alice");

    let (a, b) = tokio::join!(
        h.items.add(&alice, item("x", 1, 100)),
        h.items.add(&alice, item("y", 1, 100)),
    );
    a.unwrap();
    b.unwrap();

    let stored = h.cart_store.find_all_by_customer_id(&alice).await.unwrap();
    assert_eq!(stored.len(), 1);
    let again = h.carts.get(&alice).await.unwrap();
    assert_eq!(again.id(), stored[0].id());
}

#[tokio::test]
async fn test_add_at_max_quantity_is_rejected() {
    let h = harness();
    let alice = CustomerId::new("alice");

    h.items.add(&alice, item("x", 1, 100)).await.unwrap();
    h.items
        .update(&alice, Item::new("x", u32::MAX, Decimal::ZERO).unwrap())
        .await
        .unwrap();

    let err = h.items.add(&alice, item("x", 1, 100)).await.unwrap_err();
    assert!(matches!(
        err,
        ResourceError::Item(ItemError::InvalidQuantity(u32::MAX))
    ));

    let contents = h.items.list(&alice).await.unwrap();
    assert_eq!(line_ids(&contents), vec![("x", u32::MAX)]);
}

#[tokio::test]
async fn test_failed_cart_save_destroys_new_item() {
    let (item_actor, item_store) = item_actor::new(4);
    tokio::spawn(item_actor.run(()));

    let alice = CustomerId::new("alice");
    let stored: Cart = serde_json::from_str(r#"{ "customerId": "alice", "id": "cart_1" }"#).unwrap();
    let mut cart_mock = MockStore::<Cart>::new();
    cart_mock
        .expect_find_or_insert(alice.clone())
        .return_ok(stored);
    cart_mock.expect_save().return_err(StoreError::Unavailable);

    let items = ItemService::new(CartStore::new(cart_mock.client()), item_store.clone());
    let err = items.add(&alice, item("x", 1, 100)).await.unwrap_err();
    assert!(matches!(err, ResourceError::Store(StoreError::Unavailable)));

    let orphan = item_store.find_one(StorageId::new("item_1")).await.unwrap();
    assert!(orphan.is_none());
    cart_mock.verify();
}
