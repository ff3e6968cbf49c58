use httpmock::prelude::*;
use std::sync::Arc;
use storefront_cart::{
    ApiClient, Cart, CartRepository, CartStore, LineItem, LocalStorage, NoticeKind, Outcome,
    Product, RecordingNotifier, Storage, UpdateProductAmount, DEFAULT_CART_KEY,
};
use tempfile::TempDir;
use tokio_test::assert_ok;

fn sneaker(id: u64) -> Product {
    Product {
        id,
        title: format!("Tênis de Caminhada Leve Confortável {}", id),
        price: 179.9,
        image: format!("https://rocketseat-cdn.example.com/tenis{}.jpg", id),
    }
}

fn mock_product(server: &MockServer, id: u64) -> httpmock::Mock<'_> {
    let product = sneaker(id);
    server.mock(|when, then| {
        when.method(GET).path(format!("/products/{}", id));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::to_value(product).unwrap());
    })
}

fn mock_stock(server: &MockServer, id: u64, amount: i64) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/stock/{}", id));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": id, "amount": amount}));
    })
}

async fn seed(dir: &TempDir, items: &[(u64, u32)]) {
    let cart = Cart::from(
        items
            .iter()
            .map(|&(id, amount)| LineItem {
                product: sneaker(id),
                amount,
            })
            .collect::<Vec<_>>(),
    );
    assert_ok!(
        storage(dir)
            .set_item(DEFAULT_CART_KEY, &serde_json::to_string(&cart).unwrap())
            .await
    );
}

fn storage(dir: &TempDir) -> LocalStorage {
    LocalStorage::new(dir.path().to_str().unwrap().to_string())
}

async fn open_store(
    dir: &TempDir,
    server: &MockServer,
) -> (CartStore<LocalStorage>, Arc<RecordingNotifier>) {
    let api = Arc::new(ApiClient::new(server.base_url()));
    let notifier = Arc::new(RecordingNotifier::new());
    let store = CartStore::open(
        CartRepository::with_default_key(storage(dir)),
        api.clone(),
        api,
        notifier.clone(),
    )
    .await;
    (store, notifier)
}

fn amounts(cart: &Cart) -> Vec<(u64, u32)> {
    cart.items().iter().map(|i| (i.id(), i.amount)).collect()
}

#[tokio::test]
async fn test_add_to_empty_cart_persists_and_rehydrates() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let product_mock = mock_product(&server, 1);
    let stock_mock = mock_stock(&server, 1, 5);

    let (store, notifier) = open_store(&temp_dir, &server).await;
    assert!(store.cart().is_empty());

    assert_eq!(store.add_product(1).await, Outcome::Committed);

    product_mock.assert();
    stock_mock.assert();
    assert_eq!(amounts(&store.cart()), vec![(1, 1)]);
    assert_eq!(store.cart().items()[0].product, sneaker(1));
    assert_eq!(notifier.kinds(), vec![NoticeKind::ProductAdded]);

    let (reopened, _) = open_store(&temp_dir, &server).await;
    assert_eq!(reopened.cart(), store.cart());
}

#[tokio::test]
async fn test_add_at_stock_limit_leaves_cart_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    seed(&temp_dir, &[(1, 1)]).await;
    let server = MockServer::start();
    let product_mock = mock_product(&server, 1);
    let stock_mock = mock_stock(&server, 1, 1);

    let (store, notifier) = open_store(&temp_dir, &server).await;
    let outcome = store.add_product(1).await;

    assert_eq!(outcome, Outcome::Rejected(NoticeKind::OutOfStock));
    stock_mock.assert();
    product_mock.assert_hits(0);
    assert_eq!(amounts(&store.cart()), vec![(1, 1)]);
    assert_eq!(
        notifier.notices()[0].message,
        "Requested quantity is out of stock"
    );
}

#[tokio::test]
async fn test_remove_only_item_empties_stored_cart() {
    let temp_dir = TempDir::new().unwrap();
    seed(&temp_dir, &[(1, 2)]).await;
    let server = MockServer::start();

    let (store, notifier) = open_store(&temp_dir, &server).await;
    assert_eq!(store.remove_product(1).await, Outcome::Committed);

    assert!(store.cart().is_empty());
    assert!(notifier.notices().is_empty());
    assert_eq!(
        storage(&temp_dir)
            .get_item(DEFAULT_CART_KEY)
            .await
            .unwrap()
            .as_deref(),
        Some("[]")
    );
}

#[tokio::test]
async fn test_update_amount_within_stock() {
    let temp_dir = TempDir::new().unwrap();
    seed(&temp_dir, &[(1, 1)]).await;
    let server = MockServer::start();
    let stock_mock = mock_stock(&server, 1, 10);

    let (store, _notifier) = open_store(&temp_dir, &server).await;
    let outcome = store
        .update_product_amount(UpdateProductAmount {
            product_id: 1,
            amount: 5,
        })
        .await;

    assert_eq!(outcome, Outcome::Committed);
    stock_mock.assert();
    assert_eq!(amounts(&store.cart()), vec![(1, 5)]);

    let (reopened, _) = open_store(&temp_dir, &server).await;
    assert_eq!(amounts(&reopened.cart()), vec![(1, 5)]);
}

#[tokio::test]
async fn test_catalog_failure_reports_add_failed() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let product_mock = server.mock(|when, then| {
        when.method(GET).path("/products/2");
        then.status(500);
    });
    let stock_mock = mock_stock(&server, 2, 3);

    let (store, notifier) = open_store(&temp_dir, &server).await;
    let outcome = store.add_product(2).await;

    assert_eq!(outcome, Outcome::Rejected(NoticeKind::AddFailed));
    product_mock.assert();
    stock_mock.assert_hits(0);
    assert!(store.cart().is_empty());
    assert_eq!(notifier.notices()[0].message, "Failed to add product");
    assert_eq!(
        storage(&temp_dir).get_item(DEFAULT_CART_KEY).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_stock_failure_reports_update_failed() {
    let temp_dir = TempDir::new().unwrap();
    seed(&temp_dir, &[(4, 2)]).await;
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/stock/4");
        then.status(503);
    });

    let (store, notifier) = open_store(&temp_dir, &server).await;
    let outcome = store
        .update_product_amount(UpdateProductAmount {
            product_id: 4,
            amount: 3,
        })
        .await;

    assert_eq!(outcome, Outcome::Rejected(NoticeKind::UpdateFailed));
    assert_eq!(amounts(&store.cart()), vec![(4, 2)]);
    assert_eq!(notifier.kinds(), vec![NoticeKind::UpdateFailed]);
}

#[tokio::test]
async fn test_corrupt_storage_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    assert_ok!(
        storage(&temp_dir)
            .set_item(DEFAULT_CART_KEY, "[{\"id\": 1, \"amount\":")
            .await
    );
    let server = MockServer::start();
    mock_product(&server, 3);
    mock_stock(&server, 3, 2);

    let (store, notifier) = open_store(&temp_dir, &server).await;
    assert!(store.cart().is_empty());

    store.add_product(3).await;
    assert_eq!(amounts(&store.cart()), vec![(3, 1)]);
    assert_eq!(notifier.kinds(), vec![NoticeKind::ProductAdded]);
}
