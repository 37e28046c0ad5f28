use cart_store::cart_actor::{CartError, STOCK_EXCEEDED_MESSAGE, UPDATE_FAILED_MESSAGE};
use cart_store::catalog::InMemoryCatalog;
use cart_store::config::CartSettings;
use cart_store::lifecycle::CartSystem;
use cart_store::model::{CartItem, Product, ProductId, UpdateProductAmount};
use cart_store::notify::RecordingNotifier;
use cart_store::storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
use std::io;
use std::sync::Arc;

fn sneaker(id: u32) -> Product {
    Product::new(ProductId(id), format!("Tênis {id}"), 199.9, format!("tenis{id}.jpg"))
}

fn amounts(items: &[CartItem]) -> Vec<(u32, u32)> {
    items.iter().map(|item| (item.id().0, item.amount)).collect()
}

/// Full session with all real components except the remote API.
#[tokio::test]
async fn test_full_cart_session() {
    let catalog = InMemoryCatalog::new().with_product(sneaker(1), 10);
    let notifier = RecordingNotifier::new();
    let system = CartSystem::start(
        &CartSettings::default(),
        Arc::new(catalog),
        Arc::new(MemoryStorage::new()),
        Arc::new(notifier.clone()),
    )
    .await
    .expect("Failed to start cart system");
    let store = system.store.clone();

    assert!(store.cart().await.unwrap().is_empty());

    let items = store.add_product(ProductId(1)).await.unwrap();
    assert_eq!(amounts(&items), vec![(1, 1)]);

    let items = store.add_product(ProductId(1)).await.unwrap();
    assert_eq!(amounts(&items), vec![(1, 2)]);

    let items = store
        .update_product_amount(UpdateProductAmount {
            product_id: ProductId(1),
            amount: 5,
        })
        .await
        .unwrap();
    assert_eq!(amounts(&items), vec![(1, 5)]);

    let items = store.remove_product(ProductId(1)).await.unwrap();
    assert!(items.is_empty());

    assert!(notifier.messages().is_empty());

    drop(store);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_cart_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = InMemoryCatalog::new()
        .with_product(sneaker(1), 3)
        .with_product(sneaker(2), 3);
    let settings = CartSettings::default();

    let system = CartSystem::start(
        &settings,
        Arc::new(catalog.clone()),
        Arc::new(FileStorage::new(dir.path())),
        Arc::new(RecordingNotifier::new()),
    )
    .await
    .unwrap();
    system.store.add_product(ProductId(2)).await.unwrap();
    system.store.add_product(ProductId(1)).await.unwrap();
    let before = system.store.add_product(ProductId(2)).await.unwrap();
    system.shutdown().await.unwrap();

    assert!(dir.path().join("_RocketShoes_cart.json").exists());

    let system = CartSystem::start(
        &settings,
        Arc::new(catalog),
        Arc::new(FileStorage::new(dir.path())),
        Arc::new(RecordingNotifier::new()),
    )
    .await
    .unwrap();
    let after = system.store.cart().await.unwrap();
    assert_eq!(after, before);
    assert_eq!(amounts(&after), vec![(2, 2), (1, 1)]);
    system.shutdown().await.unwrap();
}

/// Quick repeated clicks never overshoot the stock.
#[tokio::test]
async fn test_concurrent_adds_are_serialized() {
    let catalog = InMemoryCatalog::new().with_product(sneaker(1), 5);
    let notifier = RecordingNotifier::new();
    let system = CartSystem::start(
        &CartSettings::default(),
        Arc::new(catalog),
        Arc::new(MemoryStorage::new()),
        Arc::new(notifier.clone()),
    )
    .await
    .unwrap();

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let store = system.store.clone();
        tasks.push(tokio::spawn(
            async move { store.add_product(ProductId(1)).await },
        ));
    }

    let mut succeeded = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => succeeded += 1,
            Err(e) => assert!(matches!(e, CartError::StockExceeded { .. })),
        }
    }

    assert_eq!(succeeded, 5);
    assert_eq!(amounts(&system.store.cart().await.unwrap()), vec![(1, 5)]);
    assert_eq!(notifier.messages(), vec![STOCK_EXCEEDED_MESSAGE; 3]);
    system.shutdown().await.unwrap();
}

/// Storage that can read but refuses every write.
struct ReadOnlyStorage(MemoryStorage);

impl CartStorage for ReadOnlyStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.load(key)
    }

    fn save(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            key: key.to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

#[tokio::test]
async fn test_failed_write_leaves_cart_unchanged() {
    let snapshot = serde_json::to_string(&vec![CartItem::new(sneaker(1), 1)]).unwrap();
    let storage = ReadOnlyStorage(MemoryStorage::with_entry("@RocketShoes:cart", snapshot));
    let catalog = InMemoryCatalog::new().with_product(sneaker(1), 9);
    let notifier = RecordingNotifier::new();
    let system = CartSystem::start(
        &CartSettings::default(),
        Arc::new(catalog),
        Arc::new(storage),
        Arc::new(notifier.clone()),
    )
    .await
    .unwrap();

    let err = system
        .store
        .update_product_amount(UpdateProductAmount {
            product_id: ProductId(1),
            amount: 4,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CartError::Storage(_)));
    assert_eq!(amounts(&system.store.cart().await.unwrap()), vec![(1, 1)]);
    assert_eq!(notifier.messages(), vec![UPDATE_FAILED_MESSAGE]);
    system.shutdown().await.unwrap();
}

/// Storage whose reads fail.
struct BrokenStorage;

impl CartStorage for BrokenStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io {
            key: key.to_string(),
            source: io::Error::other("disk gone"),
        })
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_start_fails_when_snapshot_cannot_be_read() {
    let result = CartSystem::start(
        &CartSettings::default(),
        Arc::new(InMemoryCatalog::new()),
        Arc::new(BrokenStorage),
        Arc::new(RecordingNotifier::new()),
    )
    .await;

    assert!(result.is_err());
}
