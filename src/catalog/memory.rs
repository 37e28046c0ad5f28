//! In-process catalog with seeded products and stock.

use super::{CatalogApi, CatalogError};
use crate::model::{Product, ProductId, Stock};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Default)]
struct Tables {
    products: HashMap<ProductId, Product>,
    stock: HashMap<ProductId, i64>,
}

/// Catalog backed by in-memory tables. Clones share the same tables.
///
/// A product without a stock record (or the reverse) answers `NotFound` for the missing
/// lookup, which makes partial outages easy to stage in tests.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    tables: Arc<RwLock<Tables>>,
    product_lookups: Arc<AtomicUsize>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product together with its stock.
    pub fn with_product(self, product: Product, stock: i64) -> Self {
        self.set_stock(product.id, stock);
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .products
            .insert(product.id, product);
        self
    }

    pub fn set_stock(&self, id: ProductId, amount: i64) {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .stock
            .insert(id, amount);
    }

    pub fn remove_stock(&self, id: ProductId) {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .stock
            .remove(&id);
    }

    /// Number of `product` lookups served so far.
    pub fn product_lookups(&self) -> usize {
        self.product_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogApi for InMemoryCatalog {
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables
            .stock
            .get(&id)
            .map(|amount| Stock::new(id, *amount))
            .ok_or(CatalogError::NotFound(id))
    }

    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.product_lookups.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables
            .products
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}
