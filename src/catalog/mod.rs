//! # Catalog Gateway
//!
//! The remote stock/product service as the cart sees it. Only two lookups are needed:
//!
//! - `GET /stock/{id}` returning `{ "amount": n }`
//! - `GET /products/{id}` returning the product's display attributes
//!
//! [`HttpCatalog`] talks to the real service; [`InMemoryCatalog`] serves seeded data for
//! tests and offline runs.

pub mod http;
pub mod memory;

pub use http::HttpCatalog;
pub use memory::InMemoryCatalog;

use crate::model::{Product, ProductId, Stock};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from the stock/product service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{path} returned status {status}")]
    Status { path: String, status: u16 },

    /// The body was not the expected JSON shape.
    #[error("Malformed response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The catalog has no record for the product.
    #[error("Unknown product: {0}")]
    NotFound(ProductId),
}

/// Read access to remote stock and product data.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Current stock for `id`.
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError>;

    /// Display attributes for `id`.
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError>;
}
