//! Error types for the Cart actor, and the notification each one turns into.

use crate::catalog::CatalogError;
use crate::framework::FrameworkError;
use crate::model::ProductId;
use crate::storage::StorageError;
use thiserror::Error;

/// Shown when a requested quantity is above the available stock.
pub const STOCK_EXCEEDED_MESSAGE: &str = "Quantidade solicitada fora de estoque";
/// Shown when adding a product fails for any other reason.
pub const ADD_FAILED_MESSAGE: &str = "Erro na adição do produto";
/// Shown when removing a product fails.
pub const REMOVE_FAILED_MESSAGE: &str = "Erro na remoção do produto";
/// Shown when changing a product's quantity fails for any other reason.
pub const UPDATE_FAILED_MESSAGE: &str = "Erro na alteração de quantidade do produto";

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    StockExceeded {
        product_id: ProductId,
        requested: u64,
        available: i64,
    },

    /// The product is not in the cart.
    #[error("Product not in cart: {0}")]
    ItemNotFound(ProductId),

    /// The stock/product lookup failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The snapshot could not be written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The snapshot could not be encoded.
    #[error("Snapshot encoding error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// The cart actor does not know the session's cart.
    #[error("Cart not found: {0}")]
    CartNotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    /// Recovers the cart error carried by a framework error.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CartError>() {
                Ok(cart_error) => *cart_error,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => CartError::CartNotFound(id),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }

    /// The message shown to the user when `operation` fails with this error.
    pub fn notice(&self, operation: CartOperation) -> &'static str {
        match self {
            CartError::StockExceeded { .. } => STOCK_EXCEEDED_MESSAGE,
            _ => operation.failure_message(),
        }
    }
}

/// The public cart operations, used to pick a failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

impl CartOperation {
    pub fn failure_message(self) -> &'static str {
        match self {
            CartOperation::Add => ADD_FAILED_MESSAGE,
            CartOperation::Remove => REMOVE_FAILED_MESSAGE,
            CartOperation::UpdateAmount => UPDATE_FAILED_MESSAGE,
        }
    }
}
