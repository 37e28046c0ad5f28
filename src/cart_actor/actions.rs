//! Custom actions for the Cart actor.
//!
//! Each action maps to one public cart operation and is handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::{ProductId, UpdateProductAmount};

/// Mutations of a cart.
///
/// Every action resolves to the cart's line items after it was applied, or an error with
/// the cart left as it was.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit of the product, fetching its attributes if it is new to the cart.
    ///
    /// # Errors
    /// Fails if one more unit would exceed the stock.
    AddProduct(ProductId),
    /// Removes the product's line item entirely.
    ///
    /// # Errors
    /// Fails if the product is not in the cart.
    RemoveProduct(ProductId),
    /// Sets the product's quantity. Non-positive amounts are ignored.
    ///
    /// # Errors
    /// Fails if the amount exceeds the stock or the product is not in the cart.
    UpdateProductAmount(UpdateProductAmount),
}
