/// The shopping cart of one browsing session.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Cart`](#impl-ActorEntity-for-Cart) for details on:
/// - Creation parameters ([`CartCreate`])
/// - Custom actions ([`CartAction`](crate::cart_actor::CartAction))
use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// One line of the cart: the product's attributes plus the selected quantity.
///
/// Serialized flat, i.e. the product fields with an added `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl CartItem {
    pub fn new(product: Product, amount: u32) -> Self {
        Self { product, amount }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }
}

#[derive(Debug, Clone)]
pub struct Cart {
    pub id: CartId,
    /// Storage key the cart is mirrored to.
    pub storage_key: String,
    /// Line items in insertion order, unique by product id.
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(id: CartId, storage_key: impl Into<String>) -> Self {
        Self {
            id,
            storage_key: storage_key.into(),
            items: Vec::new(),
        }
    }

    /// Quantity currently selected for `product_id`, 0 if absent.
    pub fn amount_of(&self, product_id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| item.id() == product_id)
            .map_or(0, |item| item.amount)
    }

    pub fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == product_id)
    }
}

/// Payload for creating a cart. The persisted snapshot under `storage_key` is restored.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub storage_key: String,
}

impl CartCreate {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }
}

/// Request to set a product's quantity to an absolute value.
///
/// Signed on purpose: zero and negative amounts are accepted and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}
