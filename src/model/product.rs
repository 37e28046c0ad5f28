//! Catalog types as served by the stock/product API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Type-safe identifier for catalog products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A catalog product as the API returns it.
///
/// The cart never interprets product attributes; it only copies them into line items. Only
/// `id` is typed. Everything else is kept verbatim in `attributes`, so any shape the API
/// serves survives persistence unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    /// Creates a product with the usual storefront attributes.
    pub fn new(id: ProductId, title: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self::with_attributes(id, Map::new())
            .with_attribute("title", title.into())
            .with_attribute("price", price)
            .with_attribute("image", image.into())
    }

    pub fn with_attributes(id: ProductId, attributes: Map<String, Value>) -> Self {
        Self { id, attributes }
    }

    /// Sets one attribute, replacing any previous value.
    pub fn with_attribute(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn title(&self) -> Option<&str> {
        self.attribute("title").and_then(Value::as_str)
    }

    /// Numeric price, if the API sent one as a number.
    pub fn price(&self) -> Option<f64> {
        self.attribute("price").and_then(Value::as_f64)
    }

    pub fn image(&self) -> Option<&str> {
        self.attribute("image").and_then(Value::as_str)
    }
}

/// Stock record for one product. `amount` is the most that can be in a cart.
///
/// Signed because the API may report a deficit; anything at or below zero allows nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub amount: i64,
}

impl Stock {
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self {
            id: Some(id),
            amount,
        }
    }

    /// Whether `requested` units fit within the available amount.
    pub fn covers(&self, requested: u32) -> bool {
        i64::from(requested) <= self.amount
    }
}
