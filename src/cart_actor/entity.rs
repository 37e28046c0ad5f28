//! ActorEntity implementation for the Cart domain type.
//!
//! Every action builds the next list of line items on a copy, writes it to storage, and
//! only then replaces `items`. A failure at any step returns before the commit, so memory
//! and the persisted snapshot always agree.

use super::{CartAction, CartContext, CartError};
use crate::framework::ActorEntity;
use crate::model::{Cart, CartCreate, CartId, CartItem, ProductId, UpdateProductAmount};
use async_trait::async_trait;
use tracing::{debug, info, warn};

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Action = CartAction;
    type ActionResult = Vec<CartItem>;
    type Context = CartContext;
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.storage_key))
    }

    /// Restores the snapshot stored under the cart's key.
    ///
    /// A missing snapshot means an empty cart. An unreadable one is copied to
    /// `{key}.corrupt` and the cart starts empty; if that copy cannot be written the cart
    /// is not created at all.
    async fn on_create(&mut self, ctx: &CartContext) -> Result<(), Self::Error> {
        let Some(snapshot) = ctx.storage().load(&self.storage_key)? else {
            debug!(key = %self.storage_key, "No snapshot, starting empty");
            return Ok(());
        };
        match serde_json::from_str::<Vec<CartItem>>(&snapshot) {
            Ok(items) => {
                info!(key = %self.storage_key, items = items.len(), "Snapshot restored");
                self.items = items;
            }
            Err(e) => {
                let backup = corrupt_key(&self.storage_key);
                ctx.storage().save(&backup, &snapshot)?;
                warn!(key = %self.storage_key, %backup, error = %e, "Unreadable snapshot set aside");
            }
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<Vec<CartItem>, Self::Error> {
        let next = match action {
            CartAction::AddProduct(product_id) => self.with_added(product_id, ctx).await?,
            CartAction::RemoveProduct(product_id) => self.without(product_id)?,
            CartAction::UpdateProductAmount(update) => {
                match self.with_amount(update, ctx).await? {
                    Some(items) => items,
                    None => return Ok(self.items.clone()),
                }
            }
        };
        self.commit(next, ctx)
    }
}

/// Key an unreadable snapshot is moved to.
pub fn corrupt_key(storage_key: &str) -> String {
    format!("{storage_key}.corrupt")
}

impl Cart {
    async fn with_added(
        &self,
        product_id: ProductId,
        ctx: &CartContext,
    ) -> Result<Vec<CartItem>, CartError> {
        let current = self.amount_of(product_id);
        let stock = ctx.catalog().stock(product_id).await?;
        debug!(%product_id, current, available = stock.amount, "Stock checked");

        let amount = current
            .checked_add(1)
            .filter(|amount| stock.covers(*amount))
            .ok_or(CartError::StockExceeded {
                product_id,
                requested: u64::from(current) + 1,
                available: stock.amount,
            })?;

        let mut next = self.items.clone();
        match next.iter_mut().find(|item| item.id() == product_id) {
            Some(item) => item.amount = amount,
            None => {
                let product = ctx.catalog().product(product_id).await?;
                next.push(CartItem::new(product, 1));
            }
        }
        Ok(next)
    }

    fn without(&self, product_id: ProductId) -> Result<Vec<CartItem>, CartError> {
        let index = self
            .position(product_id)
            .ok_or(CartError::ItemNotFound(product_id))?;
        let mut next = self.items.clone();
        next.remove(index);
        Ok(next)
    }

    /// `Ok(None)` means the request was ignored.
    async fn with_amount(
        &self,
        update: UpdateProductAmount,
        ctx: &CartContext,
    ) -> Result<Option<Vec<CartItem>>, CartError> {
        let UpdateProductAmount { product_id, amount } = update;
        if amount <= 0 {
            debug!(%product_id, amount, "Ignoring non-positive amount");
            return Ok(None);
        }

        let stock = ctx.catalog().stock(product_id).await?;
        debug!(%product_id, amount, available = stock.amount, "Stock checked");

        let requested = amount.unsigned_abs();
        let amount = u32::try_from(requested)
            .ok()
            .filter(|amount| stock.covers(*amount))
            .ok_or(CartError::StockExceeded {
                product_id,
                requested,
                available: stock.amount,
            })?;

        let mut next = self.items.clone();
        let item = next
            .iter_mut()
            .find(|item| item.id() == product_id)
            .ok_or(CartError::ItemNotFound(product_id))?;
        item.amount = amount;
        Ok(Some(next))
    }

    fn commit(&mut self, next: Vec<CartItem>, ctx: &CartContext) -> Result<Vec<CartItem>, CartError> {
        let snapshot = serde_json::to_string(&next)?;
        ctx.storage().save(&self.storage_key, &snapshot)?;
        self.items = next;
        debug!(cart_id = %self.id, items = self.items.len(), "Snapshot saved");
        Ok(self.items.clone())
    }
}
