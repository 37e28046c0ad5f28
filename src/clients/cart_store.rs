//! # Cart Store
//!
//! The surface views use to read and change the session's cart. It wraps a
//! `ResourceClient<Cart>` bound to one cart id and turns every failed operation into a
//! user notification.
use crate::cart_actor::{CartAction, CartError, CartOperation};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Cart, CartId, CartItem, ProductId, UpdateProductAmount};
use crate::notify::Notifier;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Handle to the session's cart. Cheap to clone; hand one to every consumer.
///
/// Operations return the cart's items after the change. On failure the notification has
/// already been sent when the error comes back, so callers that do not care about the
/// outcome can ignore the result.
#[derive(Clone)]
pub struct CartStore {
    inner: ResourceClient<Cart>,
    cart_id: CartId,
    notifier: Arc<dyn Notifier>,
}

#[async_trait]
impl ActorClient<Cart> for CartStore {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::from_framework(e)
    }
}

impl CartStore {
    pub fn new(inner: ResourceClient<Cart>, cart_id: CartId, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            inner,
            cart_id,
            notifier,
        }
    }

    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    /// Current line items, in insertion order.
    #[instrument(skip(self), fields(cart_id = %self.cart_id))]
    pub async fn cart(&self) -> Result<Vec<CartItem>, CartError> {
        self.get(self.cart_id)
            .await?
            .map(|cart| cart.items)
            .ok_or_else(|| CartError::CartNotFound(self.cart_id.to_string()))
    }

    /// Adds one unit of `product_id`.
    #[instrument(skip(self), fields(cart_id = %self.cart_id))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<Vec<CartItem>, CartError> {
        self.apply(CartOperation::Add, CartAction::AddProduct(product_id))
            .await
    }

    /// Removes the line item for `product_id`.
    #[instrument(skip(self), fields(cart_id = %self.cart_id))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Vec<CartItem>, CartError> {
        self.apply(CartOperation::Remove, CartAction::RemoveProduct(product_id))
            .await
    }

    /// Sets the quantity of a line item. Amounts of zero or below change nothing.
    #[instrument(skip(self), fields(cart_id = %self.cart_id))]
    pub async fn update_product_amount(
        &self,
        update: UpdateProductAmount,
    ) -> Result<Vec<CartItem>, CartError> {
        self.apply(
            CartOperation::UpdateAmount,
            CartAction::UpdateProductAmount(update),
        )
        .await
    }

    async fn apply(
        &self,
        operation: CartOperation,
        action: CartAction,
    ) -> Result<Vec<CartItem>, CartError> {
        debug!(?action, "Sending request");
        let result = self
            .inner
            .perform_action(self.cart_id, action)
            .await
            .map_err(CartError::from_framework);

        if let Err(e) = &result {
            warn!(?operation, error = %e, "Cart operation failed");
            self.notifier.error(e.notice(operation));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor::{ADD_FAILED_MESSAGE, STOCK_EXCEEDED_MESSAGE, UPDATE_FAILED_MESSAGE};
    use crate::cart_actor::CartContext;
    use crate::catalog::http::stub;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};
    use crate::model::{CartCreate, Product};
    use crate::notify::RecordingNotifier;
    use crate::storage::MemoryStorage;

    fn item(id: u32, amount: u32) -> CartItem {
        CartItem::new(Product::new(ProductId(id), "Tênis", 99.9, "tenis.jpg"), amount)
    }

    fn store(client: ResourceClient<Cart>, notifier: &RecordingNotifier) -> CartStore {
        CartStore::new(client, CartId(1), Arc::new(notifier.clone()))
    }

    #[tokio::test]
    async fn test_success_sends_no_notification() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(CartId(1)).return_ok(vec![item(1, 1)]);
        let notifier = RecordingNotifier::new();

        let items = store(mock.client(), &notifier)
            .add_product(ProductId(1))
            .await
            .unwrap();

        assert_eq!(items, vec![item(1, 1)]);
        assert!(notifier.messages().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_stock_error_notifies_stock_message() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(CartId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                CartError::StockExceeded {
                    product_id: ProductId(1),
                    requested: 6,
                    available: 5,
                },
            )));
        let notifier = RecordingNotifier::new();

        let err = store(mock.client(), &notifier)
            .update_product_amount(UpdateProductAmount {
                product_id: ProductId(1),
                amount: 6,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::StockExceeded { available: 5, .. }));
        assert_eq!(notifier.messages(), vec![STOCK_EXCEEDED_MESSAGE]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_notifies_operation_message() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(CartId(1))
            .return_err(FrameworkError::ActorClosed);
        mock.expect_action(CartId(1))
            .return_err(FrameworkError::ActorDropped);
        let notifier = RecordingNotifier::new();
        let store = store(mock.client(), &notifier);

        let add = store.add_product(ProductId(3)).await.unwrap_err();
        assert!(matches!(add, CartError::ActorCommunicationError(_)));
        let update = store
            .update_product_amount(UpdateProductAmount {
                product_id: ProductId(3),
                amount: 2,
            })
            .await
            .unwrap_err();
        assert!(matches!(update, CartError::ActorCommunicationError(_)));

        assert_eq!(
            notifier.messages(),
            vec![ADD_FAILED_MESSAGE, UPDATE_FAILED_MESSAGE]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_requests_carry_the_expected_action() {
        let (client, mut receiver) = create_mock_client::<Cart>(4);
        let notifier = RecordingNotifier::new();
        let store = store(client, &notifier);

        let task = tokio::spawn(async move { store.remove_product(ProductId(8)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CartId(1));
        assert!(matches!(action, CartAction::RemoveProduct(ProductId(8))));
        responder.send(Ok(Vec::new())).unwrap();

        assert!(task.await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cart_reads_items() {
        let mut mock = MockClient::<Cart>::new();
        let mut cart = Cart::new(CartId(1), "key");
        cart.items.push(item(2, 3));
        mock.expect_get(CartId(1)).return_ok(Some(cart));
        mock.expect_get(CartId(1)).return_ok(None);
        let notifier = RecordingNotifier::new();
        let store = store(mock.client(), &notifier);

        assert_eq!(store.cart().await.unwrap(), vec![item(2, 3)]);
        assert!(matches!(
            store.cart().await.unwrap_err(),
            CartError::CartNotFound(_)
        ));
        // Reads never notify.
        assert!(notifier.messages().is_empty());
        mock.verify();
    }

    async fn store_over_http(base_url: String, notifier: &RecordingNotifier) -> CartStore {
        let (actor, client) = crate::cart_actor::new(4);
        tokio::spawn(actor.run(CartContext::new(
            Arc::new(stub::catalog(base_url)),
            Arc::new(MemoryStorage::new()),
        )));
        let cart_id = client.create(CartCreate::new("cart")).await.unwrap();
        CartStore::new(client, cart_id, Arc::new(notifier.clone()))
    }

    #[tokio::test]
    async fn test_bad_catalog_responses_notify_add_failure() {
        let cases = [
            ("404 Not Found", r#"{"error":"not found"}"#),
            ("200 OK", "<html>oops</html>"),
            ("200 OK", r#"{"id":1}"#),
        ];
        for (status, body) in cases {
            let notifier = RecordingNotifier::new();
            let store = store_over_http(stub::serve(status, body).await, &notifier).await;

            let err = store.add_product(ProductId(1)).await.unwrap_err();

            assert!(matches!(err, CartError::Catalog(_)), "{status} {body}: {err}");
            assert_eq!(notifier.messages(), vec![ADD_FAILED_MESSAGE]);
            assert!(store.cart().await.unwrap().is_empty());
        }
    }
}
