//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); the actor already tags its
//! events with `entity_type`.
//!
//! ```bash
//! RUST_LOG=info cart-store add 1     # lifecycle and outcomes
//! RUST_LOG=debug cart-store add 1    # payloads, stock checks, HTTP requests
//! RUST_LOG=cart_store::catalog=debug cart-store show
//! ```
//!
//! ## What Gets Traced
//!
//! - Actor start and shutdown, with the number of carts held
//! - Every request (`Create`, `Get`, `Action`) with its outcome
//! - Stock checks and snapshot writes inside the cart
//! - Failed operations and the notification they produced
//!
//! With `RUST_LOG=debug`, adding a product that is already in the cart looks like:
//!
//! ```text
//! DEBUG add_product{product_id=ProductId(1) cart_id=cart_1}: Sending request action=AddProduct(ProductId(1))
//! DEBUG Action entity_type="Cart" id=cart_1 action=AddProduct(ProductId(1))
//! DEBUG Stock checked product_id=product_1 current=1 available=3
//! DEBUG Snapshot saved cart_id=cart_1 items=1
//!  INFO Action ok entity_type="Cart" id=cart_1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
