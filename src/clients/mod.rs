//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod cart_store;

pub use cart_store::*;
