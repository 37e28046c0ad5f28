//! Pure data structures: catalog types and the [`Cart`] entity.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
