//! Pure data structures implementing the [`StoreEntity`](crate::framework::StoreEntity) trait.

pub mod product;
pub mod values;

pub use product::*;
pub use values::*;
