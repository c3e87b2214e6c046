//! Type-safe wrappers around [`JsonFileStore`](crate::framework::JsonFileStore).

pub mod product_client;
pub mod store_client;

pub use product_client::*;
pub use store_client::*;
