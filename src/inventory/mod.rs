//! Product-specific store logic: the entity binding and the error taxonomy.

pub mod entity;
pub mod error;

pub use error::*;

use std::path::PathBuf;

use crate::clients::ProductClient;
use crate::framework::JsonFileStore;
use crate::domain::Product;

/// File the inventory lives in when no other path is given.
pub const DEFAULT_DATA_FILE: &str = "productos.json";

/// Opens the product inventory backed by the JSON file at `path`.
///
/// Nothing is read or created until the first operation.
pub fn open(path: impl Into<PathBuf>) -> ProductClient {
    let store = JsonFileStore::<Product>::new(path);
    ProductClient::new(store)
}
