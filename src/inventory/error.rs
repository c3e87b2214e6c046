//! Error types for the product inventory.

use thiserror::Error;

use crate::framework::StoreError;

/// Errors that can occur during product operations.
///
/// `DuplicateKey` and `NotFound` are reports: the inventory document is left
/// untouched when they are returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// A bad id, price or stock at construction or mutation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The data file exists but could not be read or parsed.
    #[error("Error reading inventory data: {0}")]
    IoFailure(String),

    /// A product with this id is already stored.
    #[error("Product with id {0} already exists")]
    DuplicateKey(String),

    /// No product is stored under this id.
    #[error("Product with id {0} not found")]
    NotFound(String),
}

impl From<StoreError> for ProductError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(id) => ProductError::DuplicateKey(id),
            StoreError::NotFound(id) => ProductError::NotFound(id),
            e @ (StoreError::Read { .. } | StoreError::Malformed { .. }) => {
                ProductError::IoFailure(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_store_errors_map_onto_product_taxonomy() {
        assert_eq!(
            ProductError::from(StoreError::DuplicateKey("4".into())),
            ProductError::DuplicateKey("4".into())
        );
        assert_eq!(
            ProductError::from(StoreError::NotFound("4".into())),
            ProductError::NotFound("4".into())
        );

        let read = StoreError::Read {
            path: PathBuf::from("productos.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        match ProductError::from(read) {
            ProductError::IoFailure(msg) => {
                assert!(msg.contains("productos.json"), "got: {msg}");
                assert!(msg.contains("denied"), "got: {msg}");
            }
            other => panic!("expected IoFailure, got {other:?}"),
        }
    }
}
