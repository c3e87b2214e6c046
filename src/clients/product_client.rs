//! # Product Client
//!
//! Provides the CRUD façade over the product inventory file.
//! It wraps a `JsonFileStore<Product>` and exposes domain‑specific methods.
use crate::clients::store_client::StoreClient;
use crate::domain::{Product, ProductId, ProductRecord};
use crate::framework::{JsonFileStore, StoreError};
use crate::inventory::ProductError;
use tracing::{debug, instrument};

/// Client for the product inventory.
pub struct ProductClient {
    inner: JsonFileStore<Product>,
}

impl ProductClient {
    pub fn new(inner: JsonFileStore<Product>) -> Self {
        Self { inner }
    }
}

impl StoreClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &JsonFileStore<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    /// Store a new product.
    ///
    /// Returns `DuplicateKey` without touching the file if the id is taken.
    #[instrument(skip(self, product), fields(id = %product.id()))]
    pub fn create(&self, product: &Product) -> Result<ProductId, ProductError> {
        debug!(%product, "create called");
        self.inner.create(product).map_err(Self::map_error)
    }

    /// Overwrite the stored price of a product.
    ///
    /// Unlike [`Product::set_price`] this writes the value as given: a negative
    /// price is accepted. Only values JSON cannot represent (NaN, infinities)
    /// are refused.
    #[instrument(skip(self))]
    pub fn update(&self, id: ProductId, new_price: f64) -> Result<ProductRecord, ProductError> {
        if !new_price.is_finite() {
            return Err(ProductError::InvalidArgument(format!(
                "The price {new_price} cannot be stored"
            )));
        }
        debug!("Updating price");
        self.inner
            .update(id, |record| record.price = new_price)
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory;

    #[test]
    fn test_update_writes_raw_price() {
        let dir = tempfile::tempdir().unwrap();
        let client = inventory::open(dir.path().join("productos.json"));
        let product = Product::non_original(3, "cable", "accessories", 2.0, 4, "China").unwrap();
        client.create(&product).unwrap();

        let updated = client.update(product.id(), -1.0).unwrap();
        assert_eq!(updated.price, -1.0);

        let stored = client.read(product.id()).unwrap().unwrap();
        assert_eq!(stored.price, -1.0);
        assert_eq!(stored.stock, 4);
    }

    #[test]
    fn test_update_refuses_unrepresentable_price() {
        let dir = tempfile::tempdir().unwrap();
        let client = inventory::open(dir.path().join("productos.json"));
        let product = Product::original(1, "mouse", "electronics", 2.0, 4, "new").unwrap();
        client.create(&product).unwrap();

        let result = client.update(product.id(), f64::NAN);
        assert!(matches!(result, Err(ProductError::InvalidArgument(_))));
        assert_eq!(client.read(product.id()).unwrap().unwrap().price, 2.0);
    }

    #[test]
    fn test_save_overwrites_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let client = inventory::open(dir.path().join("productos.json"));
        let mouse = Product::original(1, "mouse", "electronics", 2.0, 4, "new").unwrap();
        let cable = Product::non_original(2, "cable", "accessories", 1.0, 9, "China").unwrap();
        client.create(&mouse).unwrap();
        client.create(&cable).unwrap();

        let mut document = client.load().unwrap();
        document.shift_remove("1");
        document.get_mut("2").unwrap().stock = 0;
        client.save(&document);

        assert!(client.read(mouse.id()).unwrap().is_none());
        assert_eq!(client.read(cable.id()).unwrap().unwrap().stock, 0);
        assert_eq!(client.load().unwrap(), document);
    }
}
