//! StoreEntity trait implementation for the Product domain type.
//!
//! This module contains the [`StoreEntity`] trait implementation
//! that enables [`Product`] to be persisted by the generic [`crate::framework::JsonFileStore`].
//!
//! See the trait implementation on [`Product`] for method documentation.

use crate::domain::{Product, ProductId, ProductRecord};
use crate::framework::StoreEntity;

impl StoreEntity for Product {
    type Id = ProductId;
    type Record = ProductRecord;

    /// Products are filed under the decimal form of their id.
    fn id(&self) -> ProductId {
        Product::id(self)
    }

    fn to_record(&self) -> ProductRecord {
        Product::to_record(self)
    }
}
