//! The product entity and its two variants.

use serde::{Deserialize, Deserializer, Serialize};

use std::fmt::{self, Display};

use super::values::{Price, ProductId, Stock};
use crate::inventory::ProductError;

/// The two kinds of product, each carrying one extra field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKind {
    /// A genuine product; `condition` is e.g. "new" or "used".
    Original { condition: String },
    /// A replacement or generic product; `origin` is e.g. the country of manufacture.
    NonOriginal { origin: String },
}

/// Represents a product in the inventory.
///
/// # Store Framework
/// This struct implements the [`StoreEntity`](crate::framework::StoreEntity) trait,
/// allowing it to be persisted by a [`JsonFileStore`](crate::framework::JsonFileStore).
///
/// See [`impl StoreEntity for Product`](#impl-StoreEntity-for-Product) for details on:
/// - The key it is filed under ([`ProductId`])
/// - The record written for it ([`ProductRecord`])
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    price: Price,
    stock: Stock,
    kind: ProductKind,
}

impl Product {
    /// Creates a new Product from already validated fields.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, also the key in the inventory document
    /// * `name` - Product name, stored as given
    /// * `category` - Product category, stored as given
    /// * `price` - Unit price
    /// * `stock` - Available stock quantity
    /// * `kind` - Which variant this is, with its extra field
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Price,
        stock: Stock,
        kind: ProductKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            stock,
            kind,
        }
    }

    /// Creates an original product, validating the numeric fields.
    ///
    /// # Errors
    /// `InvalidArgument` if `id` is zero, `price` is negative or not finite,
    /// or `stock` is negative.
    pub fn original(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
        condition: impl Into<String>,
    ) -> Result<Self, ProductError> {
        let kind = ProductKind::Original {
            condition: condition.into(),
        };
        Self::validated(id, name, category, price, stock, kind)
    }

    /// Creates a non-original product, validating the numeric fields.
    ///
    /// # Errors
    /// Same rules as [`Product::original`].
    pub fn non_original(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
        origin: impl Into<String>,
    ) -> Result<Self, ProductError> {
        let kind = ProductKind::NonOriginal {
            origin: origin.into(),
        };
        Self::validated(id, name, category, price, stock, kind)
    }

    fn validated(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
        kind: ProductKind,
    ) -> Result<Self, ProductError> {
        Ok(Self::new(
            ProductId::new(id)?,
            name,
            category,
            Price::new(price)?,
            Stock::new(stock)?,
            kind,
        ))
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Name with its first character upper-cased.
    pub fn name(&self) -> String {
        capitalize(&self.name)
    }

    /// Category with its first character upper-cased.
    pub fn category(&self) -> String {
        capitalize(&self.category)
    }

    pub fn price(&self) -> f64 {
        self.price.get()
    }

    pub fn stock(&self) -> u32 {
        self.stock.get()
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn condition(&self) -> Option<&str> {
        match &self.kind {
            ProductKind::Original { condition } => Some(condition),
            ProductKind::NonOriginal { .. } => None,
        }
    }

    pub fn origin(&self) -> Option<&str> {
        match &self.kind {
            ProductKind::NonOriginal { origin } => Some(origin),
            ProductKind::Original { .. } => None,
        }
    }

    /// Replaces the price. Same rules as construction.
    pub fn set_price(&mut self, price: f64) -> Result<(), ProductError> {
        self.price = Price::new(price)?;
        Ok(())
    }

    /// Replaces the stock level. Same rules as construction.
    pub fn set_stock(&mut self, stock: i64) -> Result<(), ProductError> {
        self.stock = Stock::new(stock)?;
        Ok(())
    }

    /// Serializes the product into its stored record.
    ///
    /// Name and category are written in their display form. The variant is not
    /// recorded, only its extra field.
    pub fn to_record(&self) -> ProductRecord {
        let (condition, origin) = match &self.kind {
            ProductKind::Original { condition } => (Some(condition.clone()), None),
            ProductKind::NonOriginal { origin } => (None, Some(origin.clone())),
        };
        ProductRecord {
            id: self.id.get(),
            name: self.name(),
            category: self.category(),
            price: self.price(),
            stock: self.stock(),
            condition,
            origin,
        }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.category())?;
        match &self.kind {
            ProductKind::Original { condition } => write!(f, " - Condition: {condition}"),
            ProductKind::NonOriginal { origin } => write!(f, " - Origin: {origin}"),
        }
    }
}

/// A product as stored in the inventory document.
///
/// Records are plain data: the store reads them back without re-validating, so
/// a record may hold values a [`Product`] would reject (see
/// [`ProductClient::update`](crate::clients::ProductClient::update)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(deserialize_with = "deserialize_stock")]
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

/// Rebuilds a product from a stored record, re-running validation.
///
/// The variant is inferred from which extra field is present; `condition` wins
/// if a hand-edited record carries both.
impl TryFrom<ProductRecord> for Product {
    type Error = ProductError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let kind = match (record.condition, record.origin) {
            (Some(condition), _) => ProductKind::Original { condition },
            (None, Some(origin)) => ProductKind::NonOriginal { origin },
            (None, None) => {
                return Err(ProductError::InvalidArgument(format!(
                    "Record {} has neither condition nor origin",
                    record.id
                )))
            }
        };
        Self::validated(
            record.id,
            record.name,
            record.category,
            record.price,
            i64::from(record.stock),
            kind,
        )
    }
}

/// Accepts a whole-number float (e.g. `3.0` from a hand-edited file) as a stock level.
fn deserialize_stock<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawStock {
        Whole(u32),
        Float(f64),
    }

    match RawStock::deserialize(deserializer)? {
        RawStock::Whole(stock) => Ok(stock),
        RawStock::Float(stock)
            if stock.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&stock) =>
        {
            Ok(stock as u32)
        }
        RawStock::Float(stock) => Err(serde::de::Error::custom(format!(
            "stock {stock} is not a whole non-negative number"
        ))),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
