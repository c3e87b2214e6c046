//! Validated scalar fields of a [`Product`](crate::domain::Product).
//!
//! Each type can only be built through a checking constructor, either from a
//! number or from raw text via [`FromStr`]. Both paths apply the same rules.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::inventory::ProductError;

/// Unique product identifier. Always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Result<Self, ProductError> {
        if id == 0 {
            return Err(ProductError::InvalidArgument(
                "The ID must be a positive integer".to_string(),
            ));
        }
        Ok(Self(id))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for ProductId {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().parse::<u64>().map_err(|_| {
            ProductError::InvalidArgument(format!("The ID must be an integer, got {s:?}"))
        })?;
        Self::new(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unit price. Finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(price: f64) -> Result<Self, ProductError> {
        if !price.is_finite() {
            return Err(ProductError::InvalidArgument(
                "The price must be a valid number".to_string(),
            ));
        }
        if price < 0.0 {
            return Err(ProductError::InvalidArgument(
                "The price must be a positive number".to_string(),
            ));
        }
        Ok(Self(price))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl FromStr for Price {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let price = s.trim().parse::<f64>().map_err(|_| {
            ProductError::InvalidArgument(format!("The price must be a valid number, got {s:?}"))
        })?;
        Self::new(price)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Units in stock. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Stock(u32);

impl Stock {
    pub fn new(stock: i64) -> Result<Self, ProductError> {
        if stock < 0 {
            return Err(ProductError::InvalidArgument(
                "The stock cannot be negative".to_string(),
            ));
        }
        u32::try_from(stock).map(Self).map_err(|_| {
            ProductError::InvalidArgument(format!("The stock {stock} is out of range"))
        })
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for Stock {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stock = s.trim().parse::<i64>().map_err(|_| {
            ProductError::InvalidArgument(format!("The stock must be numeric, got {s:?}"))
        })?;
        Self::new(stock)
    }
}

impl Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
