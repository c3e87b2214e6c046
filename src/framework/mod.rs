//! Generic store framework for file-backed resources.
//!
//! This module provides the core building blocks for persisting resource entities
//! to a single JSON document with CRUD operations.
//!
//! # Main Components
//!
//! - [`StoreEntity`] - Trait that resource types implement to be stored
//! - [`JsonFileStore`] - Generic store that owns the load/mutate/save cycle
//! - [`StoreError`] - Common error types

pub mod core;

// Re-export core types for convenience
pub use self::core::*;
