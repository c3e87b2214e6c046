//! Process setup shared by the binary.
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod tracing;

pub use self::tracing::*;
