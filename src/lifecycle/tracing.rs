//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the inventory.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Logs go to stderr so they never interleave with the menu on stdout.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix (`with_target(false)`).
//! Verbosity comes from the `RUST_LOG` environment variable; without it only errors are shown,
//! which still includes failed saves.
//!
//! ## What Gets Traced
//!
//! - **Store Operations**: Create, Get, Update, Delete with the entity id and document size
//! - **Reported Conditions**: Duplicate ids and missing ids at `warn`
//! - **Swallowed Failures**: A save that could not be written, at `error`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Only errors (default)
//! cargo run
//!
//! # One line per mutation
//! RUST_LOG=info cargo run
//!
//! # Loads, saves and full payloads
//! RUST_LOG=debug cargo run -- --file /tmp/inventory.json
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO create{id=5}: Created entity_type="Product" id=5 size=1
//! WARN create{id=5}: Already exists entity_type="Product" id=5
//! INFO update{id=5 new_price=9.99}: Updated entity_type="Product" id=5
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false) // entity_type carries the context instead
        .compact()
        .init();
}
