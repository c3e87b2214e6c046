//! # Product Inventory
//!
//! > **A single-user product inventory persisted to one JSON file.**
//!
//! Products carry a name, a category, a price and a stock level, and come in two
//! variants: *original* (with a condition such as "new") and *non-original* (with
//! an origin such as a country of manufacture). The inventory supports create,
//! read, update-price and delete by id, plus listing everything.
//!
//! ## 🏗️ Design
//!
//! ### Whole-document persistence
//! The inventory is one JSON object mapping the decimal product id to a product
//! record. Every operation re-reads the entire file; every mutation rewrites it.
//! There is no cache, no index and no locking: two writers racing on the same
//! file can lose updates.
//!
//! ### Validation at the edges of the entity
//! [`Product`](domain::Product) keeps its fields private. Ids, prices and stock
//! levels go through checked constructors ([`ProductId`](domain::ProductId),
//! [`Price`](domain::Price), [`Stock`](domain::Stock)) and fail with
//! [`ProductError::InvalidArgument`](inventory::ProductError::InvalidArgument).
//!
//! ### Known asymmetries
//! - A failed save is logged and swallowed. The mutation still reports success.
//! - [`ProductClient::update`](clients::ProductClient::update) writes the new price
//!   as given, without the non-negative check construction applies.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`JsonFileStore`](framework::JsonFileStore) owning the
//! load/mutate/save cycle for anything implementing
//! [`StoreEntity`](framework::StoreEntity).
//!
//! ### 2. The Data ([`domain`])
//! The product entity, its variants, and its stored record.
//!
//! ### 3. The Binding ([`inventory`])
//! `impl StoreEntity for Product`, the error taxonomy and [`inventory::open`].
//!
//! ### 4. The Interface ([`clients`])
//! [`ProductClient`](clients::ProductClient), the CRUD façade used by the CLI.
//!
//! ### 5. The Front End ([`cli`], [`lifecycle`])
//! The numbered menu, argument parsing and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Uses ./productos.json
//! cargo run
//!
//! # Another file, with one log line per mutation
//! RUST_LOG=info cargo run -- --file inventory.json
//! ```

pub mod cli;
pub mod clients;
pub mod domain;
pub mod framework;
pub mod inventory;
pub mod lifecycle;
