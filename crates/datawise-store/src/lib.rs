//! DataWise Store crate - immutable in-memory sales table.
//!
//! Loads the JSON dataset once, coerces `sales` and `date` into typed
//! columns, and exposes read-only filtering for the question engine.

pub mod error;
pub mod loader;
pub mod store;

pub use error::StoreError;
pub use store::{Predicate, SalesStore};
