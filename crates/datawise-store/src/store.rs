//! The immutable sales table.
//!
//! A `SalesStore` is built exactly once and then shared read-only (usually
//! behind an `Arc`). There are no mutating methods, so concurrent readers
//! need no locking.

use std::path::Path;

use tracing::info;

use datawise_core::{SalesField, SalesRecord};

use crate::error::StoreError;
use crate::loader;

/// Exact, case-sensitive equality on one string column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub field: SalesField,
    pub value: String,
}

impl Predicate {
    pub fn equals(field: SalesField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        record.field(self.field) == self.value
    }
}

/// Ordered, immutable collection of validated sales rows.
#[derive(Debug, Clone, Default)]
pub struct SalesStore {
    records: Vec<SalesRecord>,
}

impl SalesStore {
    /// Read and validate the dataset at `path`.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StoreError::NotFound(path.display().to_string()),
            _ => StoreError::Io(e),
        })?;

        let store = Self::from_json(&bytes)?;
        info!(
            path = %path.display(),
            records = store.len(),
            "Sales dataset loaded"
        );
        Ok(store)
    }

    /// Build a store from the raw bytes of a JSON array of records.
    pub fn from_json(bytes: &[u8]) -> Result<Self, StoreError> {
        Ok(Self::from_records(loader::parse_records(bytes)?))
    }

    /// Build a store from already-validated rows, keeping their order.
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    /// An explicitly empty store, used when the dataset could not be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Rows satisfying every predicate, in store order.
    ///
    /// An empty predicate slice selects every row.
    pub fn filter(&self, predicates: &[Predicate]) -> Vec<&SalesRecord> {
        self.records
            .iter()
            .filter(|r| predicates.iter().all(|p| p.matches(r)))
            .collect()
    }
}
