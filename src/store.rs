//! # Record Store Module
//!
//! ## Purpose
//! Holds the currently loaded set of classification records. The set is
//! immutable once built; the only mutation is wholesale replacement, done as
//! a single atomic reference swap so concurrent readers always observe
//! either the old set or the new set in full, never a mixture.
//!
//! ## Input/Output Specification
//! - **Input**: An ordered collection of classification records
//! - **Output**: Immutable snapshots with per-code lookup
//! - **Lifecycle**: Build aside, swap once; readers hold `Arc` snapshots
//!
//! The store is owned by its caller and injected where needed, so tests can
//! construct isolated stores and run in parallel without interference.

use crate::ClassificationRecord;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable, indexed view of one loaded record set.
#[derive(Debug, Default)]
pub struct RecordSet {
    records: Vec<ClassificationRecord>,
    /// Codes in first-seen order, for deterministic iteration.
    codes: Vec<String>,
    /// Record positions per code, in insertion order.
    by_code: HashMap<String, Vec<usize>>,
}

impl RecordSet {
    /// Build an indexed set from an ordered record collection.
    pub fn new(records: Vec<ClassificationRecord>) -> Self {
        let mut codes = Vec::new();
        let mut by_code: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, record) in records.iter().enumerate() {
            let slots = by_code.entry(record.code.clone()).or_default();
            if slots.is_empty() {
                codes.push(record.code.clone());
            }
            slots.push(position);
        }

        Self {
            records,
            codes,
            by_code,
        }
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct codes in first-seen order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Whether any record carries the exact code.
    pub fn contains_code(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// All records for one exact code, in insertion order.
    pub fn records_for(&self, code: &str) -> Vec<&ClassificationRecord> {
        self.by_code
            .get(code)
            .map(|positions| positions.iter().map(|&p| &self.records[p]).collect())
            .unwrap_or_default()
    }
}

/// Shared store for the currently loaded record set.
#[derive(Debug, Default)]
pub struct RecordStore {
    current: RwLock<Arc<RecordSet>>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire loaded set. Idempotent; the last call wins.
    ///
    /// The new set is fully built before the swap, and the swap itself is a
    /// single reference replacement under a brief write lock.
    pub fn replace(&self, records: Vec<ClassificationRecord>) {
        let next = Arc::new(RecordSet::new(records));
        tracing::info!(
            records = next.len(),
            codes = next.codes.len(),
            "record set replaced"
        );
        *self.current.write() = next;
    }

    /// Snapshot of the currently loaded set.
    ///
    /// The snapshot stays valid and unchanged across later `replace` calls.
    pub fn snapshot(&self) -> Arc<RecordSet> {
        Arc::clone(&self.current.read())
    }
}
