//! # Bucket Selection Module
//!
//! ## Purpose
//! Chooses the default "primary" record among several rule sets sharing one
//! classification code. The selection is a designated fallback only: a
//! consuming UI must still let a human confirm or override the choice when
//! a code carries competing buckets.

use crate::ClassificationRecord;

/// Bucket titles that mark a record as the general-purpose default.
const DEFAULT_BUCKET_MARKERS: [&str; 2] = ["general correspondence", "general operations"];

/// Select the primary record among records sharing a code.
///
/// Returns the first record whose bucket title contains a general-purpose
/// marker, or the first record in insertion order when none qualifies.
/// `None` only for an empty slice.
pub fn select_primary_record(records: &[ClassificationRecord]) -> Option<&ClassificationRecord> {
    records
        .iter()
        .find(|record| {
            let title = record.bucket_title.to_lowercase();
            DEFAULT_BUCKET_MARKERS
                .iter()
                .any(|marker| title.contains(marker))
        })
        .or_else(|| records.first())
}
