//! # Records Retention Classification & Disposal Scheduling Engine
//!
//! ## Overview
//! This library classifies documents by hierarchical subject-classification
//! (SSIC) codes, locates the retention/disposal rules associated with a code,
//! and computes the calendar date on which a document must be destroyed or
//! transferred to permanent archives.
//!
//! ## Architecture
//! The system is composed of several key modules:
//! - `ingestion`: Corpus loading, record building, and validation
//! - `disposition`: Heuristic parser turning disposition sentences into rules
//! - `store`: Immutable record set with atomic-swap replacement
//! - `search`: Ranked search over classification codes and topic keywords
//! - `bucket`: Primary-record selection among competing rule sets
//! - `schedule`: Cutoff and disposal date calculation
//! - `config`: Configuration management and settings
//! - `errors`: Centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: Classification record datasets (JSON), search queries (text),
//!   document dates
//! - **Output**: Ranked search results with bucket information, disposal and
//!   cutoff dates (or an explicit "not computable" outcome)
//! - **Behavior**: Deterministic keyword/score heuristics, no I/O inside the
//!   engine itself
//!
//! ## Usage
//! ```rust,no_run
//! use records_retention::{Config, SearchEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config.toml")?;
//!     let records = records_retention::ingestion::load_corpus_file("records.json")?;
//!     let engine = SearchEngine::new(config.search);
//!     engine.initialize(records);
//!     let results = engine.search("general correspondence");
//!     println!("Found {} codes", results.len());
//!     Ok(())
//! }
//! ```

// Core modules
pub mod bucket;
pub mod config;
pub mod disposition;
pub mod errors;
pub mod ingestion;
pub mod schedule;
pub mod search;
pub mod store;

// Utilities
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use errors::{Result, RetentionError};
pub use schedule::{calculate_cutoff_date, calculate_disposal_date, ScheduledDate};
pub use search::{ClassificationSearchResult, SearchEngine};
pub use store::RecordStore;

use serde::{Deserialize, Serialize};

/// When the retention clock starts for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CutoffTrigger {
    /// Cut off at the end of the calendar year.
    CalendarYear,
    /// Cut off at the end of the fiscal year (October 1 to September 30).
    FiscalYear,
    /// Cut off when the associated case is closed.
    CaseClosure,
    /// Cut off upon separation of the subject individual.
    Separation,
    /// Cut off on an external event (superseded, obsolete, canceled).
    EventBased,
    /// No retention clock; disposition applies immediately.
    Immediate,
    /// The disposition text did not specify a cutoff.
    Unspecified,
}

/// Unit of the retention period counted from the cutoff date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetentionUnit {
    Years,
    Months,
    Days,
    /// Retention runs until an external event; not usable for arithmetic.
    EventBased,
    Unspecified,
}

impl RetentionUnit {
    /// Whether a numeric retention value in this unit can be added to a
    /// cutoff date.
    pub fn is_computable(self) -> bool {
        matches!(self, Self::Years | Self::Months | Self::Days)
    }
}

/// Ultimate fate of a record at the end of its retention period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisposalAction {
    /// Destroy the record.
    Destroy,
    /// Transfer the record to the National Archives.
    TransferNara,
    Unspecified,
}

/// One retention rule set for one (code, bucket) pair.
///
/// Immutable after construction; the only mutation in the system is
/// wholesale replacement of the loaded set via [`RecordStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRecord {
    /// Subject classification code. Hierarchical and numeric-looking, but
    /// treated as a string throughout.
    pub code: String,
    /// Human-readable topic label for the code.
    pub nomenclature: String,
    /// Sub-category identifier distinguishing rule sets under one code.
    pub bucket: String,
    /// Human-readable label for the bucket.
    pub bucket_title: String,
    /// Issuing authority tag.
    pub owning_authority: String,
    /// Permanent records are never destroyed.
    pub is_permanent: bool,
    /// When the retention clock starts.
    pub cutoff_trigger: CutoffTrigger,
    /// Human-readable explanation of the trigger.
    pub cutoff_description: String,
    /// Magnitude of the retention period; `None` when the disposition text
    /// carries no usable number.
    pub retention_value: Option<u32>,
    /// Unit of the retention period.
    pub retention_unit: RetentionUnit,
    /// What happens to the record after retention.
    pub disposal_action: DisposalAction,
    /// Original disposition sentence, kept for traceability.
    pub disposition_text: String,
    /// Label of the originating document series.
    pub series_title: String,
}
