//! # Data Ingestion Module
//!
//! ## Purpose
//! Loads classification record datasets and hands them to the engine.
//! Two shapes are supported: a raw disposition corpus (descriptive fields
//! plus the original disposition sentence, parsed into structured rules at
//! load time) and a prebuilt record dataset (the serialized output of an
//! earlier build step, deserialized directly).
//!
//! ## Input/Output Specification
//! - **Input**: JSON dataset files, raw corpus entries
//! - **Output**: Validated [`ClassificationRecord`] collections plus load
//!   statistics
//! - **Validation**: Malformed entries are filtered before they reach the
//!   store, each skip logged
//!
//! ## Architecture
//! - `validation`: Entry-level quality checks
//!
//! ## Usage
//! ```rust,no_run
//! use records_retention::ingestion;
//!
//! let records = ingestion::load_corpus_file("data/corpus.json")?;
//! # Ok::<(), records_retention::RetentionError>(())
//! ```

pub mod validation;

use crate::disposition::DispositionParser;
use crate::errors::Result;
use crate::utils::Timer;
use crate::{ClassificationRecord, RetentionError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One raw corpus entry before disposition parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCorpusEntry {
    pub code: String,
    pub nomenclature: String,
    pub bucket: String,
    pub bucket_title: String,
    pub owning_authority: String,
    /// Raw regulatory disposition sentence for this (code, bucket) pair.
    pub disposition_text: String,
    pub series_title: String,
}

/// Load statistics and progress tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LoadStats {
    /// Entries seen in the dataset
    pub total: usize,
    /// Entries converted into records
    pub loaded: usize,
    /// Entries rejected by validation
    pub skipped: usize,
}

/// Build classification records from raw corpus entries.
///
/// Each entry's disposition sentence is parsed into a structured rule;
/// entries that fail validation are skipped and logged, never fatal.
pub fn build_records(entries: Vec<RawCorpusEntry>) -> (Vec<ClassificationRecord>, LoadStats) {
    let parser = DispositionParser::new();
    let mut stats = LoadStats {
        total: entries.len(),
        ..LoadStats::default()
    };

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Err(error) = validation::validate_entry(&entry.code, &entry.nomenclature) {
            tracing::warn!(code = %entry.code, %error, "skipping corpus entry");
            stats.skipped += 1;
            continue;
        }

        let rule = parser.parse(&entry.disposition_text);
        records.push(ClassificationRecord {
            code: entry.code,
            nomenclature: entry.nomenclature,
            bucket: entry.bucket,
            bucket_title: entry.bucket_title,
            owning_authority: entry.owning_authority,
            is_permanent: rule.is_permanent,
            cutoff_trigger: rule.cutoff_trigger,
            cutoff_description: rule.cutoff_description,
            retention_value: rule.retention_value,
            retention_unit: rule.retention_unit,
            disposal_action: rule.disposal_action,
            disposition_text: entry.disposition_text,
            series_title: entry.series_title,
        });
        stats.loaded += 1;
    }

    (records, stats)
}

/// Load a raw disposition corpus from a JSON file and build records.
pub fn load_corpus_file<P: AsRef<Path>>(path: P) -> Result<Vec<ClassificationRecord>> {
    let path = path.as_ref();
    let timer = Timer::new("load_corpus");

    let entries: Vec<RawCorpusEntry> = read_json(path)?;
    let (records, stats) = build_records(entries);

    tracing::info!(
        path = %path.display(),
        total = stats.total,
        loaded = stats.loaded,
        skipped = stats.skipped,
        "corpus loaded"
    );
    timer.stop();

    Ok(records)
}

/// Load a prebuilt record dataset from a JSON file.
///
/// Entries that fail validation are filtered out, matching the contract
/// that only well-formed records reach the engine.
pub fn load_records_file<P: AsRef<Path>>(path: P) -> Result<Vec<ClassificationRecord>> {
    let path = path.as_ref();
    let timer = Timer::new("load_records");

    let all: Vec<ClassificationRecord> = read_json(path)?;
    let total = all.len();
    let records: Vec<ClassificationRecord> = all
        .into_iter()
        .filter(|record| {
            match validation::validate_entry(&record.code, &record.nomenclature) {
                Ok(()) => true,
                Err(error) => {
                    tracing::warn!(code = %record.code, %error, "skipping dataset record");
                    false
                }
            }
        })
        .collect();

    tracing::info!(
        path = %path.display(),
        total,
        loaded = records.len(),
        "record dataset loaded"
    );
    timer.stop();

    Ok(records)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| RetentionError::DatasetUnreadable {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| RetentionError::DatasetParsing {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}
