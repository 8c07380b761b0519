//! # Classification Search Engine Module
//!
//! ## Purpose
//! Answers ranked queries over the loaded classification records. All-digit
//! queries resolve against codes (exact match first, prefix fallback);
//! everything else is a scored topic search over nomenclatures. Result
//! ordering is fully deterministic.
//!
//! ## Input/Output Specification
//! - **Input**: Free-text queries, classification codes
//! - **Output**: Ranked [`ClassificationSearchResult`] lists with bucket
//!   information and a selected primary record
//! - **Scoring**: +100 full-query substring, +10 per query word, +5 when the
//!   nomenclature starts with a word; zero-score codes are excluded
//!
//! ## Key Features
//! - Exact-then-prefix code lookup for numeric queries
//! - Keyword scoring with descending-score, ascending-code ordering
//! - Result cap applied after ranking, before assembly
//! - Primary-record selection via the bucket selector

use crate::bucket::select_primary_record;
use crate::config::SearchEngineConfig;
use crate::store::{RecordSet, RecordStore};
use crate::utils::Timer;
use crate::ClassificationRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::sync::Arc;

/// Score for a nomenclature containing the entire query as a substring.
const FULL_QUERY_SCORE: u32 = 100;
/// Score per query word found as a substring of the nomenclature.
const WORD_SCORE: u32 = 10;
/// Additional score when the nomenclature starts with a query word.
const WORD_PREFIX_BONUS: u32 = 5;
/// Query words shorter than this are ignored during topic scoring.
const MIN_WORD_LENGTH: usize = 2;

/// One ranked query response unit: a code, every record sharing it, and the
/// default primary record chosen by the bucket selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationSearchResult {
    pub code: String,
    pub nomenclature: String,
    /// All records sharing the code, in insertion order.
    pub records: Vec<ClassificationRecord>,
    /// Default selection when the caller has not picked a bucket.
    pub primary_record: ClassificationRecord,
}

/// Ranked search over classification codes and topic keywords.
pub struct SearchEngine {
    config: SearchEngineConfig,
    store: Arc<RecordStore>,
}

impl SearchEngine {
    /// Create an engine owning a fresh, empty record store.
    pub fn new(config: SearchEngineConfig) -> Self {
        Self::with_store(config, Arc::new(RecordStore::new()))
    }

    /// Create an engine over a caller-owned store.
    pub fn with_store(config: SearchEngineConfig, store: Arc<RecordStore>) -> Self {
        Self { config, store }
    }

    /// Replace the entire loaded record set. Idempotent; the last call wins.
    pub fn initialize(&self, records: Vec<ClassificationRecord>) {
        self.store.replace(records);
    }

    /// Run a ranked query.
    ///
    /// Queries shorter than the configured minimum (after trimming) return
    /// an empty list. The result cap applies after ranking regardless of
    /// query type.
    pub fn search(&self, query: &str) -> Vec<ClassificationSearchResult> {
        let trimmed = query.trim();
        if trimmed.len() < self.config.min_query_length {
            return Vec::new();
        }

        let timer = Timer::new("search");
        let snapshot = self.store.snapshot();

        let mut codes = if trimmed.chars().all(|c| c.is_ascii_digit()) {
            code_search(&snapshot, trimmed)
        } else {
            topic_search(&snapshot, trimmed)
        };
        codes.truncate(self.config.max_results);

        let results = assemble_results(&snapshot, &codes);
        tracing::debug!(query = trimmed, results = results.len(), "search complete");
        timer.stop();

        results
    }

    /// All records for one exact code, unranked.
    pub fn records_for_ssic(&self, code: &str) -> Vec<ClassificationRecord> {
        self.store
            .snapshot()
            .records_for(code)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Whether any loaded record carries the exact code.
    pub fn is_valid_code(&self, code: &str) -> bool {
        self.store.snapshot().contains_code(code)
    }

    /// The store backing this engine.
    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }
}

/// Code search: exact matches win outright; prefix matches are the
/// fallback, in ascending numeric order.
fn code_search(snapshot: &RecordSet, query: &str) -> Vec<String> {
    if snapshot.contains_code(query) {
        return vec![query.to_string()];
    }

    let mut matches: Vec<String> = snapshot
        .codes()
        .filter(|code| code.starts_with(query))
        .map(str::to_string)
        .collect();
    matches.sort_by_key(|code| numeric_code_key(code));
    matches
}

/// Topic search: score every code by its best record, drop zero scores,
/// order by descending score with ascending numeric code as the tie-break.
fn topic_search(snapshot: &RecordSet, query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let words: Vec<&str> = lowered
        .split_whitespace()
        .filter(|word| word.len() >= MIN_WORD_LENGTH)
        .collect();

    let mut scored: Vec<(u32, String)> = snapshot
        .codes()
        .filter_map(|code| {
            let score = snapshot
                .records_for(code)
                .iter()
                .map(|record| score_nomenclature(&record.nomenclature, &lowered, &words))
                .max()
                .unwrap_or(0);
            (score > 0).then(|| (score, code.to_string()))
        })
        .collect();

    scored.sort_by_key(|(score, code)| (Reverse(*score), numeric_code_key(code)));
    scored.into_iter().map(|(_, code)| code).collect()
}

fn score_nomenclature(nomenclature: &str, full_query: &str, words: &[&str]) -> u32 {
    let lowered = nomenclature.to_lowercase();
    let mut score = 0;

    if lowered.contains(full_query) {
        score += FULL_QUERY_SCORE;
    }

    for word in words {
        if lowered.contains(word) {
            score += WORD_SCORE;
            if lowered.starts_with(word) {
                score += WORD_PREFIX_BONUS;
            }
        }
    }

    score
}

/// Ordering key for codes: ascending numeric value, with codes that fail
/// numeric parsing after all parseable ones, then lexicographic.
fn numeric_code_key(code: &str) -> (u64, String) {
    (code.parse::<u64>().unwrap_or(u64::MAX), code.to_string())
}

/// Build one result per surviving code: nomenclature from the first record,
/// the full bucket list in insertion order, and the selected primary.
fn assemble_results(snapshot: &RecordSet, codes: &[String]) -> Vec<ClassificationSearchResult> {
    codes
        .iter()
        .filter_map(|code| {
            let records: Vec<ClassificationRecord> =
                snapshot.records_for(code).into_iter().cloned().collect();
            let primary_record = select_primary_record(&records)?.clone();
            let nomenclature = records[0].nomenclature.clone();

            Some(ClassificationSearchResult {
                code: code.clone(),
                nomenclature,
                records,
                primary_record,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CutoffTrigger, DisposalAction, RetentionUnit};

    fn record(code: &str, nomenclature: &str, bucket_title: &str) -> ClassificationRecord {
        ClassificationRecord {
            code: code.to_string(),
            nomenclature: nomenclature.to_string(),
            bucket: "1".to_string(),
            bucket_title: bucket_title.to_string(),
            owning_authority: "TEST".to_string(),
            is_permanent: false,
            cutoff_trigger: CutoffTrigger::CalendarYear,
            cutoff_description: String::new(),
            retention_value: Some(2),
            retention_unit: RetentionUnit::Years,
            disposal_action: DisposalAction::Destroy,
            disposition_text: String::new(),
            series_title: String::new(),
        }
    }

    fn engine_with(records: Vec<ClassificationRecord>) -> SearchEngine {
        let engine = SearchEngine::new(SearchEngineConfig::default());
        engine.initialize(records);
        engine
    }

    #[test]
    fn short_queries_return_empty_results() {
        let engine = engine_with(vec![record("1050", "Correspondence", "Files")]);
        assert!(engine.search("").is_empty());
        assert!(engine.search("a").is_empty());
        assert!(engine.search("   ").is_empty());
    }

    #[test]
    fn exact_code_match_excludes_prefix_matches() {
        let engine = engine_with(vec![
            record("1050", "Correspondence Management", "Files"),
            record("10501", "Message Traffic", "Files"),
        ]);

        let results = engine.search("1050");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "1050");
    }

    #[test]
    fn prefix_fallback_orders_codes_numerically() {
        let engine = engine_with(vec![
            record("10501", "Message Traffic", "Files"),
            record("1050", "Correspondence Management", "Files"),
            record("10502", "Routing Slips", "Files"),
        ]);

        let results = engine.search("105");
        let codes: Vec<_> = results.iter().map(|r| r.code.clone()).collect();
        assert_eq!(codes, vec!["1050", "10501", "10502"]);
    }

    #[test]
    fn unknown_code_returns_empty() {
        let engine = engine_with(vec![record("1050", "Correspondence", "Files")]);
        assert!(engine.search("9999").is_empty());
    }

    #[test]
    fn topic_search_scores_and_ranks() {
        let engine = engine_with(vec![
            record("5210", "Records Management Program", "Files"),
            record("5211", "Management of Forms", "Files"),
            record("9999", "Aviation Training", "Files"),
        ]);

        let results = engine.search("management");
        let codes: Vec<_> = results.iter().map(|r| r.code.clone()).collect();
        // 5211 starts with the query word and earns the prefix bonus.
        assert_eq!(codes, vec!["5211", "5210"]);
    }

    #[test]
    fn full_query_substring_outranks_word_hits() {
        let engine = engine_with(vec![
            record("3000", "Operations and Readiness", "Files"),
            record("3001", "General Operations Reports", "Files"),
        ]);

        let results = engine.search("general operations");
        assert_eq!(results[0].code, "3001");
        // "Operations and Readiness" still scores on the word hit.
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].code, "3000");
    }

    #[test]
    fn equal_scores_tie_break_by_ascending_code() {
        let engine = engine_with(vec![
            record("4200", "Supply Requisitions", "Files"),
            record("4100", "Supply Receipts", "Files"),
        ]);

        let results = engine.search("supply");
        let codes: Vec<_> = results.iter().map(|r| r.code.clone()).collect();
        assert_eq!(codes, vec!["4100", "4200"]);
    }

    #[test]
    fn result_cap_applies_after_ranking() {
        let records: Vec<ClassificationRecord> = (0..20)
            .map(|n| record(&format!("{}", 1001 + n), "Supply Records", "Files"))
            .collect();
        let engine = engine_with(records);

        let results = engine.search("supply");
        assert_eq!(results.len(), 15);
        assert_eq!(results[0].code, "1001");
        assert_eq!(results[14].code, "1015");
    }

    #[test]
    fn results_carry_all_buckets_and_a_primary() {
        let engine = engine_with(vec![
            record("1050", "Correspondence Management", "Case Files"),
            record("1050", "Correspondence Management", "General Correspondence Files"),
        ]);

        let results = engine.search("correspondence");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].records.len(), 2);
        assert_eq!(
            results[0].primary_record.bucket_title,
            "General Correspondence Files"
        );
        assert_eq!(results[0].nomenclature, "Correspondence Management");
    }

    #[test]
    fn repeated_searches_are_deterministic() {
        let records = vec![
            record("5210", "Records Management Program", "Files"),
            record("5211", "Management of Forms", "Files"),
        ];
        let engine = engine_with(records.clone());

        let first = engine.search("management");
        let second = engine.search("management");
        assert_eq!(first, second);

        // Re-initializing with the same set changes nothing.
        engine.initialize(records);
        assert_eq!(engine.search("management"), first);
    }

    #[test]
    fn lookup_and_validity_checks_are_exact() {
        let engine = engine_with(vec![
            record("1050", "Correspondence Management", "Files"),
            record("10501", "Message Traffic", "Files"),
        ]);

        assert_eq!(engine.records_for_ssic("1050").len(), 1);
        assert!(engine.records_for_ssic("105").is_empty());
        assert!(engine.is_valid_code("10501"));
        assert!(!engine.is_valid_code("105"));
    }

    #[test]
    fn engines_can_share_a_caller_owned_store() {
        let store = Arc::new(RecordStore::new());
        let writer = SearchEngine::with_store(SearchEngineConfig::default(), Arc::clone(&store));
        let reader = SearchEngine::with_store(SearchEngineConfig::default(), store);

        writer.initialize(vec![record("1050", "Correspondence Management", "Files")]);
        assert!(reader.is_valid_code("1050"));
        assert!(Arc::ptr_eq(writer.store(), reader.store()));
    }

    #[test]
    fn searching_an_empty_store_is_safe() {
        let engine = SearchEngine::new(SearchEngineConfig::default());
        assert!(engine.search("management").is_empty());
        assert!(engine.search("1050").is_empty());
    }
}
