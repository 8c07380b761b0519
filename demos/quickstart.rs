//! Quickstart demonstration of the retention engine.
//!
//! Builds a small record set from raw disposition sentences, runs a topic
//! search, and computes disposal dates for the selected record.

use chrono::NaiveDate;
use records_retention::config::SearchEngineConfig;
use records_retention::ingestion::{build_records, RawCorpusEntry};
use records_retention::{calculate_disposal_date, ScheduledDate, SearchEngine};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("🗂️  Records Retention Engine - Quickstart");
    println!("=========================================");

    // Build records from a miniature disposition corpus
    println!("📥 Building records from disposition sentences...");
    let (records, stats) = build_records(sample_corpus());
    println!(
        "   {} entries in, {} records built, {} skipped",
        stats.total, stats.loaded, stats.skipped
    );

    // Initialize the search engine
    let engine = SearchEngine::new(SearchEngineConfig::default());
    engine.initialize(records);

    // Ranked topic search
    println!("\n🔎 Searching for 'correspondence'...");
    let results = engine.search("correspondence");
    for result in &results {
        println!(
            "   {} - {} ({} buckets, default bucket: {})",
            result.code,
            result.nomenclature,
            result.records.len(),
            result.primary_record.bucket_title,
        );
    }

    // Disposal scheduling for the top result's primary record
    let record_date = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
    if let Some(result) = results.first() {
        println!("\n📅 Scheduling for code {} (record date {})...", result.code, record_date);
        match calculate_disposal_date(&result.primary_record, record_date, None) {
            ScheduledDate::Date(date) => println!("   disposal due on {}", date),
            ScheduledDate::NotComputable => println!("   no computable disposal date"),
        }
    }

    Ok(())
}

fn sample_corpus() -> Vec<RawCorpusEntry> {
    let raw = [
        (
            "1050",
            "Correspondence Management",
            "1",
            "General Correspondence Files",
            "DESTROY 3 YEARS AFTER CUTOFF, CALENDAR YEAR",
        ),
        (
            "1050",
            "Correspondence Management",
            "2",
            "Significant Correspondence",
            "PERMANENT. Transfer to the National Archives 25 years after cutoff, fiscal year.",
        ),
        (
            "5210",
            "Records Management Program",
            "1",
            "Program Records",
            "Destroy when superseded or obsolete.",
        ),
    ];

    raw.iter()
        .map(|(code, nomenclature, bucket, bucket_title, disposition)| RawCorpusEntry {
            code: code.to_string(),
            nomenclature: nomenclature.to_string(),
            bucket: bucket.to_string(),
            bucket_title: bucket_title.to_string(),
            owning_authority: "DON".to_string(),
            disposition_text: disposition.to_string(),
            series_title: "Administrative Records".to_string(),
        })
        .collect()
}
