//! # Retention Engine CLI Driver
//!
//! ## Purpose
//! Command-line entry point for inspecting a retention dataset: run ranked
//! queries, list the records behind a code, and compute cutoff and disposal
//! dates for a document.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration file, dataset file, query/code/date arguments
//! - **Output**: Human-readable reports on stdout
//!
//! ## Architecture Flow
//! 1. Parse command line arguments and load configuration
//! 2. Initialize logging and tracing
//! 3. Load the dataset and initialize the search engine
//! 4. Run the requested operation and print the report

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Arg, ArgMatches, Command};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use records_retention::{
    bucket::select_primary_record,
    calculate_cutoff_date, calculate_disposal_date,
    config::Config,
    ingestion,
    utils::truncate,
    ClassificationRecord, DisposalAction, RetentionUnit, ScheduledDate, SearchEngine,
};

fn main() -> anyhow::Result<()> {
    let matches = Command::new("retention-cli")
        .version("1.0.0")
        .author("Records Management Team")
        .about("Records retention classification and disposal scheduling engine")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("FILE")
                .help("Dataset path (overrides the configuration)"),
        )
        .subcommand(
            Command::new("search").about("Run a ranked query").arg(
                Arg::new("query")
                    .value_name("QUERY")
                    .help("Classification code or topic keywords")
                    .required(true),
            ),
        )
        .subcommand(
            Command::new("lookup")
                .about("List every record for an exact code")
                .arg(Arg::new("code").value_name("CODE").required(true)),
        )
        .subcommand(
            Command::new("schedule")
                .about("Compute cutoff and disposal dates for a code")
                .arg(Arg::new("code").value_name("CODE").required(true))
                .arg(
                    Arg::new("record-date")
                        .long("record-date")
                        .value_name("YYYY-MM-DD")
                        .help("Document creation date")
                        .required(true),
                )
                .arg(
                    Arg::new("event-date")
                        .long("event-date")
                        .value_name("YYYY-MM-DD")
                        .help("Triggering event date, for event-based cutoffs"),
                )
                .arg(
                    Arg::new("bucket")
                        .long("bucket")
                        .value_name("ID")
                        .help("Bucket identifier (defaults to the primary record)"),
                ),
        )
        .subcommand_required(true)
        .get_matches();

    // Load configuration
    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("config.toml");
    let mut config = Config::from_file(config_path)?;
    if let Some(data) = matches.get_one::<String>("data") {
        config.data.dataset_path = data.into();
    }

    init_logging(&config);

    info!("Loading dataset from {:?}", config.data.dataset_path);
    let records = if config.data.raw_corpus {
        ingestion::load_corpus_file(&config.data.dataset_path)?
    } else {
        ingestion::load_records_file(&config.data.dataset_path)?
    };

    let engine = SearchEngine::new(config.search.clone());
    engine.initialize(records);

    match matches.subcommand() {
        Some(("search", sub)) => run_search(&engine, sub),
        Some(("lookup", sub)) => run_lookup(&engine, sub),
        Some(("schedule", sub)) => run_schedule(&engine, sub),
        _ => Ok(()),
    }
}

/// Initialize logging and tracing.
fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    if config.logging.json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn run_search(engine: &SearchEngine, matches: &ArgMatches) -> anyhow::Result<()> {
    let query = required_arg(matches, "query")?;
    let results = engine.search(query);

    if results.is_empty() {
        println!("No matches for '{}'", query);
        return Ok(());
    }

    println!("{} matching code(s):", results.len());
    for (rank, result) in results.iter().enumerate() {
        println!(
            "{:>2}. {:<8} {} ({} bucket{})",
            rank + 1,
            result.code,
            result.nomenclature,
            result.records.len(),
            if result.records.len() == 1 { "" } else { "s" },
        );
        println!(
            "    default bucket: {} - {}",
            result.primary_record.bucket, result.primary_record.bucket_title
        );
    }
    Ok(())
}

fn run_lookup(engine: &SearchEngine, matches: &ArgMatches) -> anyhow::Result<()> {
    let code = required_arg(matches, "code")?;
    let records = engine.records_for_ssic(code);
    if records.is_empty() {
        bail!("No records for code '{}'", code);
    }

    println!("{} - {}", code, records[0].nomenclature);
    for record in &records {
        println!("  bucket {} ({})", record.bucket, record.bucket_title);
        println!("    action:    {}", action_label(record.disposal_action));
        println!("    cutoff:    {}", record.cutoff_description);
        println!("    retention: {}", retention_label(record));
        println!(
            "    rule:      {}",
            truncate(&record.disposition_text, 72)
        );
    }
    Ok(())
}

fn run_schedule(engine: &SearchEngine, matches: &ArgMatches) -> anyhow::Result<()> {
    let code = required_arg(matches, "code")?;
    let record_date = parse_date(required_arg(matches, "record-date")?)?;
    let event_date = matches
        .get_one::<String>("event-date")
        .map(|raw| parse_date(raw))
        .transpose()?;

    let records = engine.records_for_ssic(code);
    if records.is_empty() {
        bail!("No records for code '{}'", code);
    }

    let record = match matches.get_one::<String>("bucket") {
        Some(bucket) => records
            .iter()
            .find(|r| r.bucket == *bucket)
            .with_context(|| format!("Code '{}' has no bucket '{}'", code, bucket))?,
        None => select_primary_record(&records)
            .with_context(|| format!("Code '{}' has no records", code))?,
    };

    println!("{} - {}", record.code, record.nomenclature);
    println!("  bucket:   {} ({})", record.bucket, record.bucket_title);
    println!("  action:   {}", action_label(record.disposal_action));
    println!("  cutoff:   {}", record.cutoff_description);

    let cutoff = calculate_cutoff_date(record.cutoff_trigger, record_date, event_date);
    let disposal = calculate_disposal_date(record, record_date, event_date);
    println!("  cutoff date:   {}", date_label(cutoff));
    println!("  disposal date: {}", date_label(disposal));

    if record.is_permanent {
        println!("  note: permanent record, no destruction date exists");
    }
    Ok(())
}

fn required_arg<'a>(matches: &'a ArgMatches, name: &str) -> anyhow::Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("missing required argument '{}'", name))
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", raw))
}

fn action_label(action: DisposalAction) -> &'static str {
    match action {
        DisposalAction::Destroy => "destroy",
        DisposalAction::TransferNara => "transfer to the National Archives",
        DisposalAction::Unspecified => "unspecified",
    }
}

fn retention_label(record: &ClassificationRecord) -> String {
    let unit = match record.retention_unit {
        RetentionUnit::Years => "years",
        RetentionUnit::Months => "months",
        RetentionUnit::Days => "days",
        RetentionUnit::EventBased => "until event",
        RetentionUnit::Unspecified => "unspecified",
    };
    match record.retention_value {
        Some(value) => format!("{} {}", value, unit),
        None => unit.to_string(),
    }
}

fn date_label(date: ScheduledDate) -> String {
    match date {
        ScheduledDate::Date(date) => date.to_string(),
        ScheduledDate::NotComputable => "not computable".to_string(),
    }
}
