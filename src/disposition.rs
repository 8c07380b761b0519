//! # Disposition Text Parser Module
//!
//! ## Purpose
//! Converts one raw regulatory disposition sentence into a structured
//! retention rule. This is a deterministic keyword heuristic with fixed
//! precedence, not a grammar: it never fails, and unrecognized text simply
//! yields `UNSPECIFIED`/null fields.
//!
//! ## Input/Output Specification
//! - **Input**: One disposition sentence (free text, matched
//!   case-insensitively)
//! - **Output**: [`ParsedDisposition`] with permanence, disposal action,
//!   cutoff trigger and description, and the numeric retention period
//! - **Precedence**: First match wins per field; the order below is part of
//!   the engine contract and must not be reordered
//!
//! ## Key Features
//! - Permanence and disposal-action keyword detection
//! - Ordered cutoff-trigger classification with canned descriptions
//! - Numeric retention extraction (`<number> <unit> AFTER|OLD`), years
//!   before months before days, first match short-circuits
//! - Event-based retention fallback for "WHEN SUPERSEDED" style rules
//!
//! Retention extraction recognizes only the literal `<number> <unit>
//! AFTER|OLD` shape; phrasings such as "3-year retention period" fall
//! through to null/`UNSPECIFIED`.

use crate::{CutoffTrigger, DisposalAction, RetentionUnit};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Structured rule extracted from one disposition sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDisposition {
    pub is_permanent: bool,
    pub disposal_action: DisposalAction,
    pub cutoff_trigger: CutoffTrigger,
    pub cutoff_description: String,
    pub retention_value: Option<u32>,
    pub retention_unit: RetentionUnit,
}

/// Disposition sentence parser with precompiled extraction patterns.
pub struct DispositionParser {
    retention_patterns: Vec<(Regex, RetentionUnit)>,
}

impl DispositionParser {
    /// Create a new parser.
    pub fn new() -> Self {
        // Tried in order; the first matching unit wins.
        let retention_patterns = vec![
            (
                Regex::new(r"(\d+)\s+YEARS?\s+(?:AFTER|OLD)\b").unwrap(),
                RetentionUnit::Years,
            ),
            (
                Regex::new(r"(\d+)\s+MONTHS?\s+(?:AFTER|OLD)\b").unwrap(),
                RetentionUnit::Months,
            ),
            (
                Regex::new(r"(\d+)\s+DAYS?\s+(?:AFTER|OLD)\b").unwrap(),
                RetentionUnit::Days,
            ),
        ];

        Self { retention_patterns }
    }

    /// Parse one disposition sentence into a structured rule.
    ///
    /// Never fails: malformed or unrecognized input yields a rule with
    /// `UNSPECIFIED`/null fields.
    pub fn parse(&self, text: &str) -> ParsedDisposition {
        let upper = text.to_uppercase();

        let is_permanent = upper.contains("PERMANENT");
        let disposal_action = detect_disposal_action(&upper);
        let (cutoff_trigger, cutoff_description) = detect_cutoff_trigger(&upper);
        let (retention_value, retention_unit) = self.extract_retention(&upper);

        tracing::debug!(
            trigger = ?cutoff_trigger,
            action = ?disposal_action,
            permanent = is_permanent,
            "parsed disposition sentence"
        );

        ParsedDisposition {
            is_permanent,
            disposal_action,
            cutoff_trigger,
            cutoff_description: cutoff_description.to_string(),
            retention_value,
            retention_unit,
        }
    }

    /// Extract the numeric retention period, years before months before
    /// days, first successful match short-circuiting the rest.
    fn extract_retention(&self, upper: &str) -> (Option<u32>, RetentionUnit) {
        for (pattern, unit) in &self.retention_patterns {
            if let Some(captures) = pattern.captures(upper) {
                if let Ok(value) = captures[1].parse::<u32>() {
                    return (Some(value), *unit);
                }
            }
        }

        // No numeric period; event-worded rules still carry a usable unit.
        if upper.contains("WHEN SUPERSEDED")
            || upper.contains("WHEN OBSOLETE")
            || upper.contains("WHEN CANCELED")
        {
            return (None, RetentionUnit::EventBased);
        }

        (None, RetentionUnit::Unspecified)
    }
}

impl Default for DispositionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one disposition sentence with a freshly constructed parser.
///
/// Convenience wrapper for one-off calls; bulk ingestion holds a
/// [`DispositionParser`] and reuses its compiled patterns.
pub fn parse_disposition(text: &str) -> ParsedDisposition {
    DispositionParser::new().parse(text)
}

fn detect_disposal_action(upper: &str) -> DisposalAction {
    if upper.contains("DESTROY") || upper.contains("DELETE") {
        DisposalAction::Destroy
    } else if upper.contains("TRANSFER") && upper.contains("NATIONAL ARCHIVES") {
        DisposalAction::TransferNara
    } else {
        DisposalAction::Unspecified
    }
}

/// Classify the cutoff trigger. Checked in this exact order; the first
/// match stops evaluation.
fn detect_cutoff_trigger(upper: &str) -> (CutoffTrigger, &'static str) {
    if upper.contains("CALENDAR YEAR") || upper.contains("CY.") {
        (
            CutoffTrigger::CalendarYear,
            "Cut off at the end of the calendar year",
        )
    } else if upper.contains("FISCAL YEAR") || upper.contains("FY.") {
        (
            CutoffTrigger::FiscalYear,
            "Cut off at the end of the fiscal year (September 30)",
        )
    } else if upper.contains("CASE CLOSURE") || upper.contains("CASE CLOSED") {
        (CutoffTrigger::CaseClosure, "Cut off when the case is closed")
    } else if upper.contains("SEPARATION") || upper.contains("SEPARATED") {
        (CutoffTrigger::Separation, "Cut off upon separation")
    } else if upper.contains("SUPERSEDED")
        || upper.contains("OBSOLETE")
        || upper.contains("CANCELED")
    {
        (
            CutoffTrigger::EventBased,
            "Cut off when superseded, obsolete, or canceled",
        )
    } else if upper.contains("IMMEDIATELY")
        || upper.contains("WHEN 6 MONTHS OLD")
        || upper.contains("WHEN 90 DAYS")
    {
        (
            CutoffTrigger::Immediate,
            "No retention period; dispose immediately",
        )
    } else {
        (CutoffTrigger::Unspecified, "Cutoff not specified")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destroy_after_calendar_year_cutoff() {
        let rule = parse_disposition("DESTROY 3 YEARS AFTER CUTOFF, CALENDAR YEAR");
        assert_eq!(rule.disposal_action, DisposalAction::Destroy);
        assert_eq!(rule.cutoff_trigger, CutoffTrigger::CalendarYear);
        assert_eq!(rule.retention_value, Some(3));
        assert_eq!(rule.retention_unit, RetentionUnit::Years);
        assert!(!rule.is_permanent);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let rule = parse_disposition("destroy 3 years after cutoff, calendar year");
        assert_eq!(rule.disposal_action, DisposalAction::Destroy);
        assert_eq!(rule.cutoff_trigger, CutoffTrigger::CalendarYear);
        assert_eq!(rule.retention_value, Some(3));
    }

    #[test]
    fn permanent_transfer_to_national_archives() {
        let rule = parse_disposition(
            "PERMANENT. Transfer to the National Archives 25 years after cutoff, fiscal year.",
        );
        assert!(rule.is_permanent);
        assert_eq!(rule.disposal_action, DisposalAction::TransferNara);
        assert_eq!(rule.cutoff_trigger, CutoffTrigger::FiscalYear);
        assert_eq!(rule.retention_value, Some(25));
        assert_eq!(rule.retention_unit, RetentionUnit::Years);
    }

    #[test]
    fn destroy_keyword_outranks_transfer() {
        let rule =
            parse_disposition("DESTROY or transfer to the National Archives when obsolete");
        assert_eq!(rule.disposal_action, DisposalAction::Destroy);
    }

    #[test]
    fn superseded_rule_is_event_based_with_no_value() {
        let rule = parse_disposition("Delete when superseded or obsolete.");
        assert_eq!(rule.disposal_action, DisposalAction::Destroy);
        assert_eq!(rule.cutoff_trigger, CutoffTrigger::EventBased);
        assert_eq!(rule.retention_value, None);
        assert_eq!(rule.retention_unit, RetentionUnit::EventBased);
    }

    #[test]
    fn calendar_year_outranks_later_trigger_keywords() {
        // Both keywords present; the earlier precedence case wins.
        let rule = parse_disposition("Cut off at end of calendar year; destroy when superseded.");
        assert_eq!(rule.cutoff_trigger, CutoffTrigger::CalendarYear);
    }

    #[test]
    fn six_months_old_is_immediate_with_month_period() {
        let rule = parse_disposition("Destroy when 6 months old.");
        assert_eq!(rule.cutoff_trigger, CutoffTrigger::Immediate);
        assert_eq!(rule.retention_value, Some(6));
        assert_eq!(rule.retention_unit, RetentionUnit::Months);
    }

    #[test]
    fn days_pattern_matches_after_year_and_month_misses() {
        let rule = parse_disposition("Destroy 90 days after case closed.");
        assert_eq!(rule.cutoff_trigger, CutoffTrigger::CaseClosure);
        assert_eq!(rule.retention_value, Some(90));
        assert_eq!(rule.retention_unit, RetentionUnit::Days);
    }

    #[test]
    fn years_match_short_circuits_months() {
        let rule = parse_disposition("Destroy 2 years after cutoff or 6 months after review.");
        assert_eq!(rule.retention_value, Some(2));
        assert_eq!(rule.retention_unit, RetentionUnit::Years);
    }

    #[test]
    fn hyphenated_period_phrasing_is_not_recognized() {
        // Known gap: only "<number> <unit> AFTER|OLD" is extracted.
        let rule = parse_disposition("Destroy; 3-year retention period applies.");
        assert_eq!(rule.retention_value, None);
        assert_eq!(rule.retention_unit, RetentionUnit::Unspecified);
    }

    #[test]
    fn unrecognized_text_yields_unspecified_fields() {
        let rule = parse_disposition("Review annually per local instruction.");
        assert!(!rule.is_permanent);
        assert_eq!(rule.disposal_action, DisposalAction::Unspecified);
        assert_eq!(rule.cutoff_trigger, CutoffTrigger::Unspecified);
        assert_eq!(rule.retention_value, None);
        assert_eq!(rule.retention_unit, RetentionUnit::Unspecified);
    }

    #[test]
    fn empty_text_never_fails() {
        let rule = parse_disposition("");
        assert_eq!(rule.cutoff_trigger, CutoffTrigger::Unspecified);
        assert_eq!(rule.disposal_action, DisposalAction::Unspecified);
    }
}
