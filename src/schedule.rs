//! # Disposal Scheduling Module
//!
//! ## Purpose
//! Pure calendar arithmetic mapping a retention rule plus document dates to
//! the date on which the document must be destroyed or transferred. Two year
//! conventions are supported: the calendar year and the October 1 to
//! September 30 fiscal year.
//!
//! ## Input/Output Specification
//! - **Input**: Cutoff trigger or full [`ClassificationRecord`], the
//!   document's record date, and an optional event date
//! - **Output**: [`ScheduledDate`], a concrete date, or `NotComputable`
//! - **Behavior**: Stateless pure functions; indeterminate outcomes are
//!   sentinel values, never errors
//!
//! "Not computable" arises for permanent records, rules without a usable
//! numeric retention period, and event-based cutoffs with no event date.

use crate::{ClassificationRecord, CutoffTrigger, RetentionUnit};
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Outcome of a cutoff or disposal date calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduledDate {
    /// A concrete calendar date.
    Date(NaiveDate),
    /// The rule does not yield a computable date.
    NotComputable,
}

impl ScheduledDate {
    /// The concrete date, if one was computed.
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(date),
            Self::NotComputable => None,
        }
    }

    pub fn is_computable(self) -> bool {
        matches!(self, Self::Date(_))
    }
}

impl From<Option<NaiveDate>> for ScheduledDate {
    fn from(date: Option<NaiveDate>) -> Self {
        match date {
            Some(date) => Self::Date(date),
            None => Self::NotComputable,
        }
    }
}

/// First month of the fiscal year (October 1 to September 30).
const FISCAL_YEAR_START_MONTH: u32 = 10;

/// Compute the cutoff date on which the retention clock starts.
///
/// Event-driven triggers (`CaseClosure`, `Separation`, `EventBased`) require
/// `event_date`; without one the cutoff is not computable. An unspecified
/// trigger falls back to the calendar-year rule.
pub fn calculate_cutoff_date(
    trigger: CutoffTrigger,
    record_date: NaiveDate,
    event_date: Option<NaiveDate>,
) -> ScheduledDate {
    match trigger {
        CutoffTrigger::FiscalYear => {
            // October through December belong to the fiscal year ending the
            // following September 30.
            let year = if record_date.month() >= FISCAL_YEAR_START_MONTH {
                record_date.year() + 1
            } else {
                record_date.year()
            };
            NaiveDate::from_ymd_opt(year, 9, 30).into()
        }
        CutoffTrigger::Immediate => ScheduledDate::Date(record_date),
        CutoffTrigger::CaseClosure | CutoffTrigger::Separation | CutoffTrigger::EventBased => {
            event_date.into()
        }
        CutoffTrigger::CalendarYear | CutoffTrigger::Unspecified => {
            NaiveDate::from_ymd_opt(record_date.year(), 12, 31).into()
        }
    }
}

/// Compute the disposal date for a record.
///
/// Permanent records and rules without a usable numeric retention period are
/// never computable. Otherwise the retention period is added to the cutoff
/// date with calendar-correct month and year rollover.
pub fn calculate_disposal_date(
    record: &ClassificationRecord,
    record_date: NaiveDate,
    event_date: Option<NaiveDate>,
) -> ScheduledDate {
    if record.is_permanent {
        return ScheduledDate::NotComputable;
    }

    let value = match record.retention_value {
        Some(value) if record.retention_unit.is_computable() => value,
        _ => return ScheduledDate::NotComputable,
    };

    let cutoff = match calculate_cutoff_date(record.cutoff_trigger, record_date, event_date) {
        ScheduledDate::Date(date) => date,
        ScheduledDate::NotComputable => return ScheduledDate::NotComputable,
    };

    add_retention_period(cutoff, value, record.retention_unit)
}

/// Add a retention period to a cutoff date. Out-of-range results are not
/// computable rather than a panic.
fn add_retention_period(cutoff: NaiveDate, value: u32, unit: RetentionUnit) -> ScheduledDate {
    match unit {
        RetentionUnit::Years => cutoff
            .checked_add_months(Months::new(value.saturating_mul(12)))
            .into(),
        RetentionUnit::Months => cutoff.checked_add_months(Months::new(value)).into(),
        RetentionUnit::Days => cutoff.checked_add_days(Days::new(u64::from(value))).into(),
        RetentionUnit::EventBased | RetentionUnit::Unspecified => ScheduledDate::NotComputable,
    }
}
