use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

use crate::core::{AppError, Result};

/// Calendar month a monthly revenue figure covers.
///
/// The period is the half-open interval `[start, end)`: `start` is midnight on
/// the first day of the month, `end` is midnight on the first day of the
/// following month (January of the next year for December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportingPeriod {
    year: i32,
    month: u32,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl ReportingPeriod {
    /// Build the period for `(year, month)`; `month` is 1-based
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::validation(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }

        let (next_year, next_month) = if month == 12 {
            (year.checked_add(1), 1)
        } else {
            (Some(year), month + 1)
        };

        let start = first_instant(Some(year), month);
        let end = first_instant(next_year, next_month);

        match (start, end) {
            (Some(start), Some(end)) => Ok(Self {
                year,
                month,
                start,
                end,
            }),
            _ => Err(AppError::validation(format!(
                "year {} is outside the supported calendar range",
                year
            ))),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Inclusive lower bound
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Exclusive upper bound
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Whether `instant` falls in `[start, end)`
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    /// `YYYY-MM` label used in responses and diagnostics
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

fn first_instant(year: Option<i32>, month: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year?, month, 1)?.and_hms_opt(0, 0, 0)
}
