//! Deterministic date-to-index rotation ("verse of the day").
//!
//! The index for a date is its day of year modulo the list length, so a given
//! civil date always yields the same element. Note the inherited boundary
//! behavior: day of year shifts by one after February in leap years, so the
//! element shown for e.g. March 1 differs between leap and common years. That
//! matches the site this data model came from and is asserted in tests rather
//! than corrected.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::VerseRecord;

/// A rotation entry: a verse with the month it was curated for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyVerse {
    /// Month tag (1-12), display metadata only; selection ignores it.
    pub month: u32,
    pub verse: VerseRecord,
}

/// Select the element for a date: `list[day_of_year % len]`.
///
/// Returns `None` only for an empty list.
pub fn select_for_date<T>(date: NaiveDate, list: &[T]) -> Option<&T> {
    if list.is_empty() {
        return None;
    }
    let index = date.ordinal() as usize % list.len();
    Some(&list[index])
}
