//! Range splitting and year-rollover resolution.
//!
//! A range string is two tokens joined by a single `" - "`. Tokens carry no
//! year, so the year is inferred from today's date:
//!
//! 1. The start takes the current year, unless its month/day has already
//!    passed this year, in which case it takes next year.
//! 2. The end takes the start's year, unless that puts it at or before the
//!    start, in which case it takes the following year.
//!
//! This is what makes `"28 Thg 12 | ... - 3 Thg 1 | ..."` span New Year
//! without the caller ever naming a year.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::{QuoteError, Result};
use crate::token::{parse_token, ResolvedInstant};

/// The literal separating the two endpoints of a range.
pub const RANGE_SEPARATOR: &str = " - ";

/// Placeholder the Vietnamese UI shows before a range is picked.
pub const PLACEHOLDER_VI: &str = "Chọn Ngày";

/// Placeholder the English UI shows before a range is picked.
pub const PLACEHOLDER_EN: &str = "Select Date";

/// A rental period whose end is strictly later than its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    /// # Errors
    ///
    /// Returns [`QuoteError::RangeOrder`] if `end` is not after `start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if end <= start {
            return Err(QuoteError::RangeOrder(format!(
                "end {end} is not after start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn start_instant(&self) -> ResolvedInstant {
        self.start.into()
    }

    pub fn end_instant(&self) -> ResolvedInstant {
        self.end.into()
    }
}

/// Whether `input` is the "no selection" sentinel rather than a range.
///
/// Empty or whitespace-only input always counts. Otherwise the trimmed input
/// is compared case-insensitively against each placeholder.
pub fn is_no_selection<S: AsRef<str>>(input: &str, placeholders: &[S]) -> bool {
    let input = input.trim();
    input.is_empty()
        || placeholders
            .iter()
            .any(|p| p.as_ref().trim().to_lowercase() == input.to_lowercase())
}

/// Split a range string into its two trimmed tokens.
///
/// # Errors
///
/// Returns [`QuoteError::Format`] unless the string splits on `" - "` into
/// exactly two parts.
pub fn split_range(input: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = input.split(RANGE_SEPARATOR).map(str::trim).collect();
    match parts.as_slice() {
        [start, end] => Ok((*start, *end)),
        _ => Err(QuoteError::Format(format!(
            "expected '<start>{RANGE_SEPARATOR}<end>', found {} part(s) in '{}'",
            parts.len(),
            input.trim()
        ))),
    }
}

/// Parse a range string and resolve both endpoint years against `today`.
///
/// # Arguments
///
/// * `input` — e.g. `"Nov 13 | 6:00 AM - Nov 19 | 9:00 AM"`
/// * `today` — The current local date, the anchor for year inference
///
/// # Errors
///
/// Returns [`QuoteError::Format`] if the split fails,
/// [`QuoteError::TokenParse`] if a token is malformed or names a date that
/// does not exist in its resolved year, and [`QuoteError::RangeOrder`] if the
/// resolved end is somehow not after the start.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rental_quote::range::parse_range;
///
/// let today = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
/// let range = parse_range("28 Thg 12 | 6:00 SA - 3 Thg 1 | 6:00 SA", &today).unwrap();
/// assert_eq!(range.start_instant().year, 2026);
/// assert_eq!(range.end_instant().year, 2027);
/// ```
pub fn parse_range(input: &str, today: &NaiveDate) -> Result<DateRange> {
    let (start_token, end_token) = split_range(input)?;
    let start = parse_token(start_token, today.year())?;
    let end = parse_token(end_token, today.year())?;

    let range = resolve_years(start, end, today)?;
    tracing::debug!(
        input = input.trim(),
        start = %range.start,
        end = %range.end,
        "resolved rental range"
    );
    Ok(range)
}

/// Apply the two-stage year inference to a pair of parsed tokens.
///
/// The end takes the start's year when its month, day and time come later,
/// and the following year otherwise. Only then is each date checked against
/// the calendar.
pub fn resolve_years(
    start: ResolvedInstant,
    end: ResolvedInstant,
    today: &NaiveDate,
) -> Result<DateRange> {
    let start_year = if start.is_before_day_of(*today) {
        today.year() + 1
    } else {
        today.year()
    };
    let start_at = start.with_year(start_year).to_naive()?;

    // Ordered on the raw fields so an end such as 29 Feb that is missing from
    // `start_year` still rolls over when it falls before the start.
    let end_year = if end.wall_clock_key() > start.wall_clock_key() {
        start_year
    } else {
        start_year + 1
    };
    let end_at = end.with_year(end_year).to_naive()?;

    DateRange::new(start_at, end_at)
}
