//! Locale date-time token parsing.
//!
//! A token is one endpoint of a rental range as the booking UI renders it,
//! in one of two grammars:
//!
//! - Vietnamese: `<day> Thg <month> | <hour>:<minute> <SA|CH>` (e.g. `"13 Thg 11 | 6:00 SA"`)
//! - English: `<MonthName> <day> | <hour>:<minute> <AM|PM>` (e.g. `"Nov 13 | 6:00 PM"`)
//!
//! Tokens carry no year. [`parse_token`] fills in a caller-supplied default
//! year; the range resolver replaces it with the inferred one.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::error::{QuoteError, Result};

// ── Types ───────────────────────────────────────────────────────────────────

/// Which grammar a token was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Locale {
    Vietnamese,
    English,
}

/// Morning/afternoon marker. `SA` and `CH` are the Vietnamese forms of `AM` and `PM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Parse the marker allowed by `locale` (case-insensitive).
    fn parse(s: &str, locale: Locale) -> Option<Self> {
        match (locale, s.to_ascii_lowercase().as_str()) {
            (Locale::Vietnamese, "sa") | (Locale::English, "am") => Some(Meridiem::Am),
            (Locale::Vietnamese, "ch") | (Locale::English, "pm") => Some(Meridiem::Pm),
            _ => None,
        }
    }

    /// Convert a 12-hour clock hour (1-12) to 24-hour form.
    ///
    /// ```
    /// use rental_quote::token::Meridiem;
    ///
    /// assert_eq!(Meridiem::Pm.to_24_hour(6), 18);
    /// assert_eq!(Meridiem::Pm.to_24_hour(12), 12);
    /// assert_eq!(Meridiem::Am.to_24_hour(12), 0);
    /// assert_eq!(Meridiem::Am.to_24_hour(9), 9);
    /// ```
    pub fn to_24_hour(self, hour: u32) -> u32 {
        match (self, hour) {
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
        }
    }
}

/// Wall-clock calendar fields with no timezone attached.
///
/// The fields are not checked against the calendar until
/// [`to_naive`](ResolvedInstant::to_naive) is called, so a token such as
/// `"29 Thg 2 | ..."` can be parsed before its year is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Hour in 24-hour form (0-23).
    pub hour: u32,
    pub minute: u32,
}

impl ResolvedInstant {
    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    /// Whether this month/day falls strictly before `date`'s month/day,
    /// ignoring the year and time of day.
    pub fn is_before_day_of(&self, date: NaiveDate) -> bool {
        (self.month, self.day) < (date.month(), date.day())
    }

    /// `(month, day, hour, minute)`, for ordering two instants within one year.
    pub fn wall_clock_key(&self) -> (u32, u32, u32, u32) {
        (self.month, self.day, self.hour, self.minute)
    }

    /// Validate against the calendar and convert to a chrono datetime.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::TokenParse`] when the date does not exist in
    /// `year` (e.g. 31 April, or 29 February of a non-leap year).
    pub fn to_naive(&self) -> Result<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| date.and_hms_opt(self.hour, self.minute, 0))
            .ok_or_else(|| QuoteError::TokenParse(format!("{self} is not a valid calendar date")))
    }
}

impl From<NaiveDateTime> for ResolvedInstant {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }
}

impl fmt::Display for ResolvedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

// ── parse_token ─────────────────────────────────────────────────────────────

/// Parse one date+time token in either locale grammar.
///
/// # Arguments
///
/// * `token` — A single range endpoint, e.g. `"13 Thg 11 | 6:00 SA"` or `"Nov 13 | 6:00 PM"`
/// * `default_year` — The year to stamp on the result (normally the current year)
///
/// # Errors
///
/// Returns [`QuoteError::TokenParse`] if the token matches neither grammar,
/// names an unknown month, uses a meridiem marker from the other locale, or
/// has a field out of range (day 1-31, month 1-12, hour 1-12, minute 00-59).
/// Bare 24-hour times such as `"18:00"` are rejected.
///
/// # Examples
///
/// ```
/// use rental_quote::token::parse_token;
///
/// let vi = parse_token("13 Thg 11 | 6:00 CH", 2025).unwrap();
/// assert_eq!((vi.month, vi.day, vi.hour, vi.minute), (11, 13, 18, 0));
///
/// let en = parse_token("November 13 | 12:30 AM", 2025).unwrap();
/// assert_eq!((en.month, en.day, en.hour, en.minute), (11, 13, 0, 30));
/// ```
pub fn parse_token(token: &str, default_year: i32) -> Result<ResolvedInstant> {
    let token = token.trim();
    let (date_part, time_part) = token.split_once('|').ok_or_else(|| {
        QuoteError::TokenParse(format!("missing '|' between date and time in '{token}'"))
    })?;

    let date_fields: Vec<&str> = date_part.split_whitespace().collect();
    let (locale, month, day) = match date_fields.as_slice() {
        [day, marker, month] if marker.eq_ignore_ascii_case("thg") => (
            Locale::Vietnamese,
            parse_bounded(month, 1, 12, "month", token)?,
            parse_bounded(day, 1, 31, "day", token)?,
        ),
        [name, day] => {
            let month = parse_month_name(name).ok_or_else(|| {
                QuoteError::TokenParse(format!("unknown month name '{name}' in '{token}'"))
            })?;
            (Locale::English, month, parse_bounded(day, 1, 31, "day", token)?)
        }
        _ => {
            return Err(QuoteError::TokenParse(format!(
                "unrecognized date '{}' in '{token}'",
                date_part.trim()
            )));
        }
    };

    let (hour, minute) = parse_clock(time_part, locale, token)?;

    Ok(ResolvedInstant {
        year: default_year,
        month,
        day,
        hour,
        minute,
    })
}

/// Like [`parse_token`], but discards the error.
pub fn try_parse_token(token: &str, default_year: i32) -> Option<ResolvedInstant> {
    parse_token(token, default_year).ok()
}

// ── Parsing helpers ─────────────────────────────────────────────────────────

/// Parse an English month name or 3-letter abbreviation (case-insensitive).
fn parse_month_name(s: &str) -> Option<u32> {
    match s.to_ascii_lowercase().as_str() {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Parse `"<hour>:<minute> <marker>"` into a 24-hour (hour, minute) pair.
fn parse_clock(s: &str, locale: Locale, token: &str) -> Result<(u32, u32)> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    let [hm, marker] = fields.as_slice() else {
        return Err(QuoteError::TokenParse(format!(
            "expected '<hour>:<minute> <meridiem>' in '{token}'"
        )));
    };

    let (hour, minute) = hm.split_once(':').ok_or_else(|| {
        QuoteError::TokenParse(format!("missing ':' in time '{hm}' of '{token}'"))
    })?;
    let hour = parse_bounded(hour, 1, 12, "hour", token)?;
    if minute.len() != 2 {
        return Err(QuoteError::TokenParse(format!(
            "minute must be two digits in '{token}'"
        )));
    }
    let minute = parse_bounded(minute, 0, 59, "minute", token)?;

    let meridiem = Meridiem::parse(marker, locale).ok_or_else(|| {
        QuoteError::TokenParse(format!(
            "unrecognized meridiem '{marker}' for {locale:?} date in '{token}'"
        ))
    })?;

    Ok((meridiem.to_24_hour(hour), minute))
}

/// Parse a 1-2 digit unsigned number and check it lies in `min..=max`.
fn parse_bounded(s: &str, min: u32, max: u32, field: &str, token: &str) -> Result<u32> {
    let digits_ok = !s.is_empty() && s.len() <= 2 && s.bytes().all(|b| b.is_ascii_digit());
    let value = digits_ok
        .then(|| s.parse::<u32>().ok())
        .flatten()
        .ok_or_else(|| {
            QuoteError::TokenParse(format!("{field} '{s}' is not a number in '{token}'"))
        })?;

    if !(min..=max).contains(&value) {
        return Err(QuoteError::TokenParse(format!(
            "{field} {value} out of range {min}-{max} in '{token}'"
        )));
    }
    Ok(value)
}
