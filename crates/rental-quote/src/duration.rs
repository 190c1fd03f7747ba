//! Display duration of a rental.
//!
//! The remainder hours here are rounded to the nearest hour. Billing uses a
//! ceiling instead (see [`crate::pricing`]), so a 6 day 2.4 hour rental shows
//! as "6 ngày 2 giờ" but bills 3 hours.

use serde::Serialize;

use crate::range::DateRange;

/// Day/hour breakdown of a rental period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RentalDuration {
    /// Wall-clock hours between start and end (fractional, minute precision).
    pub total_hours: f64,
    /// `total_hours / 24`.
    pub total_days: f64,
    /// `floor(total_days)`.
    pub whole_days: u32,
    /// Leftover hours after `whole_days`, rounded to nearest.
    pub remainder_hours: u32,
}

impl RentalDuration {
    /// Measure a resolved range using wall-clock subtraction.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rental_quote::{DateRange, RentalDuration};
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 11, 13).unwrap();
    /// let start = day.and_hms_opt(6, 0, 0).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2025, 11, 19).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let d = RentalDuration::of(&DateRange::new(start, end).unwrap());
    /// assert_eq!((d.whole_days, d.remainder_hours), (6, 3));
    /// ```
    pub fn of(range: &DateRange) -> Self {
        let minutes = (range.end() - range.start()).num_minutes();
        Self::from_hours(minutes as f64 / 60.0)
    }

    pub fn from_hours(total_hours: f64) -> Self {
        let total_days = total_hours / 24.0;
        let whole_days = total_days.floor();
        let remainder_hours = ((total_days - whole_days) * 24.0).round();

        Self {
            total_hours,
            total_days,
            whole_days: whole_days as u32,
            remainder_hours: remainder_hours as u32,
        }
    }

    /// The fallback used when no range is selected or the range is unparseable.
    pub fn one_day() -> Self {
        Self::from_hours(24.0)
    }
}
