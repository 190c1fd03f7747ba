//! Rental price computation.
//!
//! Pricing bills whole days at the daily rate and any leftover time at an
//! hourly rate. Leftover time is rounded **up** to a full hour, and the
//! billed period never drops below the minimum charge.

use serde::Serialize;

use crate::duration::RentalDuration;

/// Default minimum billable period, in hours.
pub const DEFAULT_MINIMUM_CHARGE_HOURS: u32 = 24;

/// Per-vehicle rates, in whole currency units (VND).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rates {
    pub daily: u64,
    /// When absent, the hourly rate is the daily rate divided by 24, rounded up.
    pub hourly: Option<u64>,
}

impl Rates {
    pub fn daily(daily: u64) -> Self {
        Self {
            daily,
            hourly: None,
        }
    }

    pub fn with_hourly(self, hourly: u64) -> Self {
        Self {
            hourly: Some(hourly),
            ..self
        }
    }

    /// The hourly rate actually billed.
    ///
    /// ```
    /// use rental_quote::Rates;
    ///
    /// assert_eq!(Rates::daily(180_000).effective_hourly(), 7_500);
    /// assert_eq!(Rates::daily(100).effective_hourly(), 5);
    /// assert_eq!(Rates::daily(100).with_hourly(3).effective_hourly(), 3);
    /// ```
    pub fn effective_hourly(&self) -> u64 {
        self.hourly.unwrap_or_else(|| self.daily.div_ceil(24))
    }
}

/// A receipt-style breakdown of a rental charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    pub daily_rate: u64,
    /// The hourly rate applied to `remainder_hours`.
    pub hourly_rate: u64,
    pub whole_days: u32,
    pub remainder_hours: u32,
    /// `whole_days * daily_rate`.
    pub subtotal: u64,
    /// `remainder_hours * hourly_rate`.
    pub hourly_charge: u64,
    pub total: u64,
}

impl PriceQuote {
    /// One day at the daily rate, with no hourly charge.
    ///
    /// Used when no range has been selected. The minimum charge does not apply.
    pub fn flat_day(rates: Rates) -> Self {
        Self {
            daily_rate: rates.daily,
            hourly_rate: rates.effective_hourly(),
            whole_days: 1,
            remainder_hours: 0,
            subtotal: rates.daily,
            hourly_charge: 0,
            total: rates.daily,
        }
    }
}

/// Price a rental.
///
/// # Arguments
///
/// * `rates` — Daily rate and optional hourly rate
/// * `duration` — The measured rental duration
/// * `minimum_charge_hours` — Shorter rentals are billed as if this long
///
/// # Examples
///
/// ```
/// use rental_quote::{price, Rates, RentalDuration};
///
/// let quote = price(Rates::daily(180_000), &RentalDuration::from_hours(147.0), 24);
/// assert_eq!((quote.whole_days, quote.remainder_hours), (6, 3));
/// assert_eq!(quote.total, 1_102_500);
/// ```
pub fn price(rates: Rates, duration: &RentalDuration, minimum_charge_hours: u32) -> PriceQuote {
    let hourly_rate = rates.effective_hourly();
    let billed_hours = duration.total_hours.max(f64::from(minimum_charge_hours));

    let whole_days = (billed_hours / 24.0).floor() as u32;
    let remainder_hours = (billed_hours % 24.0).ceil() as u32;

    let subtotal = u64::from(whole_days).saturating_mul(rates.daily);
    let hourly_charge = u64::from(remainder_hours).saturating_mul(hourly_rate);

    PriceQuote {
        daily_rate: rates.daily,
        hourly_rate,
        whole_days,
        remainder_hours,
        subtotal,
        hourly_charge,
        total: subtotal.saturating_add(hourly_charge),
    }
}
