//! One entry point for every place that needs a rental duration or price.
//!
//! The strict functions return a [`Result`]. The `_or_default` /
//! `_or_unavailable` variants never fail: they log the error and degrade to
//! the one-day default or to "no quote", so a bad selection never blocks
//! the caller.
//!
//! The no-selection sentinel (an empty string or a UI placeholder such as
//! `"Chọn Ngày"`) short-circuits before any parsing.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::duration::RentalDuration;
use crate::error::Result;
use crate::pricing::{price, PriceQuote, Rates, DEFAULT_MINIMUM_CHARGE_HOURS};
use crate::range::{is_no_selection, parse_range, PLACEHOLDER_EN, PLACEHOLDER_VI};

/// Options shared by all quoting call sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteOptions {
    /// Rentals shorter than this are billed as if this long.
    pub minimum_charge_hours: u32,
    /// Inputs treated as "no range selected" (compared trimmed, case-insensitively).
    pub no_selection_placeholders: Vec<String>,
}

impl Default for QuoteOptions {
    fn default() -> Self {
        Self {
            minimum_charge_hours: DEFAULT_MINIMUM_CHARGE_HOURS,
            no_selection_placeholders: vec![PLACEHOLDER_VI.to_string(), PLACEHOLDER_EN.to_string()],
        }
    }
}

// ── Duration ────────────────────────────────────────────────────────────────

/// Measure a range string with default options.
///
/// # Errors
///
/// Propagates the [`QuoteError`](crate::QuoteError) from range parsing.
pub fn rental_duration<C: Clock + ?Sized>(input: &str, clock: &C) -> Result<RentalDuration> {
    rental_duration_with_options(input, clock, &QuoteOptions::default())
}

/// Measure a range string. The no-selection sentinel yields one day.
pub fn rental_duration_with_options<C: Clock + ?Sized>(
    input: &str,
    clock: &C,
    options: &QuoteOptions,
) -> Result<RentalDuration> {
    if is_no_selection(input, &options.no_selection_placeholders) {
        return Ok(RentalDuration::one_day());
    }
    let range = parse_range(input, &clock.today())?;
    Ok(RentalDuration::of(&range))
}

/// Like [`rental_duration_with_options`], but falls back to one day on error.
pub fn rental_duration_or_default<C: Clock + ?Sized>(
    input: &str,
    clock: &C,
    options: &QuoteOptions,
) -> RentalDuration {
    rental_duration_with_options(input, clock, options).unwrap_or_else(|e| {
        tracing::warn!(input, error = %e, "unparseable rental range, using one day");
        RentalDuration::one_day()
    })
}

// ── Price ───────────────────────────────────────────────────────────────────

/// Quote a range string with default options.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rental_quote::{quote_rental, FixedClock, Rates};
///
/// let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
/// let input = "Nov 13 | 6:00 AM - Nov 19 | 9:00 AM";
/// let quote = quote_rental(input, Rates::daily(180_000), &clock).unwrap();
/// assert_eq!(quote.total, 1_102_500);
/// ```
///
/// # Errors
///
/// Propagates the [`QuoteError`](crate::QuoteError) from range parsing.
pub fn quote_rental<C: Clock + ?Sized>(input: &str, rates: Rates, clock: &C) -> Result<PriceQuote> {
    quote_rental_with_options(input, rates, clock, &QuoteOptions::default())
}

/// Quote a range string. The no-selection sentinel yields [`PriceQuote::flat_day`].
pub fn quote_rental_with_options<C: Clock + ?Sized>(
    input: &str,
    rates: Rates,
    clock: &C,
    options: &QuoteOptions,
) -> Result<PriceQuote> {
    if is_no_selection(input, &options.no_selection_placeholders) {
        return Ok(PriceQuote::flat_day(rates));
    }
    let range = parse_range(input, &clock.today())?;
    let quote = price(rates, &RentalDuration::of(&range), options.minimum_charge_hours);
    tracing::debug!(
        daily_rate = rates.daily,
        whole_days = quote.whole_days,
        remainder_hours = quote.remainder_hours,
        total = quote.total,
        "priced rental"
    );
    Ok(quote)
}

/// Like [`quote_rental_with_options`], but returns `None` on error.
///
/// Callers show the plain per-day label ([`crate::format::format_daily_rate`])
/// when this is `None`.
pub fn quote_or_unavailable<C: Clock + ?Sized>(
    input: &str,
    rates: Rates,
    clock: &C,
    options: &QuoteOptions,
) -> Option<PriceQuote> {
    match quote_rental_with_options(input, rates, clock, options) {
        Ok(quote) => Some(quote),
        Err(e) => {
            tracing::warn!(input, error = %e, "unparseable rental range, quote unavailable");
            None
        }
    }
}
