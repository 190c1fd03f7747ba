//! # rental-quote
//!
//! Deterministic rental pricing from the date-range strings a booking UI
//! produces.
//!
//! Range strings such as `"13 Thg 11 | 6:00 SA - 19 Thg 11 | 9:00 SA"` or
//! `"Nov 13 | 6:00 AM - Nov 19 | 9:00 AM"` carry no year. The crate infers
//! the year from an injected [`Clock`], measures the rental and prices it
//! from a daily rate, an optional hourly rate and a minimum charge.
//!
//! ## Modules
//!
//! - [`token`] — One Vietnamese or English date-time token → calendar fields
//! - [`range`] — Range splitting, no-selection detection, year rollover
//! - [`duration`] — Day/hour display duration of a resolved range
//! - [`pricing`] — Billed total with day/hour breakdown
//! - [`format`] — vi-VN duration, currency and receipt strings
//! - [`quote`] — Entry points combining all of the above, strict and fail-safe
//! - [`clock`] — The injectable "today" anchor
//! - [`error`] — Error types

pub mod clock;
pub mod duration;
pub mod error;
pub mod format;
pub mod pricing;
pub mod quote;
pub mod range;
pub mod token;

pub use clock::{Clock, FixedClock, SystemClock};
pub use duration::RentalDuration;
pub use error::QuoteError;
pub use pricing::{price, PriceQuote, Rates, DEFAULT_MINIMUM_CHARGE_HOURS};
pub use quote::{
    quote_or_unavailable, quote_rental, quote_rental_with_options, rental_duration,
    rental_duration_or_default, rental_duration_with_options, QuoteOptions,
};
pub use range::{is_no_selection, parse_range, DateRange};
pub use token::{parse_token, try_parse_token, ResolvedInstant};
