//! Display strings for durations and prices (vi-VN).

use crate::duration::RentalDuration;
use crate::pricing::{PriceQuote, Rates};

/// Render a duration as `"<d> ngày <h> giờ"`, dropping zero parts.
///
/// ```
/// use rental_quote::{format::format_duration, RentalDuration};
///
/// assert_eq!(format_duration(&RentalDuration::from_hours(147.0)), "6 ngày 3 giờ");
/// assert_eq!(format_duration(&RentalDuration::from_hours(48.0)), "2 ngày");
/// assert_eq!(format_duration(&RentalDuration::from_hours(0.2)), "< 1 giờ");
/// ```
pub fn format_duration(duration: &RentalDuration) -> String {
    let mut parts = Vec::new();
    if duration.whole_days > 0 {
        parts.push(format!("{} ngày", duration.whole_days));
    }
    if duration.remainder_hours > 0 {
        parts.push(format!("{} giờ", duration.remainder_hours));
    }
    if parts.is_empty() {
        return "< 1 giờ".to_string();
    }
    parts.join(" ")
}

/// Render an amount as Vietnamese dong, e.g. `1.102.500 ₫`.
///
/// The space before the symbol is a non-breaking space, as in the vi-VN
/// currency format.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped.push('\u{a0}');
    grouped.push('₫');
    grouped
}

/// The plain per-day label shown when no quote is available.
pub fn format_daily_rate(daily: u64) -> String {
    format!("{}/ngày", format_currency(daily))
}

/// The total when a quote exists, otherwise the per-day label.
pub fn price_label(quote: Option<&PriceQuote>, rates: Rates) -> String {
    match quote {
        Some(q) => format_currency(q.total),
        None => format_daily_rate(rates.daily),
    }
}

/// A multi-line breakdown of a quote for receipt display.
pub fn format_receipt(quote: &PriceQuote) -> String {
    let mut lines = Vec::new();
    if quote.whole_days > 0 {
        lines.push(format!(
            "{} x {} ngày = {}",
            format_currency(quote.daily_rate),
            quote.whole_days,
            format_currency(quote.subtotal)
        ));
    }
    if quote.remainder_hours > 0 {
        lines.push(format!(
            "{} x {} giờ = {}",
            format_currency(quote.hourly_rate),
            quote.remainder_hours,
            format_currency(quote.hourly_charge)
        ));
    }
    lines.push(format!("Tổng cộng: {}", format_currency(quote.total)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::price;

    #[test]
    fn test_format_duration_parts() {
        assert_eq!(format_duration(&RentalDuration::from_hours(3.0)), "3 giờ");
        assert_eq!(format_duration(&RentalDuration::from_hours(24.0)), "1 ngày");
        assert_eq!(format_duration(&RentalDuration::from_hours(0.0)), "< 1 giờ");
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(0), "0\u{a0}₫");
        assert_eq!(format_currency(999), "999\u{a0}₫");
        assert_eq!(format_currency(7_500), "7.500\u{a0}₫");
        assert_eq!(format_currency(180_000), "180.000\u{a0}₫");
        assert_eq!(format_currency(1_102_500), "1.102.500\u{a0}₫");
        assert_eq!(format_currency(12_345_678_901), "12.345.678.901\u{a0}₫");
    }

    #[test]
    fn test_price_label_fallback() {
        let rates = Rates::daily(180_000);
        assert_eq!(price_label(None, rates), "180.000\u{a0}₫/ngày");
        let quote = price(rates, &RentalDuration::from_hours(147.0), 24);
        assert_eq!(price_label(Some(&quote), rates), "1.102.500\u{a0}₫");
    }

    #[test]
    fn test_format_receipt_snapshot() {
        let quote = price(Rates::daily(180_000), &RentalDuration::from_hours(147.0), 24);
        assert_eq!(
            format_receipt(&quote),
            "180.000\u{a0}₫ x 6 ngày = 1.080.000\u{a0}₫\n\
             7.500\u{a0}₫ x 3 giờ = 22.500\u{a0}₫\n\
             Tổng cộng: 1.102.500\u{a0}₫"
        );
    }

    #[test]
    fn test_format_receipt_days_only() {
        let quote = PriceQuote::flat_day(Rates::daily(180_000));
        assert_eq!(
            format_receipt(&quote),
            "180.000\u{a0}₫ x 1 ngày = 180.000\u{a0}₫\nTổng cộng: 180.000\u{a0}₫"
        );
    }
}
