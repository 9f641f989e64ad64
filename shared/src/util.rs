//! Date and display helpers

use chrono::{DateTime, Local, SecondsFormat};
use rust_decimal::{Decimal, RoundingStrategy};

/// Today's business date in the local timezone (YYYY-MM-DD)
pub fn today_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Format a timestamp the way the API expects sale dates:
/// RFC 3339 with milliseconds and numeric offset.
pub fn format_date_iso(date: DateTime<Local>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, false)
}

/// Round an amount to 2 decimal places for display.
///
/// Pricing keeps full precision; rounding happens only here, at the
/// presentation edge (half-up, matching receipt arithmetic).
pub fn display_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_amount_rounds_half_up() {
        assert_eq!(
            display_amount("32.9967".parse().unwrap()),
            "33.00".parse::<Decimal>().unwrap()
        );
        assert_eq!(
            display_amount("2.005".parse().unwrap()),
            "2.01".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_format_date_iso_keeps_millis_and_offset() {
        // e.g. 2026-08-28T10:21:33.123-03:00
        let formatted = format_date_iso(Local::now());
        assert_eq!(&formatted[10..11], "T");
        assert_eq!(&formatted[19..20], ".");
        assert_eq!(&formatted[formatted.len() - 3..formatted.len() - 2], ":");
    }

    #[test]
    fn test_today_date_shape() {
        let date = today_date();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], "-");
        assert_eq!(&date[7..8], "-");
    }
}
