//! Quantity validation
//!
//! Quantities arrive as raw input strings. A quantity is usable only if
//! it is a plain decimal within the flow's precision and strictly
//! positive; anything else contributes nothing to the total.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

static SALE_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").unwrap());

static RETURN_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{1,3})?$").unwrap());

/// Decimal precision accepted by a document flow
///
/// Sales accept 2 decimal places, returns 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantityFormat {
    #[default]
    Sale,
    Return,
}

impl QuantityFormat {
    fn pattern(&self) -> &Regex {
        match self {
            QuantityFormat::Sale => &SALE_QUANTITY,
            QuantityFormat::Return => &RETURN_QUANTITY,
        }
    }

    /// Parse a raw quantity string, yielding `None` unless it matches
    /// the pattern and is strictly positive.
    pub fn parse(&self, raw: &str) -> Option<Decimal> {
        if !self.pattern().is_match(raw) {
            return None;
        }
        raw.parse::<Decimal>()
            .ok()
            .filter(|quantity| *quantity > Decimal::ZERO)
    }

    pub fn is_valid(&self, raw: &str) -> bool {
        self.parse(raw).is_some()
    }
}
