//! Statistics Model
//!
//! Shape of `/sales/statistics/`: per-period aggregates for the
//! dashboard cards and breakdown charts. Computed server-side; the
//! client only renders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sales volume of one product within a period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductBreakdown {
    /// Product reference
    pub product: i64,
    pub product_name: String,
    pub quantity: Decimal,
    pub revenue: Decimal,
}

/// Aggregates for one period (a day or a month, per the filter)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsEntry {
    /// Period label (YYYY-MM-DD for daily, YYYY-MM for monthly)
    pub period: String,
    pub sales_count: i64,
    pub revenue: Decimal,
    pub expenses: Decimal,
    pub profit: Decimal,
    #[serde(default)]
    pub top_products: Vec<ProductBreakdown>,
}

/// Statistics response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub statistics: Vec<StatisticsEntry>,
}
