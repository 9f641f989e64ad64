//! Sale Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{PaymentMethod, SaleState, SaleType};

/// One priced line of a persisted sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDetail {
    /// Product reference
    pub product: i64,
    pub quantity: Decimal,
    /// Unit price resolved at creation time from (product, sale_type)
    pub price: Decimal,
    pub subtotal: Decimal,
}

/// Sale entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    /// Customer reference
    pub customer: i64,
    /// RFC 3339 timestamp
    pub date: String,
    pub sale_type: SaleType,
    pub payment_method: PaymentMethod,
    pub state: SaleState,
    pub needs_delivery: bool,
    pub total: Decimal,
    /// Empty for fast (total-only) sales
    #[serde(default)]
    pub sale_details: Vec<SaleDetail>,
}

/// One line of a sale creation payload (server re-resolves prices)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDetailCreate {
    pub product: i64,
    pub quantity: Decimal,
}

/// Create sale payload (with line details)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub customer: i64,
    pub sale_type: SaleType,
    pub needs_delivery: bool,
    pub sale_details: Vec<SaleDetailCreate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

/// Create fast sale payload (total only, no line details)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastSaleCreate {
    pub customer: i64,
    pub sale_type: SaleType,
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

/// Update sale payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleUpdate {
    pub customer: Option<i64>,
    pub sale_type: Option<SaleType>,
    pub payment_method: Option<PaymentMethod>,
    pub state: Option<SaleState>,
    pub needs_delivery: Option<bool>,
    pub date: Option<String>,
    pub sale_details: Option<Vec<SaleDetailCreate>>,
}
