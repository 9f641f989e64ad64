//! Return Model
//!
//! Returns mirror sales without payment or delivery data: a customer
//! hands product back and the document records what and how much.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced line of a persisted return
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnDetail {
    /// Product reference
    pub product: i64,
    pub quantity: Decimal,
    pub price: Decimal,
    pub subtotal: Decimal,
}

/// Return entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Return {
    pub id: i64,
    /// Customer reference
    pub customer: i64,
    /// Business date (YYYY-MM-DD)
    pub date: String,
    pub total: Decimal,
    #[serde(default)]
    pub return_details: Vec<ReturnDetail>,
}

/// One line of a return creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnDetailCreate {
    pub product: i64,
    pub quantity: Decimal,
}

/// Create return payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnCreate {
    pub customer: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub return_details: Vec<ReturnDetailCreate>,
}

/// Update return payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReturnUpdate {
    pub customer: Option<i64>,
    pub date: Option<String>,
    pub return_details: Option<Vec<ReturnDetailCreate>>,
}
