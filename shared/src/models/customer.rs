//! Customer Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{SaleType, Weekday};

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    /// Default pricing tier applied when creating sales for this customer
    pub customer_type: SaleType,
    pub notes: Option<String>,
    pub is_active: bool,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub customer_type: Option<SaleType>,
    pub notes: Option<String>,
}

/// Update customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub customer_type: Option<SaleType>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}

/// One product/quantity row of a standing order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingOrderDetail {
    /// Product reference
    pub product: i64,
    pub quantity: Decimal,
}

/// Standing order entity
///
/// A customer's recurring daily order: at most one per weekday, copied
/// into a real sale by the delivery workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingOrder {
    pub id: i64,
    /// Customer reference
    pub customer: i64,
    pub day_of_week: Weekday,
    pub details: Vec<StandingOrderDetail>,
}

/// Create/update standing order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingOrderPayload {
    pub customer: i64,
    pub day_of_week: Weekday,
    pub details: Vec<StandingOrderDetail>,
}
