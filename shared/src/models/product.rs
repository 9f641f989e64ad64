//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
///
/// The catalog snapshot the sale/return forms price against. A
/// `wholesale_price` that is absent or not strictly positive means the
/// product is not offered at the wholesale tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub retail_price: Decimal,
    pub wholesale_price: Option<Decimal>,
    /// Weight or unit of measure (e.g. "kg", "unidad")
    pub weight_unit: Option<String>,
    /// Category reference
    pub category: Option<i64>,
    /// Brand reference
    pub brand: Option<i64>,
    pub is_active: bool,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub retail_price: Decimal,
    pub wholesale_price: Option<Decimal>,
    pub weight_unit: Option<String>,
    pub category: Option<i64>,
    pub brand: Option<i64>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub retail_price: Option<Decimal>,
    pub wholesale_price: Option<Decimal>,
    pub weight_unit: Option<String>,
    pub category: Option<i64>,
    pub brand: Option<i64>,
    pub is_active: Option<bool>,
}

/// Product category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
}

/// Create/update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategoryPayload {
    pub name: String,
}

/// Product brand entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductBrand {
    pub id: i64,
    pub name: String,
}

/// Create/update brand payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductBrandPayload {
    pub name: String,
}
