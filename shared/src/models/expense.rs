//! Expense Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expense entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: Decimal,
    /// Business date (YYYY-MM-DD)
    pub date: String,
    pub description: Option<String>,
    /// Expense category reference
    pub category: Option<i64>,
    /// Supplier reference
    pub supplier: Option<i64>,
}

/// Create expense payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub description: Option<String>,
    pub category: Option<i64>,
    pub supplier: Option<i64>,
}

/// Update expense payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    pub amount: Option<Decimal>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub category: Option<i64>,
    pub supplier: Option<i64>,
}

/// Expense category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Create/update expense category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCategoryPayload {
    pub name: String,
    pub description: Option<String>,
}

/// Supplier entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Create/update supplier payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierPayload {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}
