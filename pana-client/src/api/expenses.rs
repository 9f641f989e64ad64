//! Expenses API (including categories and suppliers)

use shared::models::{
    Expense, ExpenseCategory, ExpenseCategoryPayload, ExpenseCreate, ExpenseUpdate, Supplier,
    SupplierPayload,
};

use crate::api::QueryParams;
use crate::{ClientResult, HttpClient};

#[derive(Debug, Clone, Default)]
pub struct ExpenseFilters {
    pub category: Option<i64>,
    pub supplier: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl QueryParams for ExpenseFilters {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = self.category {
            params.push(("category", category.to_string()));
        }
        if let Some(supplier) = self.supplier {
            params.push(("supplier", supplier.to_string()));
        }
        if let Some(start_date) = &self.start_date {
            params.push(("start_date", start_date.clone()));
        }
        if let Some(end_date) = &self.end_date {
            params.push(("end_date", end_date.clone()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(ordering) = &self.ordering {
            params.push(("ordering", ordering.clone()));
        }
        params
    }
}

pub async fn list(client: &HttpClient, filters: &ExpenseFilters) -> ClientResult<Vec<Expense>> {
    client.get_query("expenses/", &filters.params()).await
}

pub async fn get(client: &HttpClient, id: i64) -> ClientResult<Expense> {
    client.get(&format!("expenses/{id}/")).await
}

pub async fn create(client: &HttpClient, expense: &ExpenseCreate) -> ClientResult<Expense> {
    client.post("expenses/", expense).await
}

pub async fn update(client: &HttpClient, id: i64, expense: &ExpenseUpdate) -> ClientResult<Expense> {
    client.put(&format!("expenses/{id}/"), expense).await
}

pub async fn delete(client: &HttpClient, id: i64) -> ClientResult<()> {
    client.delete(&format!("expenses/{id}/")).await
}

// ========== Categories ==========

pub async fn list_categories(client: &HttpClient) -> ClientResult<Vec<ExpenseCategory>> {
    client.get("expenses/categories/").await
}

pub async fn create_category(
    client: &HttpClient,
    category: &ExpenseCategoryPayload,
) -> ClientResult<ExpenseCategory> {
    client.post("expenses/categories/", category).await
}

pub async fn update_category(
    client: &HttpClient,
    id: i64,
    category: &ExpenseCategoryPayload,
) -> ClientResult<ExpenseCategory> {
    client.put(&format!("expenses/categories/{id}/"), category).await
}

pub async fn delete_category(client: &HttpClient, id: i64) -> ClientResult<()> {
    client.delete(&format!("expenses/categories/{id}/")).await
}

// ========== Suppliers ==========

pub async fn list_suppliers(client: &HttpClient) -> ClientResult<Vec<Supplier>> {
    client.get("suppliers/").await
}

pub async fn create_supplier(
    client: &HttpClient,
    supplier: &SupplierPayload,
) -> ClientResult<Supplier> {
    client.post("suppliers/", supplier).await
}

pub async fn update_supplier(
    client: &HttpClient,
    id: i64,
    supplier: &SupplierPayload,
) -> ClientResult<Supplier> {
    client.put(&format!("suppliers/{id}/"), supplier).await
}

pub async fn delete_supplier(client: &HttpClient, id: i64) -> ClientResult<()> {
    client.delete(&format!("suppliers/{id}/")).await
}
