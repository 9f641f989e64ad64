//! Customers API (including standing orders)

use shared::models::{
    Customer, CustomerCreate, CustomerUpdate, StandingOrder, StandingOrderPayload,
};

use crate::api::QueryParams;
use crate::{ClientResult, HttpClient};

#[derive(Debug, Clone, Default)]
pub struct CustomerFilters {
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl QueryParams for CustomerFilters {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(ordering) = &self.ordering {
            params.push(("ordering", ordering.clone()));
        }
        params
    }
}

pub async fn list(client: &HttpClient, filters: &CustomerFilters) -> ClientResult<Vec<Customer>> {
    client.get_query("customers/", &filters.params()).await
}

pub async fn get(client: &HttpClient, id: i64) -> ClientResult<Customer> {
    client.get(&format!("customers/{id}/")).await
}

pub async fn create(client: &HttpClient, customer: &CustomerCreate) -> ClientResult<Customer> {
    client.post("customers/", customer).await
}

pub async fn update(
    client: &HttpClient,
    id: i64,
    customer: &CustomerUpdate,
) -> ClientResult<Customer> {
    client.put(&format!("customers/{id}/"), customer).await
}

pub async fn delete(client: &HttpClient, id: i64) -> ClientResult<()> {
    client.delete(&format!("customers/{id}/")).await
}

// ========== Standing Orders ==========

/// Recurring daily orders of one customer (at most one per weekday)
pub async fn standing_orders(
    client: &HttpClient,
    customer: i64,
) -> ClientResult<Vec<StandingOrder>> {
    client
        .get(&format!("customers/{customer}/standing-orders/"))
        .await
}

pub async fn create_standing_order(
    client: &HttpClient,
    order: &StandingOrderPayload,
) -> ClientResult<StandingOrder> {
    client
        .post(
            &format!("customers/{}/standing-orders/", order.customer),
            order,
        )
        .await
}

pub async fn update_standing_order(
    client: &HttpClient,
    id: i64,
    order: &StandingOrderPayload,
) -> ClientResult<StandingOrder> {
    client
        .put(
            &format!("customers/{}/standing-orders/{id}/", order.customer),
            order,
        )
        .await
}

pub async fn delete_standing_order(
    client: &HttpClient,
    customer: i64,
    id: i64,
) -> ClientResult<()> {
    client
        .delete(&format!("customers/{customer}/standing-orders/{id}/"))
        .await
}
