//! Sales API

use rust_decimal::Decimal;
use shared::models::{FastSaleCreate, Sale, SaleCreate, SaleUpdate};
use shared::types::{SaleState, SaleType};

use crate::api::QueryParams;
use crate::{ClientResult, HttpClient};

/// Filters of the sales listing and the delivery/collect screens
#[derive(Debug, Clone, Default)]
pub struct SaleFilters {
    pub state: Option<SaleState>,
    /// Exact business date (YYYY-MM-DD)
    pub date: Option<String>,
    pub search: Option<String>,
    /// Sort field, "-" prefix for descending (e.g. "-date")
    pub ordering: Option<String>,
    pub sale_type: Option<SaleType>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_total: Option<Decimal>,
    pub max_total: Option<Decimal>,
    pub needs_delivery: Option<bool>,
    pub customer: Option<i64>,
}

impl SaleFilters {
    /// Filters of the pending-deliveries screen for one business date
    pub fn pending_deliveries(date: impl Into<String>) -> Self {
        Self {
            state: Some(SaleState::PendienteEntrega),
            needs_delivery: Some(true),
            date: Some(date.into()),
            ..Self::default()
        }
    }
}

impl QueryParams for SaleFilters {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(state) = self.state {
            params.push(("state", state.to_string()));
        }
        if let Some(date) = &self.date {
            params.push(("date", date.clone()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(ordering) = &self.ordering {
            params.push(("ordering", ordering.clone()));
        }
        if let Some(sale_type) = self.sale_type {
            params.push(("sale_type", sale_type.to_string()));
        }
        if let Some(start_date) = &self.start_date {
            params.push(("start_date", start_date.clone()));
        }
        if let Some(end_date) = &self.end_date {
            params.push(("end_date", end_date.clone()));
        }
        if let Some(min_total) = self.min_total {
            params.push(("min_total", min_total.to_string()));
        }
        if let Some(max_total) = self.max_total {
            params.push(("max_total", max_total.to_string()));
        }
        if let Some(needs_delivery) = self.needs_delivery {
            params.push(("needs_delivery", needs_delivery.to_string()));
        }
        if let Some(customer) = self.customer {
            params.push(("customer", customer.to_string()));
        }
        params
    }
}

pub async fn list(client: &HttpClient, filters: &SaleFilters) -> ClientResult<Vec<Sale>> {
    client.get_query("sales/", &filters.params()).await
}

pub async fn get(client: &HttpClient, id: i64) -> ClientResult<Sale> {
    client.get(&format!("sales/{id}/")).await
}

/// Create a sale with line details; the server resolves prices from
/// the same (product, sale_type) rule the form previews with.
pub async fn create(client: &HttpClient, sale: &SaleCreate) -> ClientResult<Sale> {
    client.post("sales/", sale).await
}

/// Create a fast sale: a total with no line details
pub async fn create_fast(client: &HttpClient, sale: &FastSaleCreate) -> ClientResult<Sale> {
    client.post("sales/", sale).await
}

pub async fn update(client: &HttpClient, id: i64, sale: &SaleUpdate) -> ClientResult<Sale> {
    client.put(&format!("sales/{id}/"), sale).await
}

/// Cancel a sale (any non-cancelled state)
pub async fn cancel(client: &HttpClient, id: i64) -> ClientResult<Sale> {
    client.post_empty(&format!("sales/{id}/cancel/")).await
}

/// Mark a pending-delivery sale as delivered
pub async fn mark_delivered(client: &HttpClient, id: i64) -> ClientResult<Sale> {
    client.post_empty(&format!("sales/{id}/deliver/")).await
}

/// Mark a delivered current-account sale as collected
pub async fn mark_collected(client: &HttpClient, id: i64) -> ClientResult<Sale> {
    client.post_empty(&format!("sales/{id}/collect/")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_produce_no_params() {
        assert!(SaleFilters::default().params().is_empty());
    }

    #[test]
    fn test_set_fields_only_appear_in_query() {
        let filters = SaleFilters {
            state: Some(SaleState::Cobrada),
            sale_type: Some(SaleType::Mayorista),
            min_total: Some("150.50".parse().unwrap()),
            ..SaleFilters::default()
        };
        assert_eq!(
            filters.params(),
            vec![
                ("state", "cobrada".to_string()),
                ("sale_type", "mayorista".to_string()),
                ("min_total", "150.50".to_string()),
            ]
        );
    }

    #[test]
    fn test_pending_deliveries_preset() {
        let params = SaleFilters::pending_deliveries("2026-08-28").params();
        assert!(params.contains(&("state", "pendiente_entrega".to_string())));
        assert!(params.contains(&("needs_delivery", "true".to_string())));
        assert!(params.contains(&("date", "2026-08-28".to_string())));
    }
}
