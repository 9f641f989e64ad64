//! Returns API

use shared::models::{Return, ReturnCreate, ReturnUpdate};

use crate::api::QueryParams;
use crate::{ClientResult, HttpClient};

#[derive(Debug, Clone, Default)]
pub struct ReturnFilters {
    pub customer: Option<i64>,
    pub date: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl QueryParams for ReturnFilters {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(customer) = self.customer {
            params.push(("customer", customer.to_string()));
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
        params
    }
}

pub async fn list(client: &HttpClient, filters: &ReturnFilters) -> ClientResult<Vec<Return>> {
    client.get_query("returns/", &filters.params()).await
}

pub async fn get(client: &HttpClient, id: i64) -> ClientResult<Return> {
    client.get(&format!("returns/{id}/")).await
}

pub async fn create(client: &HttpClient, ret: &ReturnCreate) -> ClientResult<Return> {
    client.post("returns/", ret).await
}

pub async fn update(client: &HttpClient, id: i64, ret: &ReturnUpdate) -> ClientResult<Return> {
    client.put(&format!("returns/{id}/"), ret).await
}

pub async fn delete(client: &HttpClient, id: i64) -> ClientResult<()> {
    client.delete(&format!("returns/{id}/")).await
}
