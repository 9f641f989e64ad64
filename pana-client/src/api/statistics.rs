//! Statistics API
//!
//! Administrator-only aggregates behind the dashboard cards and
//! charts. A non-admin session gets `ClientError::Forbidden`, which
//! the screens surface as a permissions message rather than a generic
//! load failure.

use shared::models::Statistics;

use crate::api::QueryParams;
use crate::{ClientResult, HttpClient};

/// Aggregation granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Daily,
    Monthly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatisticsFilters {
    pub period: Option<Period>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl QueryParams for StatisticsFilters {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(period) = self.period {
            params.push(("period", period.as_str().to_string()));
        }
        if let Some(start_date) = &self.start_date {
            params.push(("start_date", start_date.clone()));
        }
        if let Some(end_date) = &self.end_date {
            params.push(("end_date", end_date.clone()));
        }
        params
    }
}

pub async fn fetch(client: &HttpClient, filters: &StatisticsFilters) -> ClientResult<Statistics> {
    client
        .get_query("sales/statistics/", &filters.params())
        .await
}
