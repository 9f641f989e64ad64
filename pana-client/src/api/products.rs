//! Products API (catalog, categories, brands)

use shared::models::{
    Product, ProductBrand, ProductBrandPayload, ProductCategory, ProductCategoryPayload,
    ProductCreate, ProductUpdate,
};
use shared::response::Page;

use crate::api::QueryParams;
use crate::{ClientResult, HttpClient};

/// Limit used to pull the whole catalog for the sale/return selectors
const CATALOG_LIMIT: u32 = 100_000;

#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    pub search: Option<String>,
    pub category: Option<i64>,
    pub brand: Option<i64>,
    pub ordering: Option<String>,
}

impl QueryParams for ProductFilters {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(category) = self.category {
            params.push(("category", category.to_string()));
        }
        if let Some(brand) = self.brand {
            params.push(("brand", brand.to_string()));
        }
        if let Some(ordering) = &self.ordering {
            params.push(("ordering", ordering.clone()));
        }
        params
    }
}

/// List one page of products
pub async fn list(
    client: &HttpClient,
    filters: &ProductFilters,
    offset: u32,
    limit: u32,
) -> ClientResult<Page<Product>> {
    let mut params = filters.params();
    params.push(("offset", offset.to_string()));
    params.push(("limit", limit.to_string()));
    client.get_query("products/", &params).await
}

/// Fetch the full catalog snapshot for a form session
pub async fn catalog(client: &HttpClient) -> ClientResult<Vec<Product>> {
    let page = list(client, &ProductFilters::default(), 0, CATALOG_LIMIT).await?;
    Ok(page.results)
}

pub async fn get(client: &HttpClient, id: i64) -> ClientResult<Product> {
    client.get(&format!("products/{id}/")).await
}

pub async fn create(client: &HttpClient, product: &ProductCreate) -> ClientResult<Product> {
    client.post("products/", product).await
}

pub async fn update(client: &HttpClient, id: i64, product: &ProductUpdate) -> ClientResult<Product> {
    client.put(&format!("products/{id}/"), product).await
}

pub async fn delete(client: &HttpClient, id: i64) -> ClientResult<()> {
    client.delete(&format!("products/{id}/")).await
}

// ========== Categories ==========

pub async fn list_categories(client: &HttpClient) -> ClientResult<Vec<ProductCategory>> {
    client.get("products/categories/").await
}

pub async fn create_category(
    client: &HttpClient,
    category: &ProductCategoryPayload,
) -> ClientResult<ProductCategory> {
    client.post("products/categories/", category).await
}

pub async fn update_category(
    client: &HttpClient,
    id: i64,
    category: &ProductCategoryPayload,
) -> ClientResult<ProductCategory> {
    client.put(&format!("products/categories/{id}/"), category).await
}

pub async fn delete_category(client: &HttpClient, id: i64) -> ClientResult<()> {
    client.delete(&format!("products/categories/{id}/")).await
}

// ========== Brands ==========

pub async fn list_brands(client: &HttpClient) -> ClientResult<Vec<ProductBrand>> {
    client.get("products/brands/").await
}

pub async fn create_brand(
    client: &HttpClient,
    brand: &ProductBrandPayload,
) -> ClientResult<ProductBrand> {
    client.post("products/brands/", brand).await
}

pub async fn update_brand(
    client: &HttpClient,
    id: i64,
    brand: &ProductBrandPayload,
) -> ClientResult<ProductBrand> {
    client.put(&format!("products/brands/{id}/"), brand).await
}

pub async fn delete_brand(client: &HttpClient, id: i64) -> ClientResult<()> {
    client.delete(&format!("products/brands/{id}/")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_serialize_set_fields_only() {
        let filters = ProductFilters {
            search: Some("pan".to_string()),
            brand: Some(4),
            ..ProductFilters::default()
        };
        assert_eq!(
            filters.params(),
            vec![("search", "pan".to_string()), ("brand", "4".to_string())]
        );
    }
}
