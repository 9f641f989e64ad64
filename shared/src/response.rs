//! API response types
//!
//! The PanaSystem API is DRF-style: list endpoints answer either a bare
//! array or a `{ count, results }` page, and validation failures answer
//! a map of field name to message list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One page of a paginated listing (`?offset=&limit=`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages
    pub count: u64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Number of pages at the given page size (0 sizes yield 0 pages)
    pub fn total_pages(&self, per_page: u64) -> u64 {
        if per_page == 0 {
            0
        } else {
            self.count.div_ceil(per_page)
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            results: Vec::new(),
        }
    }
}

/// Validation error body: field name to list of messages
///
/// `{"sale_details": ["Este campo es requerido."], "customer": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody(pub BTreeMap<String, Vec<String>>);

impl ApiErrorBody {
    /// Flatten all field messages into one user-facing string
    pub fn messages(&self) -> String {
        self.0
            .values()
            .flatten()
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_total_pages() {
        let page: Page<i64> = Page {
            count: 45,
            results: vec![],
        };
        assert_eq!(page.total_pages(10), 5);
        assert_eq!(page.total_pages(0), 0);
    }

    #[test]
    fn test_error_body_flattens_messages() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"customer": ["Este campo es requerido."], "detail": ["Cantidad inválida."]}"#,
        )
        .unwrap();
        assert_eq!(
            body.messages(),
            "Este campo es requerido. Cantidad inválida."
        );
    }
}
