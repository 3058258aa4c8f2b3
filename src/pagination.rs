//! Page selection for list endpoints.

use serde::{Deserialize, Serialize};

/// Which page of a list endpoint to fetch.
///
/// Unset fields are left out of the query so Discogs applies its own
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Items per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Sort key, e.g. `year`, `title` or `format`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Sort direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Value of the `sort_order` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl Pagination {
    /// Select a page and page size.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            ..Default::default()
        }
    }

    /// Sort by `key` in the given direction.
    pub fn sorted_by<S: Into<String>>(mut self, key: S, order: SortOrder) -> Self {
        self.sort = Some(key.into());
        self.sort_order = Some(order);
        self
    }

    /// Query parameters for this selection.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(sort) = self.sort.as_deref().filter(|s| !s.is_empty()) {
            params.push(("sort", sort.to_string()));
        }
        if let Some(order) = self.sort_order {
            params.push(("sort_order", order.as_str().to_string()));
        }
        params
    }
}

/// Query parameters for an optional selection; `None` yields nothing.
pub(crate) fn params(pagination: Option<&Pagination>) -> Vec<(&'static str, String)> {
    pagination.map(Pagination::params).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_and_per_page() {
        let params = Pagination::new(2, 50).params();
        assert_eq!(
            params,
            vec![("page", "2".to_string()), ("per_page", "50".to_string())]
        );
    }

    #[test]
    fn test_absent_fields_omitted() {
        assert!(Pagination::default().params().is_empty());
        assert!(params(None).is_empty());

        let only_page = Pagination {
            page: Some(3),
            ..Default::default()
        };
        assert_eq!(only_page.params(), vec![("page", "3".to_string())]);
    }

    #[test]
    fn test_sorting() {
        let params = Pagination::new(1, 10)
            .sorted_by("year", SortOrder::Desc)
            .params();
        assert!(params.contains(&("sort", "year".to_string())));
        assert!(params.contains(&("sort_order", "desc".to_string())));
    }

    #[test]
    fn test_empty_sort_key_skipped() {
        let pagination = Pagination {
            sort: Some(String::new()),
            ..Default::default()
        };
        assert!(pagination.params().is_empty());
    }
}
