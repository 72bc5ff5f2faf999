use crate::cache::ListQuery;

/// Immutable navigation state for the reader list, derived from the URL
/// query string so it survives reload and is shareable.
///
/// Every change produces a new value (pushed back to the router); nothing
/// here is mutated in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ListNav {
    pub category: Option<String>,
    pub page: u32,
}

impl ListNav {
    /// Builds the state from raw `category`/`page` query parameters.
    ///
    /// Missing, empty, or unparseable `page` values (including 0) fall back
    /// to page 1; an empty `category` means "no filter".
    pub fn from_parts(category: Option<String>, page: Option<String>) -> Self {
        let category = category.filter(|c| !c.is_empty());
        let page = page
            .and_then(|p| p.parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        Self { category, page }
    }

    /// Switching the filter invalidates the meaning of "page N": the new
    /// state always starts at page 1.
    pub fn with_category(&self, category: Option<String>) -> Self {
        Self {
            category: category.filter(|c| !c.is_empty()),
            page: 1,
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            category: self.category.clone(),
            page,
        }
    }

    /// Serializes back into a query-string suffix for router navigation.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(format!("category={}", urlencoding::encode(category)));
        }
        pairs.push(format!("page={}", self.page));
        format!("?{}", pairs.join("&"))
    }

    /// The article-list query this navigation state stands for.
    pub fn list_query(&self, per_page: u32) -> ListQuery {
        ListQuery::new(self.page, per_page, self.category.clone())
    }
}

impl Default for ListNav {
    fn default() -> Self {
        Self {
            category: None,
            page: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_default_to_first_unfiltered_page() {
        let nav = ListNav::from_parts(None, None);
        assert_eq!(nav, ListNav::default());
    }

    #[test]
    fn page_is_parsed_and_clamped_to_one_based() {
        assert_eq!(ListNav::from_parts(None, Some("3".into())).page, 3);
        assert_eq!(ListNav::from_parts(None, Some("0".into())).page, 1);
        assert_eq!(ListNav::from_parts(None, Some("junk".into())).page, 1);
    }

    #[test]
    fn empty_category_means_no_filter() {
        let nav = ListNav::from_parts(Some(String::new()), None);
        assert!(nav.category.is_none());
    }

    #[test]
    fn category_change_resets_page() {
        let nav = ListNav {
            category: None,
            page: 3,
        };
        let filtered = nav.with_category(Some("Backend".into()));
        assert_eq!(filtered.category.as_deref(), Some("Backend"));
        assert_eq!(filtered.page, 1);

        // Clearing the filter is also a filter change.
        let cleared = filtered.with_page(2).with_category(None);
        assert_eq!(cleared.page, 1);
        assert!(cleared.category.is_none());
    }

    #[test]
    fn page_change_keeps_category() {
        let nav = ListNav {
            category: Some("Backend".into()),
            page: 1,
        };
        let next = nav.with_page(2);
        assert_eq!(next.category.as_deref(), Some("Backend"));
        assert_eq!(next.page, 2);
    }

    #[test]
    fn query_string_roundtrip() {
        let nav = ListNav {
            category: Some("Web Dev".into()),
            page: 2,
        };
        assert_eq!(nav.to_query_string(), "?category=Web%20Dev&page=2");

        let unfiltered = ListNav::default();
        assert_eq!(unfiltered.to_query_string(), "?page=1");
    }

    #[test]
    fn list_query_carries_nav_state() {
        let nav = ListNav {
            category: Some("Backend".into()),
            page: 2,
        };
        let q = nav.list_query(9);
        assert_eq!(q.page, 2);
        assert_eq!(q.per_page, 9);
        assert_eq!(q.category.as_deref(), Some("Backend"));
    }
}
