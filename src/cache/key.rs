use crate::models::{SortBy, SortOrder};

/// Canonical descriptor of one article-list request.
///
/// Two queries are the same cache entry iff every field matches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub category: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

impl ListQuery {
    pub fn new(page: u32, per_page: u32, category: Option<String>) -> Self {
        Self {
            page,
            per_page,
            category,
            sort_by: None,
            sort_order: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum QueryKey {
    Articles(ListQuery),
    Categories,
}

impl QueryKey {
    pub fn is_articles(&self) -> bool {
        matches!(self, QueryKey::Articles(_))
    }

    pub fn is_categories(&self) -> bool {
        matches!(self, QueryKey::Categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_queries_are_the_same_key() {
        let a = QueryKey::Articles(ListQuery::new(1, 9, Some("Backend".into())));
        let b = QueryKey::Articles(ListQuery::new(1, 9, Some("Backend".into())));
        assert_eq!(a, b);
    }

    #[test]
    fn any_field_difference_is_a_distinct_key() {
        let base = ListQuery::new(1, 9, None);
        let page2 = ListQuery { page: 2, ..base.clone() };
        let filtered = ListQuery {
            category: Some("Backend".into()),
            ..base.clone()
        };
        assert_ne!(QueryKey::Articles(base.clone()), QueryKey::Articles(page2));
        assert_ne!(QueryKey::Articles(base), QueryKey::Articles(filtered));
    }
}
