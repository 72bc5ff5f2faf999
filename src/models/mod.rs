use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// An article as returned by the backend.
///
/// Timestamps are ISO-8601 strings; the backend owns them and the client
/// never writes `created_at`/`updated_at`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub published_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Article {
    /// Date shown on cards and in the detail overlay: `published_at`
    /// falling back to `created_at`.
    pub fn display_date(&self) -> &str {
        self.published_at.as_deref().unwrap_or(&self.created_at)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct PaginationMeta {
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct ArticleListResponse {
    pub data: Vec<Article>,
    pub meta: PaginationMeta,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct ArticleDetailResponse {
    pub data: Article,
}

/// Server-side aggregate: one row per distinct category with its count.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CategoryItem {
    pub name: String,
    pub article_count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CategoryListResponse {
    pub data: Vec<CategoryItem>,
}

/// Create/update payload.
///
/// Optional fields must be OMITTED when absent, never sent as empty strings.
/// The form controller normalizes "" to `None` before building this.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ArticleInput {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

/// Sort fields accepted by the list endpoint. The default views leave these
/// unset and take the server's ordering (created_at desc).
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum SortBy {
    CreatedAt,
    PublishedAt,
    Title,
}

#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum SortOrder {
    Asc,
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_list_response_contract_deserialize() {
        // Contract based on GET /articles.
        let json = r#"{
            "data": [{
                "id": 1,
                "title": "Intro to Rust",
                "content": "body",
                "author": "alice",
                "category": "Backend",
                "published_at": "2024-01-15T10:30:00",
                "created_at": "2024-01-10T09:00:00",
                "updated_at": "2024-01-10T09:00:00"
            }],
            "meta": {"total": 23, "page": 1, "per_page": 9, "total_pages": 3}
        }"#;
        let parsed: ArticleListResponse =
            serde_json::from_str(json).expect("list response should parse");
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].id, 1);
        assert_eq!(parsed.meta.total, 23);
        assert_eq!(parsed.meta.total_pages, 3);
    }

    #[test]
    fn article_nullable_fields_deserialize() {
        let json = r#"{
            "id": 2,
            "title": "Untagged",
            "content": "body",
            "author": null,
            "category": null,
            "published_at": null,
            "created_at": "2024-02-01T00:00:00",
            "updated_at": "2024-02-01T00:00:00"
        }"#;
        let a: Article = serde_json::from_str(json).expect("article should parse");
        assert!(a.author.is_none());
        assert!(a.category.is_none());
        assert_eq!(a.display_date(), "2024-02-01T00:00:00");
    }

    #[test]
    fn display_date_prefers_published_at() {
        let a = Article {
            id: 1,
            title: "t".into(),
            content: "c".into(),
            author: None,
            category: None,
            published_at: Some("2024-03-01T12:00:00".into()),
            created_at: "2024-01-01T00:00:00".into(),
            updated_at: "2024-01-01T00:00:00".into(),
        };
        assert_eq!(a.display_date(), "2024-03-01T12:00:00");
    }

    #[test]
    fn article_input_omits_absent_optionals() {
        let input = ArticleInput {
            title: "t".into(),
            content: "c".into(),
            author: None,
            category: None,
            published_at: None,
        };
        let v = serde_json::to_value(&input).expect("should serialize");
        let obj = v.as_object().expect("object");
        assert!(!obj.contains_key("author"));
        assert!(!obj.contains_key("category"));
        assert!(!obj.contains_key("published_at"));
        assert_eq!(v["title"], "t");
    }

    #[test]
    fn sort_params_serialize_snake_case() {
        assert_eq!(SortBy::CreatedAt.to_string(), "created_at");
        assert_eq!(SortBy::PublishedAt.as_ref(), "published_at");
        assert_eq!(SortOrder::Desc.to_string(), "desc");
    }
}
