use crate::models::{
    Article, ArticleDetailResponse, ArticleInput, ArticleListResponse, CategoryItem,
    CategoryListResponse, SortBy, SortOrder,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    /// Transport-level failure; no HTTP response was received.
    Network,
    /// Non-2xx HTTP response.
    Http,
    /// 2xx response whose body did not match the expected shape.
    Parse,
}

/// Typed error for every API outcome that is not a success.
///
/// `status` is 0 when no HTTP response was received. `details` is the
/// best-effort error body text and defaults to "" when unreadable.
#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub status: u16,
    pub status_text: String,
    pub details: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ApiErrorKind::Network => write!(f, "network error: {}", self.details),
            ApiErrorKind::Parse => write!(f, "unexpected response: {}", self.details),
            ApiErrorKind::Http => {
                if self.details.is_empty() {
                    write!(f, "API error {} {}", self.status, self.status_text)
                } else {
                    write!(f, "API error {}: {}", self.status, self.details)
                }
            }
        }
    }
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            status: 0,
            status_text: String::new(),
            details: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            status: 0,
            status_text: String::new(),
            details: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, details: String) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
            details,
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let default_api_url = "http://localhost:8000/api/v1".to_string();

        // We support BOTH `window.ENV.API_URL` (documented in README) and
        // `window.ENV.api_url` (legacy/implementation detail) for compatibility.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    // 1) Prefer README style: API_URL
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &"API_URL".into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }

                    // 2) Fallback: api_url
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &"api_url".into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }
                }
            }
        }

        Self {
            api_url: default_api_url,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Optional parameters of `GET /articles`. Only set fields are serialized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ListArticlesParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

impl ListArticlesParams {
    /// Builds the query-string suffix ("" when no parameter is set).
    pub(crate) fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(page) = self.page {
            pairs.push(format!("page={page}"));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(format!("per_page={per_page}"));
        }
        if let Some(category) = &self.category {
            pairs.push(format!("category={}", urlencoding::encode(category)));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(format!("sort_by={sort_by}"));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(format!("sort_order={sort_order}"));
        }

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&impl serde::Serialize>,
    ) -> ApiResult<T> {
        let res = self.send(method, path, body).await?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let status = res.status();
            let details = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, details))
        }
    }

    /// Like `request`, but success carries no payload (DELETE): any 2xx
    /// status is success, the body is ignored.
    async fn request_no_content(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> ApiResult<()> {
        let res = self.send(method, path, None::<&()>).await?;

        if res.status().is_success() {
            Ok(())
        } else {
            let status = res.status();
            let details = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, details))
        }
    }

    async fn send(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&impl serde::Serialize>,
    ) -> ApiResult<reqwest::Response> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", self.base_url, path);
        let mut req = client.request(method, url);

        if let Some(b) = body {
            req = req.json(b);
        }

        req.send().await.map_err(ApiError::network)
    }

    pub async fn list_articles(
        &self,
        params: &ListArticlesParams,
    ) -> ApiResult<ArticleListResponse> {
        let path = format!("/articles{}", params.to_query_string());
        self.request(reqwest::Method::GET, &path, None::<&()>).await
    }

    /// The browsing views open details from the already-listed record, but
    /// the endpoint is part of the API surface.
    #[allow(dead_code)]
    pub async fn get_article(&self, id: i64) -> ApiResult<Article> {
        let res: ArticleDetailResponse = self
            .request(reqwest::Method::GET, &format!("/articles/{id}"), None::<&()>)
            .await?;
        Ok(res.data)
    }

    pub async fn create_article(&self, input: &ArticleInput) -> ApiResult<Article> {
        let res: ArticleDetailResponse = self
            .request(reqwest::Method::POST, "/articles", Some(input))
            .await?;
        Ok(res.data)
    }

    pub async fn update_article(&self, id: i64, input: &ArticleInput) -> ApiResult<Article> {
        let res: ArticleDetailResponse = self
            .request(reqwest::Method::PUT, &format!("/articles/{id}"), Some(input))
            .await?;
        Ok(res.data)
    }

    pub async fn delete_article(&self, id: i64) -> ApiResult<()> {
        self.request_no_content(reqwest::Method::DELETE, &format!("/articles/{id}"))
            .await
    }

    pub async fn list_categories(&self) -> ApiResult<Vec<CategoryItem>> {
        let res: CategoryListResponse = self
            .request(reqwest::Method::GET, "/categories", None::<&()>)
            .await?;
        Ok(res.data)
    }
}
