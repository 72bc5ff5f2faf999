use crate::api::{ApiResult, ListArticlesParams};
use crate::cache::{ListQuery, QueryData, QueryKey};
use crate::models::{Article, ArticleInput};
use crate::state::AppContext;
use leptos::task::spawn_local;

/// Page sizes are fixed per view.
pub(crate) const READER_PER_PAGE: u32 = 9;
pub(crate) const ADMIN_PER_PAGE: u32 = 20;

fn params_for(q: &ListQuery) -> ListArticlesParams {
    ListArticlesParams {
        page: Some(q.page),
        per_page: Some(q.per_page),
        category: q.category.clone(),
        sort_by: q.sort_by,
        sort_order: q.sort_order,
    }
}

/// Starts a fetch for `key` unless the cache already has a fresh value or a
/// request in flight. Call from a tracked effect (with `cache.track()`) so
/// invalidations trigger the re-fetch.
pub(crate) fn ensure_query(app: &AppContext, key: &QueryKey) {
    let Some(ticket) = app.0.query_cache.begin(key) else {
        return;
    };

    let api = app.0.api_client.clone();
    let cache = app.0.query_cache.clone();
    let key = key.clone();
    spawn_local(async move {
        let result = match &key {
            QueryKey::Articles(q) => api
                .list_articles(&params_for(q))
                .await
                .map(QueryData::Articles),
            QueryKey::Categories => api.list_categories().await.map(QueryData::Categories),
        };

        if let Err(e) = &result {
            leptos::logging::warn!("query fetch failed for {key:?}: {e}");
        }

        // Settle discards the result if this fetch was superseded while we
        // were suspended (e.g. a mutation invalidated the key).
        cache.settle(&key, ticket, result);
    });
}

// Mutations are pessimistic: nothing is written into the cache up front, and
// the post-success invalidation is applied before the caller sees `Ok`, so a
// re-read triggered by the UI always observes fresh data.

pub(crate) async fn create_article(app: &AppContext, input: &ArticleInput) -> ApiResult<Article> {
    let article = app.0.api_client.create_article(input).await?;
    app.0.query_cache.invalidate_after_article_mutation();
    Ok(article)
}

pub(crate) async fn update_article(
    app: &AppContext,
    id: i64,
    input: &ArticleInput,
) -> ApiResult<Article> {
    let article = app.0.api_client.update_article(id, input).await?;
    app.0.query_cache.invalidate_after_article_mutation();
    Ok(article)
}

pub(crate) async fn delete_article(app: &AppContext, id: i64) -> ApiResult<()> {
    app.0.api_client.delete_article(id).await?;
    app.0.query_cache.invalidate_after_article_mutation();
    Ok(())
}
