pub(crate) mod nav;
pub(crate) mod queries;

use crate::api::ApiClient;
use crate::cache::QueryCache;

/// Session-wide state: the API client and the query cache.
///
/// Created once when the app mounts and provided through context. The cache
/// is an explicit object with the session's lifetime, not an ambient
/// singleton; cloning the state clones handles to the same cache.
#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: ApiClient,
    pub query_cache: QueryCache,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::from_env(),
            query_cache: QueryCache::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
