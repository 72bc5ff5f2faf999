pub(crate) mod key;

pub(crate) use key::{ListQuery, QueryKey};

use crate::api::ApiError;
use crate::models::{ArticleListResponse, CategoryItem};
use leptos::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Payload stored per key. The variant always matches the key's entity.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum QueryData {
    Articles(ArticleListResponse),
    Categories(Vec<CategoryItem>),
}

impl QueryData {
    pub fn as_articles(&self) -> Option<&ArticleListResponse> {
        match self {
            QueryData::Articles(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_categories(&self) -> Option<&[CategoryItem]> {
        match self {
            QueryData::Categories(c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum QueryStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Point-in-time view of one cache entry, cheap to clone into views.
///
/// `data` survives a failed refresh: a stale-but-valid value is only
/// replaced by a newer successful fetch, never evicted by an error.
#[derive(Clone, Debug)]
pub(crate) struct QuerySnapshot {
    pub status: QueryStatus,
    pub data: Option<QueryData>,
    pub error: Option<ApiError>,
    pub stale: bool,
}

impl QuerySnapshot {
    fn idle() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            error: None,
            stale: false,
        }
    }
}

struct Entry {
    status: QueryStatus,
    data: Option<QueryData>,
    error: Option<ApiError>,
    stale: bool,
    /// Bumped whenever a new fetch is issued OR the entry is invalidated
    /// while a fetch is in flight. A settle whose ticket no longer matches
    /// is discarded.
    generation: u64,
    in_flight: bool,
}

impl Entry {
    fn new() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            error: None,
            stale: false,
            generation: 0,
            in_flight: false,
        }
    }
}

/// Session-lived query cache.
///
/// One instance per application session, created in `AppState` and handed to
/// controllers as a cloned handle (all clones share the same entries).
///
/// Execution is single-threaded between await points, so the mutex is never
/// contended; it only satisfies the `Send` bounds of reactive closures.
/// `version` is a plain change signal that lets views re-read snapshots when
/// any entry changes.
#[derive(Clone)]
pub(crate) struct QueryCache {
    entries: Arc<Mutex<HashMap<QueryKey, Entry>>>,
    version: RwSignal<u64>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            version: RwSignal::new(0),
        }
    }

    fn touch(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }

    /// Subscribes the current reactive context to cache changes without
    /// reading an entry (for effects that re-run `begin` after an
    /// invalidation lands).
    pub fn track(&self) {
        self.version.track();
    }

    /// Reads the current state of `key`. Reactive: when called inside a
    /// tracking context, the caller re-runs on any cache change.
    pub fn snapshot(&self, key: &QueryKey) -> QuerySnapshot {
        self.version.track();
        let Ok(entries) = self.entries.lock() else {
            return QuerySnapshot::idle();
        };
        entries
            .get(key)
            .map(|e| QuerySnapshot {
                status: e.status,
                data: e.data.clone(),
                error: e.error.clone(),
                stale: e.stale,
            })
            .unwrap_or_else(QuerySnapshot::idle)
    }

    /// Claims the right to fetch `key`.
    ///
    /// Returns a ticket when a network request should be issued; `None` when
    /// the entry is already fresh or a request for it is in flight (the
    /// concurrent requester shares that request's result via `snapshot`).
    ///
    /// A `Failed` entry is settled too: this layer never retries on its own,
    /// so it only refetches after an invalidation marks it stale.
    pub fn begin(&self, key: &QueryKey) -> Option<u64> {
        let ticket = {
            let Ok(mut entries) = self.entries.lock() else {
                return None;
            };
            let entry = entries.entry(key.clone()).or_insert_with(Entry::new);

            if entry.in_flight {
                return None;
            }
            let settled =
                entry.status == QueryStatus::Loaded || entry.status == QueryStatus::Failed;
            if settled && !entry.stale {
                return None;
            }

            entry.generation += 1;
            entry.in_flight = true;
            entry.status = QueryStatus::Loading;
            entry.generation
        };
        self.touch();
        Some(ticket)
    }

    /// Applies a fetch outcome. Ignored when `ticket` no longer matches the
    /// entry's generation: the response was superseded and must not render.
    pub fn settle(&self, key: &QueryKey, ticket: u64, result: Result<QueryData, ApiError>) {
        {
            let Ok(mut entries) = self.entries.lock() else {
                return;
            };
            let Some(entry) = entries.get_mut(key) else {
                return;
            };
            if entry.generation != ticket {
                return;
            }

            entry.in_flight = false;
            match result {
                Ok(data) => {
                    entry.status = QueryStatus::Loaded;
                    entry.data = Some(data);
                    entry.error = None;
                    entry.stale = false;
                }
                Err(e) => {
                    // Keep any previously cached data untouched. The fetch
                    // consumed the staleness; a further invalidation is what
                    // allows the next attempt.
                    entry.status = QueryStatus::Failed;
                    entry.error = Some(e);
                    entry.stale = false;
                }
            }
        }
        self.touch();
    }

    /// Marks every entry whose key matches `pred` stale. The next read for a
    /// stale key re-fetches instead of serving the cached value as fresh.
    ///
    /// An in-flight fetch for a matching key is superseded: its generation is
    /// bumped so its eventual settle is discarded, and a new fetch may start
    /// immediately.
    pub fn invalidate(&self, pred: impl Fn(&QueryKey) -> bool) {
        {
            let Ok(mut entries) = self.entries.lock() else {
                return;
            };
            for (key, entry) in entries.iter_mut() {
                if !pred(key) {
                    continue;
                }
                entry.stale = true;
                if entry.in_flight {
                    entry.generation += 1;
                    entry.in_flight = false;
                    entry.status = if entry.data.is_some() {
                        QueryStatus::Loaded
                    } else {
                        QueryStatus::Idle
                    };
                }
            }
        }
        self.touch();
    }

    /// Post-mutation invalidation: every article list AND every category
    /// query, since category article-counts change with the articles.
    pub fn invalidate_after_article_mutation(&self) {
        self.invalidate(|k| k.is_articles() || k.is_categories());
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
