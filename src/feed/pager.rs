use crate::catalog::Category;
use crate::session::{Phase, SessionState};
use crate::wiki::{Article, ArticleSource, FetchError};
use std::collections::HashSet;

/// Remaining articles (cursor included) at or below which a prefetch starts.
pub const PREFETCH_THRESHOLD: usize = 3;

/// Largest batch a caller may configure.
pub const MAX_BATCH_SIZE: usize = 50;

pub use crate::wiki::client::DEFAULT_BATCH_SIZE;

// ============================================================================
// Requests and results
// ============================================================================

/// Work order for the initial two-fetch load of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialRequest {
    pub generation: u64,
    pub query: &'static str,
    pub limit: usize,
}

/// Work order for a background prefetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoreRequest {
    pub generation: u64,
    pub query: &'static str,
    pub limit: usize,
    /// Page ids loaded at issue time, used to drop duplicates.
    pub known: HashSet<u64>,
}

/// Outcome of [`load_initial`]. `error` is set when either fetch failed;
/// `articles` still carries whatever was reached before the failure.
#[derive(Debug, Default)]
pub struct InitialLoad {
    pub articles: Vec<Article>,
    pub error: Option<FetchError>,
}

/// Outcome of [`load_more`].
#[derive(Debug, Default)]
pub struct MoreLoad {
    pub articles: Vec<Article>,
    /// The first fetch produced only duplicates and a second fetch was made.
    pub retried: bool,
    pub error: Option<FetchError>,
}

impl MoreLoad {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Result of an advance intent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Advance {
    pub moved: bool,
    /// Set when this advance crossed the prefetch threshold while idle.
    pub prefetch: Option<MoreRequest>,
}

// ============================================================================
// Pager
// ============================================================================

/// Pagination and prefetch controller.
///
/// Pure state transitions over [`SessionState`]. Network work happens in
/// [`load_initial`] / [`load_more`], whose results come back through
/// [`Pager::finish_initial`] / [`Pager::finish_more`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    batch_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}

impl Pager {
    /// Batch size is clamped to `1..=MAX_BATCH_SIZE`.
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.clamp(1, MAX_BATCH_SIZE),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Switch to `category`: clear the list, reset the cursor and start the
    /// initial load.
    ///
    /// Any load still in flight for the previous generation is superseded;
    /// its result will be discarded on arrival.
    pub fn select_category(
        &self,
        state: &mut SessionState,
        category: &'static Category,
    ) -> InitialRequest {
        let generation = state.reset(category);
        state.set_phase(Phase::InitialLoading);
        tracing::debug!(category = category.id, generation, "Category selected");
        InitialRequest {
            generation,
            query: category.query,
            limit: self.batch_size,
        }
    }

    /// Move to the next article. No-op at the last one.
    pub fn advance(&self, state: &mut SessionState) -> Advance {
        if !state.step_forward() {
            return Advance::default();
        }

        let prefetch = if state.remaining() <= PREFETCH_THRESHOLD && state.phase() == Phase::Idle
        {
            state.set_phase(Phase::BackgroundLoading);
            tracing::debug!(
                cursor = state.cursor(),
                loaded = state.len(),
                generation = state.generation(),
                "Prefetch threshold reached"
            );
            Some(MoreRequest {
                generation: state.generation(),
                query: state.category().query,
                limit: self.batch_size,
                known: state.articles().iter().map(|a| a.page_id).collect(),
            })
        } else {
            None
        };

        Advance {
            moved: true,
            prefetch,
        }
    }

    /// Move to the previous article. No-op at the first one.
    pub fn retreat(&self, state: &mut SessionState) -> bool {
        state.step_back()
    }

    /// Apply an initial load. Returns false when the result was stale.
    pub fn finish_initial(&self, state: &mut SessionState, generation: u64, load: InitialLoad) -> bool {
        if generation != state.generation() {
            tracing::debug!(
                generation,
                current = state.generation(),
                "Discarding stale initial load"
            );
            return false;
        }

        tracing::debug!(count = load.articles.len(), generation, "Initial load finished");
        state.install(load.articles);
        state.set_phase(Phase::Idle);
        true
    }

    /// Apply a background load. Returns false when the result was stale.
    pub fn finish_more(&self, state: &mut SessionState, generation: u64, load: MoreLoad) -> bool {
        if generation != state.generation() {
            tracing::debug!(
                generation,
                current = state.generation(),
                "Discarding stale background load"
            );
            return false;
        }

        tracing::debug!(
            count = load.articles.len(),
            retried = load.retried,
            generation,
            "Background load finished"
        );
        state.append(load.articles);
        state.set_phase(Phase::Idle);
        true
    }

    /// Release the busy phase for `generation` without touching the list.
    ///
    /// Used when a load task dies before reporting.
    pub fn abandon(&self, state: &mut SessionState, generation: u64) -> bool {
        if generation != state.generation() {
            return false;
        }
        state.set_phase(Phase::Idle);
        true
    }
}

// ============================================================================
// Loads
// ============================================================================

/// Fetch two batches for a fresh category.
///
/// Batch-2 articles whose page id already appeared in batch 1 are dropped.
/// Failures are logged here and reported in the result; nothing propagates.
pub async fn load_initial<S: ArticleSource>(source: &S, request: &InitialRequest) -> InitialLoad {
    let mut articles = match source.fetch_batch(request.query, request.limit).await {
        Ok(batch) => batch,
        Err(e) => {
            tracing::warn!(error = %e, query = request.query, "Initial fetch failed");
            return InitialLoad {
                articles: Vec::new(),
                error: Some(e),
            };
        }
    };

    match source.fetch_batch(request.query, request.limit).await {
        Ok(second) => {
            let first_ids: HashSet<u64> = articles.iter().map(|a| a.page_id).collect();
            articles.extend(second.into_iter().filter(|a| !first_ids.contains(&a.page_id)));
            InitialLoad {
                articles,
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, query = request.query, "Second initial fetch failed");
            InitialLoad {
                articles,
                error: Some(e),
            }
        }
    }
}

/// Fetch one more batch, keeping only unseen page ids.
///
/// If every article is already loaded, one retry is made and its batch is
/// kept whole. A retry that repeats page ids can therefore load an article
/// twice; each copy still has its own uid.
pub async fn load_more<S: ArticleSource>(source: &S, request: &MoreRequest) -> MoreLoad {
    let batch = match source.fetch_batch(request.query, request.limit).await {
        Ok(batch) => batch,
        Err(e) => {
            tracing::warn!(error = %e, query = request.query, "Background fetch failed");
            return MoreLoad {
                error: Some(e),
                ..MoreLoad::empty()
            };
        }
    };

    let fresh: Vec<Article> = batch
        .into_iter()
        .filter(|a| !request.known.contains(&a.page_id))
        .collect();
    if !fresh.is_empty() {
        return MoreLoad {
            articles: fresh,
            ..MoreLoad::empty()
        };
    }

    tracing::debug!(query = request.query, "Batch was all duplicates, retrying once");
    match source.fetch_batch(request.query, request.limit).await {
        Ok(retry) => MoreLoad {
            articles: retry,
            retried: true,
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, query = request.query, "Retry fetch failed");
            MoreLoad {
                articles: Vec::new(),
                retried: true,
                error: Some(e),
            }
        }
    }
}
