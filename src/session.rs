//! Feed session state.
//!
//! One `SessionState` lives for the whole process. It is owned by the event
//! loop, mutated only through [`crate::feed::Pager`], and borrowed read-only by
//! the renderer and the input reconciler.

use crate::catalog::{self, Category};
use crate::wiki::Article;

/// Which load, if any, is in flight.
///
/// The two busy flags of the session are derived from this, so they can never
/// both be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// First two batches for a freshly selected category.
    InitialLoading,
    /// A threshold-triggered prefetch.
    BackgroundLoading,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    articles: Vec<Article>,
    cursor: usize,
    category: &'static Category,
    phase: Phase,
    /// Bumped on every category reset. Loads carry the value from issue time.
    generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(catalog::default_category())
    }
}

impl SessionState {
    pub fn new(category: &'static Category) -> Self {
        Self {
            articles: Vec::new(),
            cursor: 0,
            category,
            phase: Phase::Idle,
            generation: 0,
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn category(&self) -> &'static Category {
        self.category
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Initial load in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::InitialLoading
    }

    /// Background prefetch in flight.
    pub fn is_loading_more(&self) -> bool {
        self.phase == Phase::BackgroundLoading
    }

    /// The article under the cursor.
    pub fn current(&self) -> Option<&Article> {
        self.articles.get(self.cursor)
    }

    /// The article after the cursor, if loaded.
    pub fn peek_next(&self) -> Option<&Article> {
        self.articles.get(self.cursor + 1)
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.articles.len()
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    /// Articles from the cursor to the end of the list, cursor included.
    pub fn remaining(&self) -> usize {
        self.articles.len().saturating_sub(self.cursor)
    }

    pub fn contains_page(&self, page_id: u64) -> bool {
        self.articles.iter().any(|a| a.page_id == page_id)
    }

    // ========================================================================
    // Mutators (controller only)
    // ========================================================================

    /// Start a new category session: empty list, cursor 0, next generation.
    pub(crate) fn reset(&mut self, category: &'static Category) -> u64 {
        self.category = category;
        self.articles.clear();
        self.cursor = 0;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Replace the list wholesale (initial load).
    pub(crate) fn install(&mut self, articles: Vec<Article>) {
        self.articles = articles;
        self.cursor = 0;
    }

    pub(crate) fn append(&mut self, articles: Vec<Article>) {
        self.articles.extend(articles);
    }

    pub(crate) fn step_forward(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub(crate) fn step_back(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: u64) -> Article {
        Article {
            title: format!("A{}", id),
            extract: String::new(),
            thumbnail: None,
            description: None,
            page_id: id,
            uid: Article::make_uid(id, 1),
        }
    }

    #[test]
    fn new_session_is_idle_and_empty() {
        let state = SessionState::default();
        assert!(state.is_empty());
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.category().id, catalog::DEFAULT_CATEGORY_ID);
        assert!(state.current().is_none());
        assert!(!state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn busy_flags_follow_phase() {
        let mut state = SessionState::default();
        state.set_phase(Phase::InitialLoading);
        assert!(state.is_loading() && !state.is_loading_more());
        state.set_phase(Phase::BackgroundLoading);
        assert!(!state.is_loading() && state.is_loading_more());
        state.set_phase(Phase::Idle);
        assert!(!state.is_loading() && !state.is_loading_more());
    }

    #[test]
    fn reset_clears_and_bumps_generation() {
        let mut state = SessionState::default();
        state.install(vec![article(1), article(2)]);
        state.step_forward();

        let chess = catalog::find("chess").unwrap();
        let generation = state.reset(chess);

        assert_eq!(generation, 1);
        assert!(state.is_empty());
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.category().id, "chess");
    }

    #[test]
    fn stepping_respects_bounds() {
        let mut state = SessionState::default();
        assert!(!state.step_forward());
        assert!(!state.step_back());

        state.install(vec![article(1), article(2)]);
        assert!(!state.step_back());
        assert!(state.step_forward());
        assert_eq!(state.current().map(|a| a.page_id), Some(2));
        assert!(!state.step_forward());
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.remaining(), 1);
    }

    #[test]
    fn append_keeps_cursor() {
        let mut state = SessionState::default();
        state.install(vec![article(1), article(2)]);
        state.step_forward();
        state.append(vec![article(3)]);
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.len(), 3);
        assert_eq!(state.peek_next().map(|a| a.page_id), Some(3));
        assert!(state.contains_page(3));
        assert!(!state.contains_page(4));
    }
}
