use crate::catalog::{self, Category, CategoryGroup, GROUPS};
use crate::config::Config;
use crate::feed::{Advance, InitialLoad, InitialRequest, MoreLoad, MoreRequest, Pager};
use crate::input::{Intent, PointerContext, Reconciler, Target};
use crate::keybindings::KeybindingRegistry;
use crate::session::SessionState;
use crate::theme::{StyleMap, ThemeVariant};
use crate::util::{article_url, UrlValidationError, MAX_SEARCH_QUERY_LENGTH};
use crate::wiki::WikiClient;
use ratatui::layout::{Position, Rect};
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use url::Url;

// ============================================================================
// Background Events
// ============================================================================

/// Messages from spawned load tasks back to the event loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Initial two-batch load finished for `generation`.
    InitialLoaded { generation: u64, load: InitialLoad },
    /// Background prefetch finished for `generation`.
    MoreLoaded { generation: u64, load: MoreLoad },
    /// A load task panicked.
    ///
    /// Fields:
    /// - `task`: Name of the task ("initial_load" or "load_more")
    /// - `generation`: Session generation the task was issued for
    /// - `error`: The panic message extracted from the panic payload
    TaskPanicked {
        task: &'static str,
        generation: u64,
        error: String,
    },
}

// ============================================================================
// Navbar Search
// ============================================================================

/// Inline category search shown in place of the popular chips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    pub query: String,
    /// Index into [`SearchBox::matches`] picked by Enter.
    pub highlighted: usize,
}

impl SearchBox {
    /// Chips to show: every category whose name contains the query.
    pub fn matches(&self) -> Vec<&'static Category> {
        catalog::filter_by_name(&self.query)
    }

    pub fn highlighted_category(&self) -> Option<&'static Category> {
        self.matches().get(self.highlighted).copied()
    }

    pub fn push(&mut self, c: char) {
        if self.query.chars().count() < MAX_SEARCH_QUERY_LENGTH {
            self.query.push(c);
            self.highlighted = 0;
        }
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.highlighted = 0;
    }

    pub fn move_highlight(&mut self, forward: bool) {
        let count = self.matches().len();
        if count == 0 {
            self.highlighted = 0;
            return;
        }
        self.highlighted = if forward {
            (self.highlighted + 1) % count
        } else {
            (self.highlighted + count - 1) % count
        };
    }
}

// ============================================================================
// Category Browser
// ============================================================================

/// One line of the category browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserRow {
    Group {
        group: &'static CategoryGroup,
        expanded: bool,
    },
    Item(&'static Category),
}

/// "All Categories" modal: collapsible groups, or a flat filtered list while
/// a query is typed.
#[derive(Debug, Clone, Default)]
pub struct CategoryBrowser {
    pub query: String,
    pub expanded: HashSet<&'static str>,
    pub selected: usize,
}

impl CategoryBrowser {
    pub fn rows(&self) -> Vec<BrowserRow> {
        if !self.query.is_empty() {
            return catalog::filter_by_name(&self.query)
                .into_iter()
                .map(BrowserRow::Item)
                .collect();
        }

        let mut rows = Vec::new();
        for group in GROUPS {
            let expanded = self.expanded.contains(group.name);
            rows.push(BrowserRow::Group { group, expanded });
            if expanded {
                rows.extend(group.categories().map(BrowserRow::Item));
            }
        }
        rows
    }

    pub fn selected_row(&self) -> Option<BrowserRow> {
        self.rows().get(self.selected).copied()
    }

    pub fn toggle_group(&mut self, name: &'static str) {
        if !self.expanded.remove(name) {
            self.expanded.insert(name);
        }
    }

    pub fn nav(&mut self, down: bool) {
        let count = self.rows().len();
        if count == 0 {
            self.selected = 0;
        } else if down {
            self.selected = (self.selected + 1).min(count - 1);
        } else {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    pub fn push(&mut self, c: char) {
        if self.query.chars().count() < MAX_SEARCH_QUERY_LENGTH {
            self.query.push(c);
            self.selected = 0;
        }
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.selected = 0;
    }
}

// ============================================================================
// Hit Testing
// ============================================================================

/// Interactive regions recorded while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hotspot {
    Chip(&'static Category),
    MoreChip,
    SearchChip,
    SearchInput,
    PrevButton,
    NextButton,
    ReadMore,
    ModalRow(usize),
    ModalClose,
    /// Anywhere else inside an open overlay.
    Overlay,
}

/// Screen regions of the last frame, topmost last.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Hotspot)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn add(&mut self, area: Rect, spot: Hotspot) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, spot));
        }
    }

    /// Topmost hotspot under the cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hotspot> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, spot)| *spot)
    }
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub source: Arc<WikiClient>,

    // Feed
    pub session: SessionState,
    pub pager: Pager,
    pub reconciler: Reconciler,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,

    pub keybindings: KeybindingRegistry,

    /// Base URL for "Read More" links.
    pub article_base_url: String,
    /// Logical px per terminal row for pointer gestures.
    pub row_height: f64,

    // Overlays
    pub search: Option<SearchBox>,
    pub browser: Option<CategoryBrowser>,
    pub show_help: bool,
    pub help_scroll_offset: usize,

    /// Regions drawn in the last frame, for mouse hit-testing.
    pub hit_map: HitMap,

    /// Status message with expiry. Cow avoids allocation for static literals.
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Dirty flag to skip unnecessary frame renders.
    pub needs_redraw: bool,

    /// Current frame of the loading spinner animation.
    pub spinner_frame: usize,

    /// Handle to the in-flight initial load, aborted when superseded.
    pub initial_load_handle: Option<JoinHandle<()>>,
    /// Handle to the in-flight background load, aborted when superseded.
    pub more_load_handle: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(source: Arc<WikiClient>, config: &Config) -> Self {
        let theme_variant = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme, using dark");
            ThemeVariant::Dark
        });

        let mut keybindings = KeybindingRegistry::new();
        for warning in keybindings.apply_overrides(&config.keybindings) {
            tracing::warn!("{}", warning);
        }

        Self {
            source,
            session: SessionState::new(config.startup_category()),
            pager: Pager::new(config.effective_batch_size()),
            reconciler: Reconciler::new(),
            theme_variant,
            theme: StyleMap::from_palette(&theme_variant.palette()),
            keybindings,
            article_base_url: config.article_base_url.clone(),
            row_height: config.row_height(),
            search: None,
            browser: None,
            show_help: false,
            help_scroll_offset: 0,
            hit_map: HitMap::default(),
            status_message: None,
            needs_redraw: true,
            spinner_frame: 0,
            initial_load_handle: None,
            more_load_handle: None,
        }
    }

    /// Set a status message that expires after 3 seconds.
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired (older than 3 seconds).
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    /// Resolve a theme role to its style.
    pub fn style(&self, role: &str) -> ratatui::style::Style {
        self.theme.resolve(role)
    }

    pub fn cycle_theme(&mut self) {
        self.theme_variant = self.theme_variant.next();
        self.theme = StyleMap::from_palette(&self.theme_variant.palette());
        self.set_status(format!("Theme: {}", self.theme_variant.name()));
    }

    // ========================================================================
    // Feed transitions
    // ========================================================================

    /// Reset the session to `category` and return the initial load to spawn.
    ///
    /// Aborts loads still running for the previous generation and closes the
    /// navbar search and category browser.
    pub fn begin_category(&mut self, category: &'static Category) -> InitialRequest {
        if let Some(handle) = self.initial_load_handle.take() {
            handle.abort();
            tracing::debug!("Aborted superseded initial load");
        }
        if let Some(handle) = self.more_load_handle.take() {
            handle.abort();
            tracing::debug!("Aborted superseded background load");
        }

        self.search = None;
        self.browser = None;
        self.reconciler.cancel_gestures();
        tracing::info!(category = category.id, "Switching category");
        self.pager.select_category(&mut self.session, category)
    }

    /// Apply a navigation intent. Returns a prefetch to spawn, if any.
    pub fn apply_intent(&mut self, intent: Intent) -> Option<MoreRequest> {
        match intent {
            Intent::Advance => {
                let Advance { moved, prefetch } = self.pager.advance(&mut self.session);
                if moved {
                    self.needs_redraw = true;
                }
                prefetch
            }
            Intent::Retreat => {
                if self.pager.retreat(&mut self.session) {
                    self.needs_redraw = true;
                }
                None
            }
        }
    }

    pub fn finish_initial(&mut self, generation: u64, load: InitialLoad) {
        let error = load.error.as_ref().map(ToString::to_string);
        if !self.pager.finish_initial(&mut self.session, generation, load) {
            return;
        }
        self.initial_load_handle = None;

        if let Some(e) = error {
            self.set_status(format!("Could not load articles: {}", e));
        } else if self.session.is_empty() {
            self.set_status("No articles found for this category");
        }
    }

    pub fn finish_more(&mut self, generation: u64, load: MoreLoad) {
        let error = load.error.as_ref().map(ToString::to_string);
        if !self.pager.finish_more(&mut self.session, generation, load) {
            return;
        }
        self.more_load_handle = None;

        if let Some(e) = error {
            self.set_status(format!("Could not load more articles: {}", e));
        }
    }

    /// Release the busy phase after a load task died.
    pub fn abandon_load(&mut self, generation: u64) {
        if self.pager.abandon(&mut self.session, generation) {
            self.initial_load_handle = None;
            self.more_load_handle = None;
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// "Read More" link for the current article.
    pub fn current_article_url(&self) -> Option<Result<Url, UrlValidationError>> {
        let article = self.session.current()?;
        Some(article_url(&self.article_base_url, &article.title))
    }

    /// Whether any overlay captures input.
    pub fn overlay_open(&self) -> bool {
        self.browser.is_some() || self.show_help
    }

    /// Classify a pointer event at a cell.
    pub fn pointer_context(&self, column: u16, row: u16, selecting: bool) -> PointerContext {
        let target = if self.overlay_open() || self.hit_map.hit(column, row).is_some() {
            Target::Control
        } else {
            Target::Feed
        };
        PointerContext {
            target,
            text_selected: selecting,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
