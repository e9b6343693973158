//! Input handling for the TUI.
//!
//! This module processes keyboard and mouse input and dispatches to the
//! appropriate handler based on which overlay, if any, is open.

use crate::app::{App, AppEvent, BrowserRow, CategoryBrowser, Hotspot, SearchBox};
use crate::catalog::{self, Category};
use crate::input::{Intent, PointerKind};
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use super::helpers::{navigate, open_current_article, start_category};
use super::Action;

/// Main input dispatch function.
///
/// Overlays capture all keys while open: help first, then the category
/// browser, then the navbar search box.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    // Ctrl+C quits from anywhere, including text inputs
    if modifiers.contains(KeyModifiers::CONTROL)
        && app
            .keybindings
            .context_action(code, modifiers, KbContext::Global)
            == Some(KbAction::Quit)
    {
        return Action::Quit;
    }

    if app.show_help {
        handle_help_input(app, code, modifiers);
        return Action::Continue;
    }

    if app.browser.is_some() {
        handle_browser_input(app, code, modifiers, event_tx);
        return Action::Continue;
    }

    if app.search.is_some() {
        handle_search_input(app, code, modifiers, event_tx);
        return Action::Continue;
    }

    handle_feed_input(app, code, modifiers, event_tx)
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('q')
        || app
            .keybindings
            .context_action(code, modifiers, KbContext::Help)
            == Some(KbAction::Back)
    {
        close_help(app);
        return;
    }

    match code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        KeyCode::PageDown => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(10);
        }
        KeyCode::PageUp => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(10);
        }
        _ => {}
    }
}

fn close_help(app: &mut App) {
    app.show_help = false;
    app.help_scroll_offset = 0;
}

/// Handle input in the feed (no overlay open).
fn handle_feed_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    if let Some(intent) = app.reconciler.key(&app.keybindings, code, modifiers) {
        navigate(app, intent, event_tx);
        return Action::Continue;
    }

    // Number keys select the popular chips directly
    if let KeyCode::Char(c @ '1'..='9') = code {
        let index = (c as usize) - ('1' as usize);
        if let Some(category) = catalog::popular().nth(index) {
            select(app, category, event_tx);
        }
        return Action::Continue;
    }

    match app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Feed)
    {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::OpenArticle) => open_current_article(app),
        Some(KbAction::EnterSearch) => open_search(app),
        Some(KbAction::ShowCategories) => open_browser(app),
        Some(KbAction::CycleTheme) => app.cycle_theme(),
        Some(KbAction::ShowHelp) => {
            app.show_help = true;
            app.help_scroll_offset = 0;
            app.reconciler.cancel_gestures();
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input while the navbar search box is open.
///
/// Typed characters always go to the query; only Search bindings apply.
fn handle_search_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    let action = app
        .keybindings
        .context_action(code, modifiers, KbContext::Search);
    let Some(search) = app.search.as_mut() else {
        return;
    };

    match action {
        Some(KbAction::ExitSearch) => app.search = None,
        Some(KbAction::CommitSearch) => match search.highlighted_category() {
            Some(category) => select(app, category, event_tx),
            None => app.set_status("No matching category"),
        },
        Some(KbAction::ChipNext) => search.move_highlight(true),
        Some(KbAction::ChipPrev) => search.move_highlight(false),
        _ => match code {
            KeyCode::Backspace => search.backspace(),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => search.push(c),
            _ => {}
        },
    }
}

/// Handle input while the category browser modal is open.
fn handle_browser_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    let action = app
        .keybindings
        .context_action(code, modifiers, KbContext::Categories);
    let Some(browser) = app.browser.as_mut() else {
        return;
    };

    match action {
        Some(KbAction::Back) => app.browser = None,
        Some(KbAction::Select) => activate_browser_row(app, event_tx),
        Some(KbAction::NavDown) => browser.nav(true),
        Some(KbAction::NavUp) => browser.nav(false),
        _ => match code {
            KeyCode::Backspace => browser.backspace(),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => browser.push(c),
            _ => {}
        },
    }
}

/// Toggle the selected group or pick the selected category.
fn activate_browser_row(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    let Some(browser) = app.browser.as_mut() else {
        return;
    };
    match browser.selected_row() {
        Some(BrowserRow::Group { group, .. }) => browser.toggle_group(group.name),
        Some(BrowserRow::Item(category)) => select(app, category, event_tx),
        None => {}
    }
}

fn open_search(app: &mut App) {
    app.search = Some(SearchBox::default());
    app.reconciler.cancel_gestures();
}

fn open_browser(app: &mut App) {
    app.search = None;
    app.browser = Some(CategoryBrowser::default());
    app.reconciler.cancel_gestures();
}

fn select(app: &mut App, category: &'static Category, event_tx: &mpsc::Sender<AppEvent>) {
    start_category(app, category, event_tx);
    app.set_status(format!("Category: {}", category.name));
}

// ============================================================================
// Mouse
// ============================================================================

/// Handle a mouse event.
///
/// Cell coordinates are converted to logical pixels with the configured row
/// height (cells are treated as half as wide as they are tall). Holding Shift
/// counts as an active text selection.
pub(super) fn handle_mouse(app: &mut App, event: MouseEvent, event_tx: &mpsc::Sender<AppEvent>) {
    let selecting = event.modifiers.contains(KeyModifiers::SHIFT);
    let ctx = app.pointer_context(event.column, event.row, selecting);
    let y = f64::from(event.row) * app.row_height;
    let x = f64::from(event.column) * app.row_height / 2.0;

    match event.kind {
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            let delta = if event.kind == MouseEventKind::ScrollDown {
                app.row_height
            } else {
                -app.row_height
            };
            if !scroll_overlay(app, delta > 0.0) {
                if let Some(intent) = app.reconciler.wheel(delta, ctx) {
                    navigate(app, intent, event_tx);
                }
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match app.hit_map.hit(event.column, event.row) {
                Some(spot) => activate_hotspot(app, spot, event_tx),
                None if app.overlay_open() => {
                    // Click outside the overlay dismisses it
                    app.browser = None;
                    close_help(app);
                }
                None => {}
            }
            app.reconciler.touch_start(y, ctx);
        }
        MouseEventKind::Drag(MouseButton::Left) => app.reconciler.touch_move(y, ctx),
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(intent) = app.reconciler.touch_end() {
                navigate(app, intent, event_tx);
            }
        }
        MouseEventKind::Down(MouseButton::Right) => {
            if ctx.on_control() || ctx.text_selected {
                app.reconciler.cancel_gestures();
            } else {
                app.reconciler.pointer_down(PointerKind::Mouse, x, y);
            }
        }
        MouseEventKind::Up(MouseButton::Right) => {
            if let Some(intent) = app.reconciler.pointer_up(PointerKind::Mouse, x, y) {
                navigate(app, intent, event_tx);
            }
        }
        _ => return,
    }
    app.needs_redraw = true;
}

/// Wheel over an open overlay scrolls it. Returns whether it was consumed.
fn scroll_overlay(app: &mut App, down: bool) -> bool {
    if app.show_help {
        app.help_scroll_offset = if down {
            app.help_scroll_offset.saturating_add(1)
        } else {
            app.help_scroll_offset.saturating_sub(1)
        };
        return true;
    }
    if let Some(browser) = app.browser.as_mut() {
        browser.nav(down);
        return true;
    }
    false
}

fn activate_hotspot(app: &mut App, spot: Hotspot, event_tx: &mpsc::Sender<AppEvent>) {
    tracing::debug!(?spot, "Hotspot clicked");
    match spot {
        Hotspot::Chip(category) => select(app, category, event_tx),
        Hotspot::MoreChip => open_browser(app),
        Hotspot::SearchChip => open_search(app),
        Hotspot::PrevButton => navigate(app, Intent::Retreat, event_tx),
        Hotspot::NextButton => navigate(app, Intent::Advance, event_tx),
        Hotspot::ReadMore => open_current_article(app),
        Hotspot::ModalRow(index) => {
            if let Some(browser) = app.browser.as_mut() {
                browser.selected = index;
                activate_browser_row(app, event_tx);
            }
        }
        Hotspot::ModalClose => {
            app.browser = None;
            close_help(app);
        }
        Hotspot::SearchInput | Hotspot::Overlay => {}
    }
}
