//! Render functions for the TUI.
//!
//! This module handles layout and dispatches to the navbar, card and overlay
//! renderers. Every interactive region drawn this frame is recorded in the
//! app's hit map for mouse hit-testing.

use crate::app::{App, HitMap};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use super::{card, categories, help, navbar, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 60;
pub(super) const MIN_HEIGHT: u16 = 12;

/// Main render dispatch function.
///
/// Handles terminal size validation before rendering.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let mut hits = std::mem::take(&mut app.hit_map);
    hits.clear();
    render_frame(f, app, &mut hits);
    app.hit_map = hits;
}

fn render_frame(f: &mut Frame, app: &App, hits: &mut HitMap) {
    let area = f.area();

    // EDGE-001: Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    // EDGE-001: Minimum terminal size check for usable UI
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    // Four rows: navbar, card, navigation buttons, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    navbar::render(f, app, chunks[0], hits);
    card::render(f, app, chunks[1], hits);
    card::render_nav(f, app, chunks[2], hits);
    status::render(f, app, chunks[3]);

    // Overlays are drawn last so their hotspots sit on top
    if let Some(browser) = &app.browser {
        categories::render(f, app, browser, hits);
    }
    if app.show_help {
        help::render(f, app, hits);
    }
}

/// Create a centered rectangle with the given percentage of the parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let r = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(r, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn centered_rect_respects_offset() {
        let r = centered_rect(80, 80, Rect::new(10, 5, 50, 10));
        assert_eq!(r, Rect::new(15, 6, 40, 8));
    }
}
