//! "All Categories" modal: search input plus collapsible group tree.

use crate::app::{App, BrowserRow, CategoryBrowser, HitMap, Hotspot};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::render::centered_rect;

const CLOSE: &str = "[x]";

/// Render the category browser on top of the feed.
pub fn render(f: &mut Frame, app: &App, browser: &CategoryBrowser, hits: &mut HitMap) {
    let overlay = centered_rect(60, 80, f.area());
    if overlay.width < 24 || overlay.height < 6 {
        return;
    }

    f.render_widget(Clear, overlay);
    hits.add(overlay, Hotspot::Overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border_focused"))
        .title(" All Categories ");
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);

    // Close button on the top border
    let close_area = Rect::new(overlay.right().saturating_sub(5), overlay.y, 3, 1);
    f.render_widget(
        Paragraph::new(Span::styled(CLOSE, app.style("card_link"))),
        close_area,
    );
    hits.add(close_area, Hotspot::ModalClose);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!("Filter: {}_", browser.query),
            app.style("input"),
        )),
        chunks[0],
    );

    let rows = browser.rows();
    let list_area = chunks[2];
    if rows.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No matching categories", app.style("metadata"))),
            list_area,
        );
        return;
    }

    // Scroll so the selected row stays visible
    let visible = usize::from(list_area.height);
    let selected = browser.selected.min(rows.len() - 1);
    let offset = (selected + 1).saturating_sub(visible);
    let current = app.session.category().id;

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, row)| {
            let (text, role) = match *row {
                BrowserRow::Group { group, expanded } => {
                    let icon = if expanded { "v" } else { ">" };
                    (
                        format!("{} {} ({})", icon, group.name, group.categories().count()),
                        "modal_group",
                    )
                }
                BrowserRow::Item(category) => {
                    let indent = if browser.query.is_empty() { "    " } else { "" };
                    let marker = if category.id == current { " •" } else { "" };
                    (format!("{}{}{}", indent, category.name, marker), "modal_item")
                }
            };

            let style = if i == selected {
                app.style("modal_selected")
            } else {
                app.style(role)
            };

            let y = list_area.y + (i - offset) as u16;
            hits.add(
                Rect::new(list_area.x, y, list_area.width, 1),
                Hotspot::ModalRow(i),
            );

            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    f.render_widget(List::new(items), list_area);
}
