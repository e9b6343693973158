//! Article card and the previous/next button row.

use crate::app::{App, HitMap, Hotspot};
use crate::keybindings::{Action, Context, KeybindingRegistry};
use crate::util::{display_width, paragraphs, strip_control_chars, truncate_to_width};
use crate::wiki::Article;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Braille spinner frames, advanced by the loop tick while loading.
pub(super) const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const READ_MORE: &str = "Read More on Wikipedia →";
const PREV_LABEL: &str = " ◀ Prev ";
const NEXT_LABEL: &str = " Next ▶ ";

fn spinner(app: &App) -> &'static str {
    SPINNER[app.spinner_frame % SPINNER.len()]
}

pub(super) fn render(f: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let session = &app.session;
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border"))
        .title(format!(" {} ", session.category().name));

    if !session.is_empty() {
        block = block.title(
            Line::from(format!(" {} / {} ", session.cursor() + 1, session.len())).right_aligned(),
        );
    }
    if session.is_loading_more() {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {} loading more ", spinner(app)),
                app.style("spinner"),
            ))
            .right_aligned(),
        );
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    if session.is_loading() {
        render_centered(
            f,
            inner,
            Line::from(Span::styled(
                format!(
                    "{} Loading {} articles...",
                    spinner(app),
                    session.category().name
                ),
                app.style("spinner"),
            )),
        );
        return;
    }

    let Some(article) = session.current() else {
        render_centered(
            f,
            inner,
            Line::from(Span::styled(empty_hint(&app.keybindings), app.style("metadata"))),
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let body = Paragraph::new(article_lines(app, article, chunks[0].width))
        .wrap(Wrap { trim: true });
    f.render_widget(body, chunks[0]);

    // Read More link
    let link_width = u16::try_from(display_width(READ_MORE))
        .unwrap_or(u16::MAX)
        .min(chunks[1].width);
    hits.add(
        Rect::new(chunks[1].x, chunks[1].y, link_width, 1),
        Hotspot::ReadMore,
    );
    f.render_widget(
        Paragraph::new(Span::styled(READ_MORE, app.style("card_link"))),
        chunks[1],
    );

    // Peek at the next title
    let peek = match session.peek_next() {
        Some(next) => {
            let title = strip_control_chars(&next.title);
            let budget = usize::from(chunks[2].width).saturating_sub(6);
            format!("Next: {}", truncate_to_width(&title, budget))
        }
        None if session.is_loading_more() => "Next: loading...".to_string(),
        None => "End of loaded articles".to_string(),
    };
    f.render_widget(
        Paragraph::new(Span::styled(peek, app.style("card_peek"))),
        chunks[2],
    );
}

/// Title, description, extract paragraphs and the thumbnail reference.
fn article_lines<'a>(app: &App, article: &'a Article, width: u16) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    let title = strip_control_chars(&article.title);
    lines.push(Line::from(Span::styled(
        truncate_to_width(&title, usize::from(width)).into_owned(),
        app.style("card_title"),
    )));

    if let Some(description) = article.description.as_deref() {
        lines.push(Line::from(Span::styled(
            strip_control_chars(description),
            app.style("card_description"),
        )));
    }
    lines.push(Line::default());

    let extract = strip_control_chars(&article.extract);
    let paras = paragraphs(&extract);
    if paras.is_empty() {
        lines.push(Line::from(Span::styled(
            "No summary available.",
            app.style("metadata"),
        )));
    }
    for (i, para) in paras.into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            para.to_string(),
            app.style("card_extract"),
        )));
    }

    if let Some(thumb) = &article.thumbnail {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(
                "Image ({}x{}): {}",
                thumb.width,
                thumb.height,
                strip_control_chars(&thumb.source)
            ),
            app.style("card_meta"),
        )));
    }

    lines
}

/// Hint shown when a category came back empty, naming the browser key.
fn empty_hint(keybindings: &KeybindingRegistry) -> String {
    match keybindings.key_for(Action::ShowCategories, Context::Feed) {
        Some(key) => format!("No articles here. Press {} to pick another category.", key),
        None => "No articles here. Pick another category above.".to_string(),
    }
}

fn render_centered(f: &mut Frame, area: Rect, line: Line<'_>) {
    if area.height == 0 {
        return;
    }
    let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), middle);
}

/// Previous/next buttons with the position between them.
pub(super) fn render_nav(f: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let session = &app.session;
    let button = |enabled: bool| {
        if enabled {
            app.style("nav_button")
        } else {
            app.style("nav_button_disabled")
        }
    };

    let prev_width = u16::try_from(display_width(PREV_LABEL)).unwrap_or(u16::MAX);
    let next_width = u16::try_from(display_width(NEXT_LABEL)).unwrap_or(u16::MAX);
    if prev_width + next_width > area.width {
        return;
    }

    let prev_area = Rect::new(area.x, area.y, prev_width, 1);
    let next_area = Rect::new(area.right() - next_width, area.y, next_width, 1);
    hits.add(prev_area, Hotspot::PrevButton);
    hits.add(next_area, Hotspot::NextButton);

    f.render_widget(
        Paragraph::new(Span::styled(PREV_LABEL, button(session.has_previous()))),
        prev_area,
    );
    f.render_widget(
        Paragraph::new(Span::styled(NEXT_LABEL, button(session.has_next()))),
        next_area,
    );

    let position = if session.is_empty() {
        String::new()
    } else {
        format!("{} / {}", session.cursor() + 1, session.len())
    };
    let middle = Rect::new(
        area.x + prev_width,
        area.y,
        area.width - prev_width - next_width,
        1,
    );
    f.render_widget(
        Paragraph::new(Span::styled(position, app.style("metadata"))).alignment(Alignment::Center),
        middle,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_hint_names_default_key() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            empty_hint(&reg),
            "No articles here. Press c to pick another category."
        );
    }

    #[test]
    fn empty_hint_follows_rebound_key() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("show_categories".to_string(), "b".to_string());
        assert!(reg.apply_overrides(&overrides).is_empty());
        assert_eq!(
            empty_hint(&reg),
            "No articles here. Press b to pick another category."
        );
    }
}
