//! Navbar: app title, category chips and the inline search box.

use crate::app::{App, HitMap, Hotspot, SearchBox};
use crate::catalog;
use crate::util::{display_width, truncate_to_width};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TITLE: &str = " WikiSwipe ";

/// Lays spans out left to right, recording a hotspot per chip.
struct ChipRow<'a> {
    spans: Vec<Span<'a>>,
    area: Rect,
    x: u16,
}

impl<'a> ChipRow<'a> {
    fn new(area: Rect) -> Self {
        Self {
            spans: Vec::new(),
            area,
            x: 0,
        }
    }

    fn room(&self) -> u16 {
        self.area.width.saturating_sub(self.x)
    }

    /// Append `text`. Returns false (and appends nothing) when it does not fit.
    fn push(
        &mut self,
        text: String,
        style: Style,
        spot: Option<Hotspot>,
        hits: &mut HitMap,
    ) -> bool {
        let width = u16::try_from(display_width(&text)).unwrap_or(u16::MAX);
        if width > self.room() {
            return false;
        }
        if let Some(spot) = spot {
            hits.add(
                Rect::new(self.area.x + self.x, self.area.y, width, 1),
                spot,
            );
        }
        self.x += width;
        self.spans.push(Span::styled(text, style));
        true
    }

    fn gap(&mut self) {
        if self.room() > 0 {
            self.x += 1;
            self.spans.push(Span::raw(" "));
        }
    }

    fn into_line(self) -> Line<'a> {
        Line::from(self.spans)
    }
}

pub(super) fn render(f: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let mut row = ChipRow::new(area);
    row.push(TITLE.to_string(), app.style("heading"), None, hits);
    row.gap();

    match &app.search {
        Some(search) => search_chips(&mut row, app, search, hits),
        None => popular_chips(&mut row, app, hits),
    }

    f.render_widget(Paragraph::new(row.into_line()), area);
}

fn popular_chips(row: &mut ChipRow<'_>, app: &App, hits: &mut HitMap) {
    let selected = app.session.category().id;

    // Reserve room for the trailing chips so they are never pushed off
    let trailing = [(" More ", Hotspot::MoreChip), (" Search ", Hotspot::SearchChip)];
    let reserved: u16 = trailing
        .iter()
        .map(|(label, _)| label.len() as u16 + 1)
        .sum();

    for (i, category) in catalog::popular().enumerate() {
        let label = format!(" {} {} ", i + 1, category.name);
        if display_width(&label) as u16 + 1 + reserved > row.room() {
            break;
        }
        let style = if category.id == selected {
            app.style("chip_selected")
        } else {
            app.style("chip")
        };
        row.push(label, style, Some(Hotspot::Chip(category)), hits);
        row.gap();
    }

    for (label, spot) in trailing {
        row.push(label.to_string(), app.style("chip"), Some(spot), hits);
        row.gap();
    }
}

fn search_chips(row: &mut ChipRow<'_>, app: &App, search: &SearchBox, hits: &mut HitMap) {
    let query = truncate_to_width(&search.query, 24);
    row.push(
        format!("Search: {}_", query),
        app.style("input"),
        Some(Hotspot::SearchInput),
        hits,
    );
    row.gap();

    let matches = search.matches();
    if matches.is_empty() {
        row.push("no matches".to_string(), app.style("metadata"), None, hits);
        return;
    }

    // Keep the highlighted chip on screen
    let start = search.highlighted.saturating_sub(3);
    if start > 0 {
        row.push("<".to_string(), app.style("metadata"), None, hits);
        row.gap();
    }

    let selected = app.session.category().id;
    let total = matches.len();
    for (i, category) in matches.into_iter().enumerate().skip(start) {
        let style = if i == search.highlighted {
            app.style("chip_highlight")
        } else if category.id == selected {
            app.style("chip_selected")
        } else {
            app.style("chip")
        };
        if !row.push(
            format!(" {} ", category.name),
            style,
            Some(Hotspot::Chip(category)),
            hits,
        ) {
            row.push(format!("+{}", total - i), app.style("metadata"), None, hits);
            break;
        }
        row.gap();
    }
}
