use crate::app::App;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Use Cow to avoid allocations for static strings and borrowed status messages
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.browser.is_some() {
        Cow::Borrowed("Type to filter | Up/Down move | ENTER select/expand | ESC close")
    } else if app.search.is_some() {
        Cow::Borrowed("Type to filter | Tab/Shift+Tab next/prev | ENTER select | ESC cancel")
    } else {
        Cow::Borrowed("[j/k]next/prev [1-8]category [c]ategories [/]search [o]pen [T]heme [?]help [q]uit")
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}
