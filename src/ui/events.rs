//! Application event handling.
//!
//! This module processes background load completions and task panics.

use crate::app::{App, AppEvent};

/// Handle application events from background tasks.
///
/// Results carry the generation they were issued for; the pager drops any
/// result that belongs to a superseded category.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::InitialLoaded { generation, load } => {
            tracing::debug!(
                generation,
                count = load.articles.len(),
                failed = load.error.is_some(),
                "Initial load finished"
            );
            app.finish_initial(generation, load);
        }
        AppEvent::MoreLoaded { generation, load } => {
            tracing::debug!(
                generation,
                count = load.articles.len(),
                retried = load.retried,
                "Background load finished"
            );
            app.finish_more(generation, load);
        }
        AppEvent::TaskPanicked {
            task,
            generation,
            error,
        } => {
            tracing::error!(task, generation, error, "Background task panicked");
            app.abandon_load(generation);
            app.set_status(format!("Internal error in {} task", task));
        }
    }
    app.needs_redraw = true;
}
