//! Helper functions for UI operations.
//!
//! This module contains utility functions shared across the UI layer,
//! including load spawning, feed navigation and opening articles.

use crate::app::{App, AppEvent};
use crate::catalog::Category;
use crate::feed::{load_initial, load_more, InitialRequest, MoreRequest};
use crate::input::Intent;
use crate::util::validate_url_for_open;
use crate::wiki::WikiClient;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Wraps a future to catch panics and convert them to errors.
///
/// This function enables graceful handling of panics in spawned background tasks.
/// Instead of the task silently disappearing (caught by Tokio's runtime but not
/// handled), panics are converted to `Err(String)` containing the panic message.
///
/// # Returns
///
/// - `Ok(result)` if the future completes normally
/// - `Err(panic_message)` if the future panics
pub(super) async fn catch_task_panic<F, T>(future: F) -> Result<T, String>
where
    F: std::future::Future<Output = T>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|panic| {
            if let Some(s) = panic.downcast_ref::<&'static str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else if let Some(e) = panic.downcast_ref::<Box<dyn std::error::Error + Send>>() {
                e.to_string()
            } else {
                format!("Unknown panic: {:?}", (*panic).type_id())
            }
        })
}

/// Send an event to the loop, logging if the receiver is gone.
async fn send_event(tx: &mpsc::Sender<AppEvent>, event: AppEvent, name: &'static str) {
    if let Err(e) = tx.send(event).await {
        tracing::warn!(error = %e, event = name, "Channel send failed (receiver dropped)");
    }
}

// ============================================================================
// Load Tasks
// ============================================================================

/// Spawn the two-batch initial load for a freshly selected category.
///
/// Sends `AppEvent::InitialLoaded` tagged with the request's generation, or
/// `AppEvent::TaskPanicked` if the load panics.
pub(super) fn spawn_initial_load(
    source: Arc<WikiClient>,
    request: InitialRequest,
    tx: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let generation = request.generation;
        tracing::debug!(generation, query = request.query, "Initial load started");

        match catch_task_panic(load_initial(source.as_ref(), &request)).await {
            Ok(load) => {
                send_event(&tx, AppEvent::InitialLoaded { generation, load }, "InitialLoaded")
                    .await;
            }
            Err(error) => {
                tracing::error!(error = %error, "Initial load task panicked");
                let event = AppEvent::TaskPanicked {
                    task: "initial_load",
                    generation,
                    error,
                };
                send_event(&tx, event, "TaskPanicked").await;
            }
        }
    })
}

/// Spawn a background prefetch of one more batch.
pub(super) fn spawn_load_more(
    source: Arc<WikiClient>,
    request: MoreRequest,
    tx: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let generation = request.generation;
        tracing::debug!(
            generation,
            known = request.known.len(),
            "Background load started"
        );

        match catch_task_panic(load_more(source.as_ref(), &request)).await {
            Ok(load) => {
                send_event(&tx, AppEvent::MoreLoaded { generation, load }, "MoreLoaded").await;
            }
            Err(error) => {
                tracing::error!(error = %error, "Background load task panicked");
                let event = AppEvent::TaskPanicked {
                    task: "load_more",
                    generation,
                    error,
                };
                send_event(&tx, event, "TaskPanicked").await;
            }
        }
    })
}

// ============================================================================
// Feed Actions
// ============================================================================

/// Switch the feed to `category` and start its initial load.
///
/// Any load still running for the previous category is aborted; its result
/// would be discarded by the generation check anyway.
pub fn start_category(
    app: &mut App,
    category: &'static Category,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    let request = app.begin_category(category);
    app.needs_redraw = true;
    app.initial_load_handle = Some(spawn_initial_load(
        Arc::clone(&app.source),
        request,
        event_tx.clone(),
    ));
}

/// Apply a navigation intent, spawning a prefetch when the pager asks for one.
pub(super) fn navigate(app: &mut App, intent: Intent, event_tx: &mpsc::Sender<AppEvent>) {
    if let Some(request) = app.apply_intent(intent) {
        app.more_load_handle = Some(spawn_load_more(
            Arc::clone(&app.source),
            request,
            event_tx.clone(),
        ));
        app.needs_redraw = true;
    }
}

/// Open the current article's page in the system browser.
pub(super) fn open_current_article(app: &mut App) {
    let url = match app.current_article_url() {
        None => return,
        Some(Err(e)) => {
            app.set_status(format!("Cannot open article: {}", e));
            return;
        }
        Some(Ok(url)) => url,
    };

    // SEC: Validate URL before open::that() to prevent command injection
    if let Err(e) = validate_url_for_open(url.as_str()) {
        app.set_status(e.to_string());
    } else if let Err(e) = open::that(url.as_str()) {
        app.set_status(format!("Failed to open browser: {}", e));
    } else {
        tracing::info!(url = %url, "Opened article in browser");
        app.set_status("Opening article in browser...");
    }
}
