//! Main event loop for the TUI.
//!
//! This module contains the core event loop that multiplexes terminal input,
//! background task events, and periodic ticks.

use crate::app::{App, AppEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use super::card::SPINNER;
use super::events::handle_app_event;
use super::input::{handle_input, handle_mouse};
use super::render::render;

/// Result of handling a key press event.
///
/// Returned by input handlers to signal whether the application should
/// continue running or terminate gracefully.
pub enum Action {
    /// Continue the event loop and process more events.
    Continue,
    /// Exit the application and restore the terminal.
    Quit,
}

// ============================================================================
// Terminal Guards
// ============================================================================

/// Raw mode plus the alternate screen, released on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Mouse capture, released on drop.
struct MouseCaptureGuard;

impl MouseCaptureGuard {
    fn acquire() -> Result<Self> {
        execute!(io::stdout(), EnableMouseCapture).context("Failed to enable mouse capture")?;
        Ok(Self)
    }
}

impl Drop for MouseCaptureGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture);
    }
}

/// Runs the TUI application event loop.
///
/// Uses `tokio::select!` to multiplex three event sources:
/// - **Terminal input**: Key presses and mouse events from crossterm's async event stream
/// - **Background tasks**: Article loads via the `AppEvent` channel
/// - **Periodic tick**: 250ms timer for status expiry and the loading spinner
///
/// # Panic Safety
///
/// Installs a panic hook that restores terminal state before unwinding,
/// ensuring the terminal is not left in raw mode on panic.
///
/// # Arguments
///
/// * `app` - Mutable application state
/// * `event_tx` - Sender for spawning background tasks
/// * `event_rx` - Receiver for background task completion events
///
/// # Returns
///
/// Returns `Ok(())` on graceful exit (user quit), or an error if terminal
/// setup fails.
pub async fn run(
    app: &mut App,
    event_tx: mpsc::Sender<AppEvent>,
    mut event_rx: mpsc::Receiver<AppEvent>,
) -> Result<()> {
    // Install panic hook BEFORE setting up terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        original_hook(panic_info);
    }));

    // Guards drop in reverse order: mouse capture first, then the screen
    let _screen = TerminalGuard::acquire()?;
    let _mouse = MouseCaptureGuard::acquire()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut event_stream = crossterm::event::EventStream::new();

    let mut tick_interval = tokio::time::interval(Duration::from_millis(250));

    // Signal handlers for graceful shutdown (Unix only)
    // On non-Unix platforms, these become pending futures that never complete
    #[cfg(unix)]
    let mut sigterm = signal(SignalKind::terminate())?;
    #[cfg(unix)]
    let mut sigint = signal(SignalKind::interrupt())?;

    loop {
        // PERF-010: Only render when state has changed
        if app.needs_redraw {
            terminal.draw(|f| render(f, app))?;
            app.needs_redraw = false;
        }

        // Clear expired status messages and trigger redraw if cleared
        if app.clear_expired_status() {
            app.needs_redraw = true;
        }

        // PERF-013: Drain all pending app events before handling more input
        // so load results are not starved by rapid input.
        while let Ok(event) = event_rx.try_recv() {
            handle_app_event(app, event);
        }

        // Platform-specific signal futures
        #[cfg(unix)]
        let sigterm_fut = sigterm.recv();
        #[cfg(not(unix))]
        let sigterm_fut = std::future::pending::<Option<()>>();

        #[cfg(unix)]
        let sigint_fut = sigint.recv();
        #[cfg(not(unix))]
        let sigint_fut = std::future::pending::<Option<()>>();

        tokio::select! {
            biased;  // Process in order listed for predictable behavior

            // Signal handlers for graceful shutdown (highest priority)
            _ = sigterm_fut => {
                tracing::info!("Received SIGTERM, shutting down gracefully");
                break;
            }

            _ = sigint_fut => {
                tracing::info!("Received SIGINT, shutting down gracefully");
                break;
            }

            // Terminal input events
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.needs_redraw = true;
                        if let Action::Quit = handle_input(app, key.code, key.modifiers, &event_tx) {
                            break;
                        }
                    }
                    Some(Ok(Event::Mouse(mouse))) => handle_mouse(app, mouse, &event_tx),
                    Some(Ok(Event::Resize(..))) => app.needs_redraw = true,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Terminal event stream error");
                    }
                    None => {
                        tracing::info!("Terminal event stream closed");
                        break;
                    }
                }
            }

            // Background task events (blocking recv for when queue was empty)
            Some(event) = event_rx.recv() => {
                handle_app_event(app, event);
            }

            // Periodic tick for status expiry and the spinner
            _ = tick_interval.tick() => {
                handle_tick(app);
            }
        }
    }

    abort_loads(app);
    terminal.show_cursor()?;
    Ok(())
}

/// Animate the spinner while any load is in flight.
fn handle_tick(app: &mut App) {
    if app.session.is_loading() || app.session.is_loading_more() {
        app.spinner_frame = (app.spinner_frame + 1) % SPINNER.len();
        app.needs_redraw = true;
    }
}

/// Abort in-flight loads so nothing outlives the loop.
fn abort_loads(app: &mut App) {
    for handle in [app.initial_load_handle.take(), app.more_load_handle.take()]
        .into_iter()
        .flatten()
    {
        handle.abort();
    }
}
