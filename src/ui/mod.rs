//! Terminal User Interface module.
//!
//! This module provides the TUI for the article feed, including:
//! - Main event loop (`run`)
//! - Keyboard and mouse input handling
//! - Rendering for the navbar, article card and overlays
//! - Background load event processing
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard and mouse input handling
//! - `events` - Background task event processing
//! - `render` - Layout and render dispatch
//! - `helpers` - Task spawning and panic capture
//! - `navbar` - Category chips and search box
//! - `card` - Article card and navigation buttons
//! - `categories` - Category browser modal
//! - `help` - Keybinding overlay
//! - `status` - Status bar widget

mod card;
mod categories;
mod events;
mod help;
mod helpers;
mod input;
mod loop_runner;
mod navbar;
mod render;
mod status;

// Re-export the public API
pub use helpers::start_category;
pub use loop_runner::{run, Action};
