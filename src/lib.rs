//! wikiswipe: a full-screen terminal feed of random Wikipedia articles,
//! shown one card at a time and filtered by category.
//!
//! The feed logic ([`feed`], [`session`], [`input`]) is independent of the
//! terminal; [`ui`] drives it from a `tokio` event loop.

pub mod app;
pub mod catalog;
pub mod config;
pub mod feed;
pub mod input;
pub mod keybindings;
pub mod session;
pub mod theme;
pub mod ui;
pub mod util;
pub mod wiki;
