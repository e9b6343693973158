//! Utility functions for common operations.
//!
//! - **URL handling**: building article links and vetting them before they
//!   reach the system browser
//! - **Text processing**: Unicode-aware width and truncation, and scrubbing of
//!   terminal control sequences from fetched text
//!
//! # Examples
//!
//! ```
//! use wikiswipe::util::{article_url, display_width, truncate_to_width};
//!
//! let url = article_url("https://en.wikipedia.org/wiki/", "Alan Turing").unwrap();
//! assert_eq!(url.as_str(), "https://en.wikipedia.org/wiki/Alan_Turing");
//!
//! assert_eq!(display_width("Hello"), 5);
//! assert_eq!(truncate_to_width("Long article title", 10), "Long ar...");
//! ```

mod text;
mod url_validator;

pub use text::{display_width, paragraphs, strip_control_chars, truncate_to_width};
pub use url_validator::{article_url, validate_url_for_open, UrlValidationError};

/// Maximum length of a category search query typed into the navbar or the
/// category browser.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 64;
