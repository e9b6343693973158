//! Wikipedia search client and article records.

pub mod client;
pub mod types;

pub use client::{ArticleSource, FetchError, WikiClient, DEFAULT_API_BASE};
pub use types::{Article, Thumbnail};
