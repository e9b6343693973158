use thiserror::Error;
use url::Url;

/// Errors from validating a URL before handing it to the system browser.
#[derive(Error, Debug)]
pub enum UrlValidationError {
    /// The URL string could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    /// The base cannot carry path segments (e.g. `mailto:`).
    #[error("URL cannot be used as a base: {0}")]
    NotABase(String),
    #[error("Empty article title")]
    EmptyTitle,
}

/// Validate a URL for opening in the browser.
///
/// Only http/https are allowed so a crafted link can never launch a local
/// handler (`file://`, `javascript:`, custom schemes).
///
/// ```
/// use wikiswipe::util::validate_url_for_open;
///
/// assert!(validate_url_for_open("https://en.wikipedia.org/wiki/Chess").is_ok());
/// assert!(validate_url_for_open("file:///etc/passwd").is_err());
/// ```
pub fn validate_url_for_open(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(UrlValidationError::UnsupportedScheme(scheme.to_owned())),
    }
}

/// Build the article page URL: `base` with `title` appended as one
/// percent-encoded path segment.
///
/// Spaces become underscores the way article paths are written; any `/` in
/// the title stays inside the segment.
pub fn article_url(base: &str, title: &str) -> Result<Url, UrlValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(UrlValidationError::EmptyTitle);
    }

    let mut url = validate_url_for_open(base)?;
    url.path_segments_mut()
        .map_err(|_| UrlValidationError::NotABase(base.to_owned()))?
        .pop_if_empty()
        .push(&title.replace(' ', "_"));
    Ok(url)
}
