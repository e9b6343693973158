use serde::Deserialize;
use std::collections::BTreeMap;

/// Thumbnail image attached to a page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Thumbnail {
    pub source: String,
    pub width: u32,
    pub height: u32,
}

/// Normalized article record produced by the fetcher.
///
/// `page_id` is the endpoint's page identifier and can repeat across fetches
/// (randomized offsets overlap). `uid` combines it with the fetch stamp and is
/// unique within one loaded session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    /// Plain-text intro; may be empty.
    pub extract: String,
    pub thumbnail: Option<Thumbnail>,
    pub description: Option<String>,
    pub page_id: u64,
    pub uid: String,
}

impl Article {
    /// Build the local unique id from the page id and fetch stamp (ms).
    pub fn make_uid(page_id: u64, fetched_at_ms: i64) -> String {
        format!("{}-{}", page_id, fetched_at_ms)
    }
}

// ============================================================================
// Wire format
// ============================================================================

/// Top-level search response. Only `query.pages` is consumed.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub query: Option<QueryBlock>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QueryBlock {
    /// Keyed by page id; numeric keys keep the endpoint's id order.
    #[serde(default)]
    pub pages: Option<BTreeMap<i64, RawPage>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPage {
    pub pageid: Option<u64>,
    pub title: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RawPage {
    /// Convert into an `Article`, or `None` when the page lacks an id or title.
    pub(crate) fn into_article(self, fetched_at_ms: i64) -> Option<Article> {
        let page_id = self.pageid?;
        let title = self.title?;
        Some(Article {
            title,
            extract: self.extract.unwrap_or_default(),
            thumbnail: self.thumbnail,
            description: self.description.filter(|d| !d.trim().is_empty()),
            page_id,
            uid: Article::make_uid(page_id, fetched_at_ms),
        })
    }
}

impl SearchResponse {
    /// Flatten into articles. A missing `query.pages` is an empty result.
    pub(crate) fn into_articles(self, fetched_at_ms: i64) -> Vec<Article> {
        let Some(pages) = self.query.and_then(|q| q.pages) else {
            return Vec::new();
        };
        pages
            .into_values()
            .filter_map(|page| page.into_article(fetched_at_ms))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_pages_is_empty() {
        let resp: SearchResponse = serde_json::from_str(r#"{"batchcomplete":""}"#).unwrap();
        assert!(resp.into_articles(1).is_empty());

        let resp: SearchResponse = serde_json::from_str(r#"{"query":{}}"#).unwrap();
        assert!(resp.into_articles(1).is_empty());
    }

    #[test]
    fn pages_are_ordered_numerically() {
        let json = r#"{"query":{"pages":{
            "100":{"pageid":100,"title":"Hundred"},
            "9":{"pageid":9,"title":"Nine"}
        }}}"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        let titles: Vec<_> = resp.into_articles(5).into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["Nine", "Hundred"]);
    }

    #[test]
    fn maps_all_fields() {
        let json = r#"{"query":{"pages":{"42":{
            "pageid":42,
            "title":"Answer",
            "extract":"The answer.",
            "description":"a number",
            "thumbnail":{"source":"https://upload.example/42.png","width":800,"height":600}
        }}}}"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        let articles = resp.into_articles(1_700_000_000_000);
        assert_eq!(
            articles,
            vec![Article {
                title: "Answer".to_string(),
                extract: "The answer.".to_string(),
                thumbnail: Some(Thumbnail {
                    source: "https://upload.example/42.png".to_string(),
                    width: 800,
                    height: 600,
                }),
                description: Some("a number".to_string()),
                page_id: 42,
                uid: "42-1700000000000".to_string(),
            }]
        );
    }

    #[test]
    fn unusable_pages_are_skipped() {
        let json = r#"{"query":{"pages":{
            "-1":{"title":"Missing","missing":""},
            "7":{"pageid":7},
            "8":{"pageid":8,"title":"Kept"}
        }}}"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        let articles = resp.into_articles(1);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].page_id, 8);
        assert_eq!(articles[0].extract, "");
        assert_eq!(articles[0].description, None);
    }
}
