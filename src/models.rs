//! Data models for crawled index pages and extracted articles.
//!
//! Two shapes move through the pipeline:
//! - [`IndexPage`]: one pagination step's harvest — the article links found
//!   on an index page plus the link to the next (older) page, if any
//! - [`ArticleRecord`]: one extracted article, ready for the text writer

use serde::{Deserialize, Serialize};

/// The harvest of a single index page.
///
/// Produced by the link collector and consumed within one pagination step.
/// The empty value doubles as the "failed page" result, which also ends
/// pagination since `next_page` is `None`.
#[derive(Debug, Default)]
pub struct IndexPage {
    /// Article URLs in document order, first occurrence of each only.
    pub links: Vec<String>,
    /// URL of the next (older) index page, when the site offers one.
    pub next_page: Option<String>,
}

/// One extracted article.
///
/// Built by the article extractor with every field populated (title and
/// date fall back to placeholders when the page lacks them), then written
/// out exactly once and dropped.
#[derive(Debug, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// Article heading, or the configured placeholder.
    pub title: String,
    /// Publication date as printed on the page, or the placeholder.
    pub date: String,
    /// The URL the article was fetched from.
    pub url: String,
    /// Body text, one trimmed text fragment per line.
    pub content: String,
}
