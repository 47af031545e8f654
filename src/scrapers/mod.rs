//! Scraping of the journal's index and article pages.
//!
//! The crawl follows a two-phase pattern:
//!
//! 1. **Indexing**: walk the paginated index and collect article URLs
//! 2. **Fetching**: download each article and extract its text
//!
//! The [`chatonsky`] module implements both phases for the journal. The
//! shared [`fetch_page`] helper performs the single GET that every page
//! load goes through.
//!
//! Failed fetches surface as errors and are handled by the caller: one bad
//! page or article is logged and skipped, never retried.

use std::error::Error;

pub mod chatonsky;

/// Fetch one page and return its body as text.
///
/// Non-success statuses are turned into errors, so callers only ever see a
/// body for pages that actually loaded.
pub async fn fetch_page(url: &str) -> Result<String, Box<dyn Error>> {
    let response = reqwest::get(url).await?.error_for_status()?;
    Ok(response.text().await?)
}
