//! Static configuration for the crawled site.
//!
//! The crawler targets a single site, so every fixed value lives in one
//! [`SiteConfig`] record: the seed URL, the selectors identifying the index
//! container, the pagination link and the article parts, the tags stripped
//! from article bodies, the placeholder strings, the politeness delay, and
//! the output location. The scrapers and the crawl loop read the one
//! [`SITE`] instance instead of scattering literals.

use std::time::Duration;

/// Fixed parameters describing the crawled site and the output layout.
#[derive(Debug)]
pub struct SiteConfig {
    /// Seed index page; pagination starts here.
    pub start_url: &'static str,
    /// Selector for the index page's article-list container.
    pub container_selector: &'static str,
    /// Selector for the "older entries" pagination element.
    pub next_page_selector: &'static str,
    /// Selector for the article body element.
    pub content_selector: &'static str,
    /// Selector for the article heading, inside the content element.
    pub title_selector: &'static str,
    /// Selector for the publication date, inside the content element.
    pub date_selector: &'static str,
    /// Tags whose subtrees never contribute body text.
    pub excluded_tags: &'static [&'static str],
    /// Title used when the heading element is missing.
    pub untitled_placeholder: &'static str,
    /// Date used when the date element is missing.
    pub unknown_date_placeholder: &'static str,
    /// Pause between consecutive HTTP requests.
    pub request_delay: Duration,
    /// Directory receiving the per-run output file.
    pub output_dir: &'static str,
    /// Filename prefix for the per-run output file.
    pub output_prefix: &'static str,
}

/// Site parameters for the chatonsky.net journal, a WordPress category
/// listing.
pub static SITE: SiteConfig = SiteConfig {
    start_url: "https://chatonsky.net/category/journal/",
    container_selector: "ul#blog-posts-main",
    next_page_selector: "div.nav-previous",
    content_selector: "article.post",
    title_selector: "h1.entry-title",
    date_selector: ".entry-date",
    excluded_tags: &["script", "style", "nav", "header", "footer", "aside"],
    untitled_placeholder: "Sans titre",
    unknown_date_placeholder: "Date inconnue",
    request_delay: Duration::from_millis(500),
    output_dir: "output",
    output_prefix: "chatonsky_articles",
};
