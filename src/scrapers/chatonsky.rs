//! Journal scraper for [chatonsky.net](https://chatonsky.net).
//!
//! The journal is a WordPress category listing. Each index page carries a
//! `ul#blog-posts-main` list of article anchors and a `div.nav-previous`
//! link pointing at the next (older) page. Article pages wrap their body
//! in `article.post`, with an `h1.entry-title` heading and an
//! `.entry-date` stamp.
//!
//! # URL Pattern
//!
//! Index pages chain backwards from the category page through the
//! `nav-previous` links. Anchors are resolved against the page URL, so
//! relative hrefs come out absolute.

use crate::config::SITE;
use crate::models::{ArticleRecord, IndexPage};
use crate::scrapers::fetch_page;
use itertools::Itertools;
use once_cell::sync::Lazy;
use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};
use std::error::Error;
use tracing::{debug, info, instrument};
use url::Url;

static CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse(SITE.container_selector).unwrap());
static NEXT_PAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(SITE.next_page_selector).unwrap());
static CONTENT: Lazy<Selector> = Lazy::new(|| Selector::parse(SITE.content_selector).unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse(SITE.title_selector).unwrap());
static DATE: Lazy<Selector> = Lazy::new(|| Selector::parse(SITE.date_selector).unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Fetch one index page and collect its article links.
///
/// # Returns
///
/// The page's [`IndexPage`], or an error if the fetch or the URL parse
/// failed. What a failed page means is the caller's call; the crawl loop
/// treats it as an empty page, which also ends pagination.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn index_page(url: &str) -> Result<IndexPage, Box<dyn Error>> {
    let base = Url::parse(url)?;
    let html = fetch_page(url).await?;
    let page = parse_index(&html, &base);

    info!(
        count = page.links.len(),
        has_next = page.next_page.is_some(),
        "Indexed journal page"
    );
    debug!(links = ?page.links, "Journal links");

    Ok(page)
}

/// Extract ordered article links and the next-page link from index HTML.
///
/// Anchors are read in document order from the article-list container and
/// deduplicated first-occurrence-wins; the dedup is per page, so a link
/// repeated on a later index page is collected again there. A page without
/// the container yields the empty result, next-page link included.
pub fn parse_index(html: &str, base: &Url) -> IndexPage {
    let document = Html::parse_document(html);

    let Some(container) = document.select(&CONTAINER).next() else {
        return IndexPage::default();
    };

    let links = container
        .select(&ANCHOR)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .map(|resolved| resolved.to_string())
        .unique()
        .collect();

    let next_page = document
        .select(&NEXT_PAGE)
        .next()
        .and_then(|nav| nav.select(&ANCHOR).next())
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| base.join(href).ok())
        .map(|resolved| resolved.to_string());

    IndexPage { links, next_page }
}

/// Fetch a single journal article and extract its text.
///
/// # Returns
///
/// `Ok(Some(record))` on success, `Ok(None)` when the page has no article
/// body, or an error if the fetch failed.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_article(url: &str) -> Result<Option<ArticleRecord>, Box<dyn Error>> {
    let html = fetch_page(url).await?;
    let record = parse_article(&html, url);

    match &record {
        Some(record) => info!(
            bytes = record.content.len(),
            title = %record.title,
            "Parsed journal article"
        ),
        None => debug!("Page has no article body"),
    }

    Ok(record)
}

/// Extract title, date, and body text from article HTML.
///
/// Returns `None` when the article body element is missing. Title and date
/// fall back to their placeholders when their elements are absent; an
/// element that is present but empty is kept as-is. The body is the
/// article subtree flattened to text: subtrees of the excluded tags are
/// skipped, every text node is trimmed on its own, and the non-empty
/// fragments are joined with newlines.
pub fn parse_article(html: &str, url: &str) -> Option<ArticleRecord> {
    let document = Html::parse_document(html);
    let article = document.select(&CONTENT).next()?;

    let title = article
        .select(&TITLE)
        .next()
        .map(element_text)
        .unwrap_or_else(|| SITE.untitled_placeholder.to_string());
    let date = article
        .select(&DATE)
        .next()
        .map(element_text)
        .unwrap_or_else(|| SITE.unknown_date_placeholder.to_string());

    let mut fragments = Vec::new();
    collect_text(*article, &mut fragments);

    Some(ArticleRecord {
        title,
        date,
        url: url.to_string(),
        content: fragments.join("\n"),
    })
}

/// Concatenated, trimmed text of one element.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Walk a subtree in document order, keeping trimmed text fragments and
/// skipping everything under an excluded tag.
fn collect_text(node: NodeRef<'_, Node>, fragments: &mut Vec<String>) {
    for child in node.children() {
        match child.value() {
            Node::Element(element) if SITE.excluded_tags.contains(&element.name()) => {}
            Node::Element(_) => collect_text(child, fragments),
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    fragments.push(trimmed.to_string());
                }
            }
            _ => {}
        }
    }
}
