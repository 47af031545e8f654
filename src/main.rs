//! # Chatonsky Journal
//!
//! Archives the "journal" category of [chatonsky.net](https://chatonsky.net)
//! into a single plain-text file per run.
//!
//! ## Usage
//!
//! ```sh
//! chatonsky_journal --limit 20
//! ```
//!
//! ## Architecture
//!
//! The crawl runs two strictly sequential phases:
//! 1. **Indexing**: follow the paginated journal index and collect article
//!    URLs in document order
//! 2. **Extraction**: fetch each article, extract title/date/body text,
//!    and append it to the output file, flushing after every record
//!
//! Requests are sequential with a fixed politeness delay between them. A
//! page or article that fails is logged and skipped, never retried; only
//! output-file problems abort the run.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use config::SITE;
use models::IndexPage;
use outputs::text::{create_output_file, write_article};
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!(start_url = SITE.start_url, "journal crawl starting up");

    let args = Cli::parse();
    debug!(?args.limit, "Parsed CLI arguments");

    // Early check: the whole run is pointless if the output can't be written
    if let Err(e) = ensure_writable_dir(SITE.output_dir).await {
        error!(
            path = SITE.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }
    let started_at = Local::now();

    // ---- Phase 1: collect article links ----
    info!("Collecting article links");
    let mut all_links: Vec<String> = Vec::new();
    let mut current_url = Some(SITE.start_url.to_string());

    while let Some(url) = current_url {
        let page = match scrapers::chatonsky::index_page(&url).await {
            Ok(page) => page,
            Err(e) => {
                error!(%url, error = %e, "Failed to index page; ending pagination");
                IndexPage::default()
            }
        };
        info!(count = page.links.len(), %url, "Found articles on page");
        all_links.extend(page.links);

        if let Some(limit) = args.limit {
            if all_links.len() >= limit.get() {
                all_links.truncate(limit.get());
                break;
            }
        }

        current_url = page.next_page;
        if current_url.is_some() {
            sleep(SITE.request_delay).await;
        }
    }

    // ---- Phase 2: extract and write articles ----
    let total = all_links.len();
    info!(total, "Processing articles");

    let (mut out, output_path) = create_output_file(&started_at).await?;

    for (i, url) in all_links.iter().enumerate() {
        info!(article = i + 1, total, %url, "Processing article");
        match scrapers::chatonsky::fetch_article(url).await {
            Ok(Some(record)) => write_article(&mut out, &record).await?,
            Ok(None) => warn!(%url, "Article body not found; skipping"),
            Err(e) => error!(%url, error = %e, "Failed to fetch article; skipping"),
        }
        sleep(SITE.request_delay).await;
    }

    let elapsed = start_time.elapsed();
    info!(
        path = %output_path.display(),
        articles = total,
        ?elapsed,
        "Finished; output saved"
    );

    Ok(())
}
