//! Plain-text output for extracted articles.
//!
//! Each run writes one UTF-8 file, named with the run's start timestamp so
//! consecutive runs never collide. Records are appended in crawl order and
//! the stream is flushed after every record: an interrupted run leaves all
//! completed records readable on disk.
//!
//! # Record Format
//!
//! ```text
//! === {title} ===
//! Date: {date}
//! URL: {url}
//!
//! {content}
//!
//! ---------
//!
//! ```
//!
//! The format is consumed by humans, but existing readers depend on the
//! exact delimiters and field labels, so they are kept stable.

use crate::config::SITE;
use crate::models::ArticleRecord;
use chrono::{DateTime, Local};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;

/// Build the per-run output filename from a timestamp.
pub fn output_filename(prefix: &str, started_at: &DateTime<Local>) -> String {
    format!("{}_{}.txt", prefix, started_at.format("%Y%m%d_%H%M%S"))
}

/// Create the per-run output file inside the configured output directory.
///
/// # Returns
///
/// The open file and its path, or an error if the file cannot be created.
/// Creation failure is fatal to the run.
pub async fn create_output_file(started_at: &DateTime<Local>) -> io::Result<(File, PathBuf)> {
    let path = Path::new(SITE.output_dir).join(output_filename(SITE.output_prefix, started_at));
    let file = File::create(&path).await?;
    info!(path = %path.display(), "Created output file");
    Ok((file, path))
}

/// Render one article in the fixed record format.
pub fn render_article(record: &ArticleRecord) -> String {
    format!(
        "=== {} ===\nDate: {}\nURL: {}\n\n{}\n\n---------\n\n",
        record.title, record.date, record.url, record.content
    )
}

/// Append one article to the output stream and flush it to storage.
///
/// Write failures propagate and are fatal to the run; everything flushed
/// before the failure stays valid on disk.
pub async fn write_article<W>(out: &mut W, record: &ArticleRecord) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(render_article(record).as_bytes()).await?;
    out.flush().await
}
