//! Command-line interface definitions for the journal crawler.
//!
//! This module defines the CLI arguments using the `clap` crate. The
//! crawler takes a single optional flag capping how many articles a run
//! processes.

use clap::Parser;
use std::num::NonZeroUsize;

/// Command-line arguments for the journal crawler.
///
/// # Examples
///
/// ```sh
/// # Archive the whole journal
/// chatonsky_journal
///
/// # Stop after the twenty newest articles
/// chatonsky_journal --limit 20
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Maximum number of articles to process (default: no limit)
    #[arg(long)]
    pub limit: Option<NonZeroUsize>,
}
