//! Output generation for crawled articles.
//!
//! One submodule for now:
//!
//! - [`text`]: appends extracted articles to the per-run plain-text file
//!
//! # Output Structure
//!
//! ```text
//! output/
//! └── chatonsky_articles_20240512_093000.txt
//! ```

pub mod text;
