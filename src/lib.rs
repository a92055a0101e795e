//! mangarn - Manga page file name parser and CBZ packager
//!
//! Scanned manga is usually distributed as a flat directory of page images
//! whose names carry the series title, volume, chapter and page number in
//! whatever format the release group chose. This crate infers that metadata
//! from the names alone, groups the pages by volume and chapter, and packages
//! every group into a CBZ archive.
//!
//! # Getting Started
//!
//! ```rust,no_run
//! use mangarn::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> mangarn::error::Result<()> {
//!     let config = MangarnConfig::builder()
//!         .source_path(PathBuf::from("./downloads/a_random_name"))
//!         .output_path(PathBuf::from("output"))
//!         .build()?;
//!
//!     // Inspect what would be written without touching the disk
//!     for bucket in config.plan().await? {
//!         println!("{} ({} pages)", bucket.archive_name(), bucket.entries.len());
//!     }
//!
//!     config.convert().await?;
//!     Ok(())
//! }
//! ```
//!
//! The parser can also be used on its own:
//!
//! ```rust
//! let entry = mangarn::parser::parse("0001_A_Series_name_c001_v01_p000_Source_Quality_Release.jpg");
//! assert_eq!(entry.title(), "A Series name");
//! assert_eq!(entry.page_number(), Some(0));
//! ```

pub mod collector;
pub mod error;
pub mod generator;
pub mod grouping;
pub mod mangarn;
pub mod parser;
pub mod types;

// Publicly expose the main `MangarnConfig` struct and its builder
pub use mangarn::MangarnConfig;
pub use mangarn::MangarnConfigBuilder;

// Re-export core types for direct access
pub use types::{Bucket, Field, ParsedEntry};

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions, allowing
/// you to import everything you need with a single `use mangarn::prelude::*;`.
pub mod prelude {
    pub use super::{
        Bucket, Field, MangarnConfig, MangarnConfigBuilder, ParsedEntry, error, generator, types,
    };
    pub use crate::collector::Collector;
    pub use crate::grouping::group_entries;
    pub use crate::parser::{parse, parse_all, validate};
    pub use std::path::{Path, PathBuf};
}
