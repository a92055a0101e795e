//! Generator module provides the trait and implementation for archive generators.
//!
//! A generator receives the pages of one bucket, each under the entry name it
//! should be stored as, and writes a single page-container file.

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub mod cbz;

/// Common interface for archive generators.
#[async_trait]
pub trait Generator {
    /// Creates a new generator instance.
    ///
    /// # Parameters
    /// * `output_dir` - Directory where the generated file will be saved, created if absent
    /// * `base_filename` - Base name of the output file without extension (e.g., "My Series Vol.1 Ch.3")
    ///
    /// # Returns
    /// * `Result<Self>` - A new generator instance or an error if creation fails
    fn new(output_dir: &Path, base_filename: &str) -> Result<Self>
    where
        Self: Sized;

    /// Copies `source` into the archive as `entry_name`.
    ///
    /// # Parameters
    /// * `source` - Path of the page file to copy
    /// * `entry_name` - Name of the entry inside the archive (e.g., "Image 3.jpg")
    ///
    /// # Returns
    /// * `Result<&mut Self>` - Self reference for method chaining, or an error if failed
    async fn add_page(&mut self, source: &Path, entry_name: &str) -> Result<&mut Self>
    where
        Self: Sized;

    /// Finalizes and saves the document to disk.
    async fn save(self) -> Result<()>;
}
