//! Page file collection.
//!
//! Lists the page files of a single directory. Subdirectories and operating
//! system metadata files are skipped; every remaining name is handed verbatim
//! to the parser.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::fs::read_dir;

use crate::error::{Error, Result};

/// File names skipped by default while collecting pages.
pub const DEFAULT_IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini"];

/// Collects page file names from a directory
#[derive(Debug)]
pub struct Collector<'a> {
    base_directory: &'a Path,
    ignored_files: &'a [String],
}

impl<'a> Collector<'a> {
    /// Creates a new Collector instance for the specified directory.
    ///
    /// # Arguments
    ///
    /// * `base_directory` - Directory holding the page files
    /// * `ignored_files` - Exact file names to skip
    pub fn new(base_directory: &'a Path, ignored_files: &'a [String]) -> Self {
        Self {
            base_directory,
            ignored_files,
        }
    }

    /// Returns the names of all regular files directly inside the base directory.
    ///
    /// Names are sorted so that logs and error reports are reproducible.
    ///
    /// # Returns
    ///
    /// * `Result<Vec<String>>` - File names relative to the base directory
    pub async fn collect_file_names(&self) -> Result<Vec<String>> {
        let mut entries = read_dir(self.base_directory).await.map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read directory '{}': {}",
                    self.base_directory.display(),
                    e
                ),
            ))
        })?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                continue;
            }

            let name = entry.file_name().into_string().map_err(|raw| {
                Error::InvalidPath(
                    PathBuf::from(raw),
                    "File name is not valid UTF-8".to_string(),
                )
            })?;

            if self.is_ignored(&name) {
                debug!("Skipping ignored file '{}'", name);
                continue;
            }

            names.push(name);
        }

        names.sort();
        debug!(
            "Collected {} files from '{}'",
            names.len(),
            self.base_directory.display()
        );
        Ok(names)
    }

    fn is_ignored(&self, name: &str) -> bool {
        self.ignored_files.iter().any(|ignored| ignored == name)
    }
}
