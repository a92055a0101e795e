use log::info;
use std::path::{Path, PathBuf};

use crate::collector::{Collector, DEFAULT_IGNORED_FILES};
use crate::error::{Error, Result};
use crate::generator::{Generator, cbz::Cbz};
use crate::grouping::group_entries;
use crate::parser::parse_all;
use crate::types::{Bucket, ParsedEntry};

/// Configuration of a mangarn run, built declaratively using the builder pattern.
///
/// A run reads every page file of `source_path`, infers its metadata from the
/// file name, and writes one CBZ archive per `(volume, chapter)` into
/// `output_path`:
///
/// - [`scan`](MangarnConfig::scan): collect and parse file names
/// - [`plan`](MangarnConfig::plan): scan, validate and group into buckets
/// - [`convert`](MangarnConfig::convert): plan and write the archives
///
/// ```rust,no_run
/// # use mangarn::prelude::*;
/// # #[tokio::main]
/// # async fn main() -> mangarn::error::Result<()> {
/// let config = MangarnConfig::builder()
///     .source_path(PathBuf::from("./downloads/series"))
///     .build()?;
///
/// let written = config.convert().await?;
/// println!("Wrote {} archives", written.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, derive_builder::Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MangarnConfig {
    /// Directory holding the page files. Subdirectories are not scanned.
    #[builder(default = "PathBuf::from(\".\")")]
    pub source_path: PathBuf,

    /// Directory receiving the archives, created if absent.
    ///
    /// A relative path is resolved against [`source_path`](MangarnConfig::source_path).
    #[builder(default = "PathBuf::from(\"output\")")]
    pub output_path: PathBuf,

    /// Exact file names skipped while collecting pages (e.g. `.DS_Store`).
    #[builder(default = "DEFAULT_IGNORED_FILES.iter().map(|s| s.to_string()).collect()")]
    pub ignored_files: Vec<String>,
}

impl MangarnConfig {
    /// Creates a new builder for configuring `MangarnConfig`.
    pub fn builder() -> MangarnConfigBuilder {
        MangarnConfigBuilder::default()
    }

    /// Directory the archives are written to.
    pub fn output_directory(&self) -> PathBuf {
        if self.output_path.is_absolute() {
            self.output_path.clone()
        } else {
            self.source_path.join(&self.output_path)
        }
    }

    /// Checks that the source path is an existing directory.
    pub fn preflight_check(&self) -> Result<&Self> {
        if !self.source_path.exists() {
            return Err(Error::NotFound(format!(
                "Source path does not exist: {:?}",
                self.source_path
            )));
        }
        if !self.source_path.is_dir() {
            return Err(Error::InvalidPath(
                self.source_path.clone(),
                "Source path is not a directory.".to_string(),
            ));
        }

        Ok(self)
    }

    /// Collects the page file names of the source directory and parses them.
    ///
    /// Fails with [`Error::TitleNotFound`] as soon as one name has no title.
    pub async fn scan(&self) -> Result<Vec<ParsedEntry>> {
        self.preflight_check()?;

        let collector = Collector::new(&self.source_path, &self.ignored_files);
        let names = collector.collect_file_names().await?;

        parse_all(&names)
    }

    /// Scans the source directory and groups the pages into buckets, one per archive.
    pub async fn plan(&self) -> Result<Vec<Bucket>> {
        let entries = self.scan().await?;
        group_entries(entries)
    }

    /// Runs the whole pipeline and returns the paths of the written archives.
    ///
    /// Archives are written one bucket at a time. The first failure stops the
    /// run; archives written before it are kept.
    pub async fn convert(&self) -> Result<Vec<PathBuf>> {
        let buckets = self.plan().await?;
        let output_directory = self.output_directory();

        let mut written = Vec::with_capacity(buckets.len());
        for bucket in &buckets {
            written.push(self.write_bucket(&output_directory, bucket).await?);
        }

        info!(
            "Wrote {} archives to '{}'",
            written.len(),
            output_directory.display()
        );
        Ok(written)
    }

    async fn write_bucket(&self, output_directory: &Path, bucket: &Bucket) -> Result<PathBuf> {
        info!(
            "Writing {} pages to '{}'",
            bucket.entries.len(),
            bucket.archive_name()
        );

        let mut generator = Cbz::new(output_directory, &bucket.base_name())?;
        for entry in &bucket.entries {
            let source = self.source_path.join(entry.file_name());
            generator
                .add_page(&source, &Bucket::entry_name(entry)?)
                .await?;
        }

        let path = generator.path().to_path_buf();
        generator.save().await?;
        Ok(path)
    }
}

impl MangarnConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(source_path) = &self.source_path {
            if source_path.as_os_str().is_empty() {
                return Err("Source path must not be empty".to_string());
            }
        }
        if let Some(output_path) = &self.output_path {
            if output_path.as_os_str().is_empty() {
                return Err("Output path must not be empty".to_string());
            }
        }
        if let Some(ignored_files) = &self.ignored_files {
            if ignored_files.iter().any(|name| name.is_empty()) {
                return Err("Ignored file names must not be empty".to_string());
            }
        }

        Ok(())
    }
}
