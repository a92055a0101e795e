use crate::error::{Error, Result};
use crate::generator::Generator;
use async_trait::async_trait;
use log::info;
use memmap2::MmapOptions;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::task::spawn_blocking;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A generator for creating CBZ (Comic Book ZIP) files.
///
/// Pages are stored in the order they are added, under the names chosen by
/// the caller.
pub struct Cbz {
    zip: ZipWriter<File>,
    options: SimpleFileOptions,
    path: PathBuf,
    page_count: usize,
}

impl Cbz {
    /// Path of the archive being written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

#[async_trait]
impl Generator for Cbz {
    fn new(output_dir: &Path, base_filename: &str) -> Result<Self> {
        let options: SimpleFileOptions = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        // Ensure output directory exists
        if !output_dir.exists() {
            std::fs::create_dir_all(output_dir)?;
        }

        let path = output_dir.join(format!("{}.cbz", base_filename));
        let file = File::create(&path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create output file '{}': {}", path.display(), e),
            ))
        })?;

        Ok(Cbz {
            zip: ZipWriter::new(file),
            options,
            path,
            page_count: 0,
        })
    }

    async fn add_page(&mut self, source: &Path, entry_name: &str) -> Result<&mut Self> {
        let file = fs::File::open(source).await.map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to open page file '{}': {}", source.display(), e),
            ))
        })?;
        let file_std = file.into_std().await;

        self.zip.start_file(entry_name, self.options)?;

        // Mapping an empty file fails on some platforms.
        if file_std.metadata()?.len() > 0 {
            let mmap = spawn_blocking(move || unsafe { MmapOptions::new().map(&file_std) })
                .await
                .map_err(|e| Error::AsyncTaskError(e.to_string()))??;
            self.zip.write_all(&mmap[..])?;
        }

        info!("Saved '{}' as '{}'", source.display(), entry_name);
        self.page_count += 1;

        Ok(self)
    }

    async fn save(self) -> Result<()> {
        let zip = self.zip;

        // Finish writing the zip file in a blocking task
        spawn_blocking(move || match zip.finish() {
            Ok(_) => Ok(()),
            Err(e) => Err(Error::Zip(e)),
        })
        .await
        .map_err(|e| Error::AsyncTaskError(e.to_string()))??;

        info!(
            "Wrote {} pages to '{}'",
            self.page_count,
            self.path.display()
        );
        Ok(())
    }
}
