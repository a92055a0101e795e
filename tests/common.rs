//! Common test utilities and constants for the mangarn crate.
//!
//! Provides functions for setting up test directories, creating dummy page
//! files and inspecting the produced archives.

use rand::{Rng, distributions::Alphanumeric};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

#[allow(dead_code)]
pub const TEST_TMP_DIR: &str = "tests/tmp";
#[allow(dead_code)]
pub const TEST_TIMEOUT: Duration = Duration::from_secs(30);

#[allow(dead_code)]
pub struct TestDirs {
    pub test_dir: PathBuf,
    pub source_dir: PathBuf,
}

/// Creates a unique, empty test directory with a `source` subdirectory.
#[allow(dead_code)]
pub async fn setup_test_dirs(sub_path: &str) -> TestDirs {
    let rand_string: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    let unique_sub_path = format!("{}-{}", sub_path, rand_string);
    let test_dir = PathBuf::from(TEST_TMP_DIR).join(unique_sub_path);
    if test_dir.exists() {
        fs::remove_dir_all(&test_dir).await.unwrap();
    }
    let source_dir = test_dir.join("source");
    fs::create_dir_all(&source_dir).await.unwrap();

    TestDirs {
        test_dir,
        source_dir,
    }
}

/// Removes the directory created by [`setup_test_dirs`] for a single test.
#[allow(dead_code)]
pub async fn cleanup_test_dirs(test_dirs: TestDirs) {
    if test_dirs.test_dir.exists() {
        let _ = fs::remove_dir_all(&test_dirs.test_dir).await;
    }
}

/// Helper function to clean up the entire test temporary directory.
#[allow(dead_code)]
pub async fn cleanup_all_test_dirs() {
    let test_dir = PathBuf::from(TEST_TMP_DIR);
    if test_dir.exists() {
        let _ = fs::remove_dir_all(&test_dir).await;
    }
}

/// Writes a small fake page whose content identifies its source name.
#[allow(dead_code)]
pub async fn create_dummy_page(dir: &Path, name: &str) {
    fs::write(dir.join(name), format!("page data for {}", name))
        .await
        .unwrap();
}

/// Returns the entry names of a ZIP archive in storage order.
#[allow(dead_code)]
pub fn zip_entry_names(path: &Path) -> Vec<String> {
    assert!(path.is_file(), "Output archive does not exist: {:?}", path);

    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

/// Reads one entry of a ZIP archive as text.
#[allow(dead_code)]
pub fn read_zip_entry(path: &Path, entry: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut file = archive.by_name(entry).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}
