//! Validation and bucketing of parsed entries.
//!
//! A run processes exactly one series. The whole set of entries is rejected if
//! any entry disagrees with the first one on the title or lacks a page number;
//! otherwise entries are bucketed by volume, then by chapter, and each bucket
//! becomes one archive.

use std::collections::{BTreeMap, HashSet};

use log::debug;

use crate::error::{Error, Result};
use crate::types::{Bucket, Field, ParsedEntry};

/// Validates `entries` and groups them into buckets ordered by volume, then chapter.
///
/// # Errors
///
/// * [`Error::NoPages`] - `entries` is empty
/// * [`Error::TitleNotFound`] - an entry has an empty title
/// * [`Error::TitleMismatch`] - an entry's title differs from the first entry's
/// * [`Error::FieldUndetermined`] - an entry has no page number
/// * [`Error::DuplicatePage`] - two entries of one bucket map to the same archive entry
pub fn group_entries(entries: Vec<ParsedEntry>) -> Result<Vec<Bucket>> {
    let title = match entries.first() {
        Some(first) => first.title().to_string(),
        None => return Err(Error::NoPages),
    };

    let mut volumes: BTreeMap<u64, BTreeMap<u64, Vec<ParsedEntry>>> = BTreeMap::new();
    for entry in entries {
        if entry.title().is_empty() {
            return Err(Error::TitleNotFound(entry.file_name().to_string()));
        }
        if entry.title() != title {
            return Err(Error::TitleMismatch {
                expected: title,
                found: entry.title().to_string(),
                file_name: entry.file_name().to_string(),
            });
        }

        // Volume and chapter default to 0, which is accepted.
        entry.require(Field::PageNumber)?;

        volumes
            .entry(entry.volume())
            .or_default()
            .entry(entry.chapter())
            .or_default()
            .push(entry);
    }

    let mut buckets = Vec::new();
    for (volume, chapters) in volumes {
        for (chapter, mut pages) in chapters {
            pages.sort_by(|a, b| {
                a.page_number()
                    .cmp(&b.page_number())
                    .then_with(|| a.absolute_page_number().cmp(&b.absolute_page_number()))
                    .then_with(|| a.file_name().cmp(b.file_name()))
            });

            let bucket = Bucket {
                title: title.clone(),
                volume,
                chapter,
                entries: pages,
            };
            check_unique_entry_names(&bucket)?;

            debug!(
                "Grouped {} pages into '{}'",
                bucket.entries.len(),
                bucket.archive_name()
            );
            buckets.push(bucket);
        }
    }

    Ok(buckets)
}

fn check_unique_entry_names(bucket: &Bucket) -> Result<()> {
    let mut seen = HashSet::with_capacity(bucket.entries.len());
    for entry in &bucket.entries {
        let name = Bucket::entry_name(entry)?;
        if !seen.insert(name.clone()) {
            return Err(Error::DuplicatePage {
                archive: bucket.archive_name(),
                entry: name,
            });
        }
    }
    Ok(())
}
