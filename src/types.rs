//! Core data types for the mangarn library.
//!
//! This module defines the fundamental data structures used throughout mangarn:
//! - The parser output (`ParsedEntry`)
//! - Field identifiers used in error reporting (`Field`)
//! - Groups of entries destined for one archive (`Bucket`)

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// Identifies one of the numeric fields of a [`ParsedEntry`].
///
/// Only `PageNumber` and `AbsolutePageNumber` can be undetermined. Volume and
/// chapter default to `0`, so [`ParsedEntry::require`] never fails for them.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    Volume,
    Chapter,
    PageNumber,
    AbsolutePageNumber,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Volume => "volume",
            Field::Chapter => "chapter",
            Field::PageNumber => "page number",
            Field::AbsolutePageNumber => "absolute page number",
        };
        f.write_str(name)
    }
}

/// Metadata inferred from a single page file name.
///
/// Volume and chapter fall back to `0` when no marker is present. Page numbers
/// are optional because `0` is a legitimate page index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedEntry {
    file_name: String,
    title: String,
    volume: u64,
    chapter: u64,
    page_number: Option<u64>,
    absolute_page_number: Option<u64>,
}

impl ParsedEntry {
    pub(crate) fn new(
        file_name: String,
        title: String,
        volume: u64,
        chapter: u64,
        page_number: Option<u64>,
        absolute_page_number: Option<u64>,
    ) -> Self {
        Self {
            file_name,
            title,
            volume,
            chapter,
            page_number,
            absolute_page_number,
        }
    }

    /// The original file name, verbatim.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The inferred series title. Empty when no title could be found.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The inferred volume, `0` when undetermined.
    pub fn volume(&self) -> u64 {
        self.volume
    }

    /// The inferred chapter, `0` when the series has no chapter segmentation.
    pub fn chapter(&self) -> u64 {
        self.chapter
    }

    /// Page number relative to the chapter.
    pub fn page_number(&self) -> Option<u64> {
        self.page_number
    }

    /// Page number relative to the whole series.
    pub fn absolute_page_number(&self) -> Option<u64> {
        self.absolute_page_number
    }

    /// Extension of the original file name including the leading dot, or an
    /// empty string when the file has none.
    pub fn extension(&self) -> String {
        Path::new(&self.file_name)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }

    /// Returns the value of `field`, failing with [`Error::FieldUndetermined`]
    /// when it could not be inferred.
    ///
    /// Volume and chapter always have a value since `0` is their default.
    pub fn require(&self, field: Field) -> Result<u64> {
        let value = match field {
            Field::Volume => Some(self.volume),
            Field::Chapter => Some(self.chapter),
            Field::PageNumber => self.page_number,
            Field::AbsolutePageNumber => self.absolute_page_number,
        };

        value.ok_or_else(|| Error::FieldUndetermined {
            field,
            file_name: self.file_name.clone(),
        })
    }
}

impl fmt::Display for ParsedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_unknown = |value: Option<u64>| value.map_or("?".to_string(), |v| v.to_string());

        write!(
            f,
            "{}: abs={}, vol={}, chap={}, page={} (source: {})",
            self.title,
            or_unknown(self.absolute_page_number),
            self.volume,
            self.chapter,
            or_unknown(self.page_number),
            self.file_name
        )
    }
}

/// All entries sharing one `(title, volume, chapter)` key.
///
/// Entries are kept sorted by page number, then absolute page number, then
/// file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub title: String,
    pub volume: u64,
    pub chapter: u64,
    pub entries: Vec<ParsedEntry>,
}

impl Bucket {
    /// Base name of the archive without extension, e.g. `"Title Vol.2 Ch.5"`.
    ///
    /// The chapter suffix is omitted for chapter `0`.
    pub fn base_name(&self) -> String {
        let mut name = format!("{} Vol.{}", self.title, self.volume);
        if self.chapter != 0 {
            name.push_str(&format!(" Ch.{}", self.chapter));
        }
        name
    }

    /// File name of the archive, e.g. `"Title Vol.2 Ch.5.cbz"`.
    pub fn archive_name(&self) -> String {
        format!("{}.cbz", self.base_name())
    }

    /// Name under which `entry` is stored inside the archive, e.g. `"Image 3.jpg"`.
    pub fn entry_name(entry: &ParsedEntry) -> Result<String> {
        let page = entry.require(Field::PageNumber)?;
        Ok(format!("Image {}{}", page, entry.extension()))
    }
}
