//! File name metadata extraction.
//!
//! Scene releases of scanned manga follow no single naming grammar, so every
//! field is extracted by its own pattern and falls back to its own default when
//! the pattern does not match. A file without a volume marker can still yield a
//! usable title, chapter and page number.
//!
//! ```rust
//! let entry = mangarn::parser::parse("1009_A_Random_Name_c118_v14_Releaser_HQ_60.jpg");
//! assert_eq!(entry.title(), "A Random Name");
//! assert_eq!(entry.volume(), 14);
//! assert_eq!(entry.chapter(), 118);
//! assert_eq!(entry.page_number(), Some(60));
//! assert_eq!(entry.absolute_page_number(), Some(1009));
//! ```

use lazy_static::lazy_static;
use log::debug;
use rayon::prelude::*;
use regex::Regex;

use crate::error::{Error, Result};
use crate::types::ParsedEntry;

// Digit classes are spelled `[0-9]` because `\d` also matches non-ASCII digits,
// which `u64::from_str` rejects.
lazy_static! {
    /// Volume marker followed by its number, e.g. "v01", "Vol. 3".
    static ref VOLUME_REGEX: Regex = Regex::new(r"(?:Vol|Volume|v)(?:\. )?([0-9]+)").unwrap();
    /// Chapter marker followed by its number, e.g. "c118", "Chapter. 01".
    static ref CHAPTER_REGEX: Regex = Regex::new(r"(?:Ch|Chapter|c)(?:\. )?([0-9]+)").unwrap();
    /// Leading digit run, the page number within the whole series.
    static ref ABSOLUTE_PAGE_REGEX: Regex = Regex::new(r"^([0-9]+)").unwrap();
    /// Explicit page marker, e.g. "p000".
    static ref PAGE_MARKER_REGEX: Regex = Regex::new(r"p([0-9]+)").unwrap();
    /// Last digit run right before the extension, e.g. "HQ_60.jpg".
    static ref PAGE_SUFFIX_REGEX: Regex = Regex::new(r"[^.0-9]{2}([0-9]+)\.[a-zA-Z]+$").unwrap();
    /// Shortest run of title characters that precedes a volume, chapter or page marker.
    static ref TITLE_REGEX: Regex = Regex::new(
        r"[_ ]?(?P<title>[a-zA-Z'_ ]+?)[_ ]?(?:[cvp]|(?:Vol|Volume|Chapter|Ch)\. )[0-9]+"
    )
    .unwrap();
}

/// Parses `file_name` into a [`ParsedEntry`].
///
/// Never fails: fields that cannot be inferred keep their defaults (`0` for
/// volume and chapter, `None` for page numbers, an empty title).
pub fn parse(file_name: &str) -> ParsedEntry {
    let volume = capture_number(&VOLUME_REGEX, file_name).unwrap_or(0);
    let chapter = capture_number(&CHAPTER_REGEX, file_name).unwrap_or(0);
    let absolute_page_number = capture_number(&ABSOLUTE_PAGE_REGEX, file_name);
    let page_number = capture_number(&PAGE_MARKER_REGEX, file_name)
        .or_else(|| capture_number(&PAGE_SUFFIX_REGEX, file_name));
    let title = capture_title(file_name);

    ParsedEntry::new(
        file_name.to_string(),
        title,
        volume,
        chapter,
        page_number,
        absolute_page_number,
    )
}

/// Parses `file_name` and rejects it when no title could be inferred.
pub fn validate(file_name: &str) -> Result<ParsedEntry> {
    let entry = parse(file_name);
    if entry.title().is_empty() {
        return Err(Error::TitleNotFound(file_name.to_string()));
    }

    debug!("Parsed {}", entry);
    Ok(entry)
}

/// Parses every name in parallel, then fails on the first name (in input
/// order) without a title.
///
/// The returned entries keep the order of `file_names`.
pub fn parse_all<S>(file_names: &[S]) -> Result<Vec<ParsedEntry>>
where
    S: AsRef<str> + Sync,
{
    let entries: Vec<ParsedEntry> = file_names
        .par_iter()
        .map(|name| parse(name.as_ref()))
        .collect();

    for entry in &entries {
        if entry.title().is_empty() {
            return Err(Error::TitleNotFound(entry.file_name().to_string()));
        }
        debug!("Parsed {}", entry);
    }

    Ok(entries)
}

/// Returns the first capture group of the leftmost match as a number.
fn capture_number(regex: &Regex, file_name: &str) -> Option<u64> {
    let digits = regex.captures(file_name)?.get(1)?.as_str();

    // The patterns only capture ASCII digits, so only an overflowing run can land here.
    let value = digits.parse::<u64>().unwrap_or_else(|e| {
        panic!(
            "capture_number: pattern {} captured '{}' which is not a u64: {}",
            regex.as_str(),
            digits,
            e
        )
    });
    Some(value)
}

fn capture_title(file_name: &str) -> String {
    TITLE_REGEX
        .captures(file_name)
        .and_then(|caps| caps.name("title"))
        .map(|title| title.as_str().replace('_', " "))
        .unwrap_or_default()
}
