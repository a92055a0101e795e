//! Tests for file name metadata extraction.

use mangarn::error::Error;
use mangarn::parser::{parse, parse_all, validate};

#[test]
fn test_parse_releaser_prefixed_name() {
    let name = "[Releaser] A Random Name Vol. 1 Chapter. 01.jpg";
    let entry = parse(name);

    assert_eq!(entry.file_name(), name);
    assert_eq!(entry.title(), "A Random Name");
    assert_eq!(entry.volume(), 1);
    assert_eq!(entry.chapter(), 1);
    assert_eq!(entry.page_number(), None);
    assert_eq!(entry.absolute_page_number(), None);
}

#[test]
fn test_parse_explicit_page_marker() {
    let name = "0001_A_Series_name_c001_v01_p000_Source_Quality_Release.jpg";
    let entry = parse(name);

    assert_eq!(entry.file_name(), name);
    assert_eq!(entry.title(), "A Series name");
    assert_eq!(entry.volume(), 1);
    assert_eq!(entry.chapter(), 1);
    assert_eq!(entry.absolute_page_number(), Some(1));
    assert_eq!(entry.page_number(), Some(0));
}

#[test]
fn test_parse_page_number_before_extension() {
    let name = "1009_A_Random_Name_c118_v14_Releaser_HQ_60.jpg";
    let entry = parse(name);

    assert_eq!(entry.file_name(), name);
    assert_eq!(entry.title(), "A Random Name");
    assert_eq!(entry.volume(), 14);
    assert_eq!(entry.chapter(), 118);
    assert_eq!(entry.page_number(), Some(60));
    assert_eq!(entry.absolute_page_number(), Some(1009));
}

#[test]
fn test_missing_markers_use_defaults() {
    for name in ["cover.jpg", "README", "Some Title - 12.png", "[Group] Title.jpg"] {
        let entry = parse(name);
        assert_eq!(entry.volume(), 0, "volume of {}", name);
        assert_eq!(entry.chapter(), 0, "chapter of {}", name);
        assert_eq!(entry.absolute_page_number(), None, "absolute page of {}", name);
    }
}

#[test]
fn test_volume_and_chapter_markers() {
    let entry = parse("Title Volume. 7 Ch. 12 p3.png");
    assert_eq!(entry.volume(), 7);
    assert_eq!(entry.chapter(), 12);
    assert_eq!(entry.page_number(), Some(3));
    assert_eq!(entry.title(), "Title");

    // Markers are case-sensitive.
    let entry = parse("Title V3 C4.png");
    assert_eq!(entry.volume(), 0);
    assert_eq!(entry.chapter(), 0);
}

#[test]
fn test_page_marker_is_preferred_over_suffix() {
    let entry = parse("Title_c02_p05_scan_99.jpg");
    assert_eq!(entry.page_number(), Some(5));

    let entry = parse("Title_c02_scan_99.jpg");
    assert_eq!(entry.page_number(), Some(99));
}

#[test]
fn test_suffix_requires_two_non_digit_characters() {
    // A dot right before the digits does not form a page suffix.
    let entry = parse("Title c1 .12.jpg");
    assert_eq!(entry.page_number(), None);

    // Digits must be directly followed by a letter-only extension.
    let entry = parse("Title_c1_12.jpg.bak1");
    assert_eq!(entry.page_number(), None);
}

#[test]
fn test_absolute_page_only_at_start() {
    assert_eq!(parse("042_Title_c1_p1.jpg").absolute_page_number(), Some(42));
    assert_eq!(parse("Title_042_c1_p1.jpg").absolute_page_number(), None);
}

#[test]
fn test_title_keeps_apostrophes_and_replaces_underscores() {
    let entry = parse("Kiki's_Delivery_Service_v02_c10_p004.png");
    assert_eq!(entry.title(), "Kiki's Delivery Service");
}

#[test]
fn test_parse_is_idempotent() {
    let name = "0001_A_Series_name_c001_v01_p000_Source_Quality_Release.jpg";
    assert_eq!(parse(name), parse(name));
}

#[test]
fn test_non_ascii_digits_are_not_numbers() {
    // Arabic-Indic digits after the marker are not captured.
    let entry = parse("Title_c١٢_p1.jpg");
    assert_eq!(entry.chapter(), 0);
    assert_eq!(entry.page_number(), Some(1));
}

#[test]
fn test_validate_rejects_missing_title() {
    let result = validate("12345.jpg");
    match result {
        Err(Error::TitleNotFound(name)) => assert_eq!(name, "12345.jpg"),
        other => panic!("expected TitleNotFound, got {:?}", other),
    }

    let entry = validate("A_Random_Name_c1_p2.jpg").unwrap();
    assert_eq!(entry.title(), "A Random Name");
}

#[test]
fn test_parse_all_keeps_order_and_fails_fast() {
    let names = vec![
        "Title_c1_p3.jpg".to_string(),
        "Title_c1_p1.jpg".to_string(),
        "Title_c1_p2.jpg".to_string(),
    ];
    let entries = parse_all(&names).unwrap();
    let pages: Vec<_> = entries.iter().map(|e| e.page_number()).collect();
    assert_eq!(pages, vec![Some(3), Some(1), Some(2)]);

    let result = parse_all(&["Title_c1_p1.jpg", "0001.jpg"]);
    assert!(matches!(result, Err(Error::TitleNotFound(_))));
}

#[test]
fn test_parse_all_reports_first_failure_in_input_order() {
    let names = ["Title_c1_p1.jpg", "0002.jpg", "Title_c1_p2.jpg", "0001.jpg", "p3.jpg"];
    match parse_all(&names) {
        Err(Error::TitleNotFound(name)) => assert_eq!(name, "0002.jpg"),
        other => panic!("expected TitleNotFound, got {:?}", other),
    }
}

#[test]
#[should_panic(expected = "capture_number")]
fn test_overflowing_number_panics() {
    parse("99999999999999999999999_Title_c1_p1.jpg");
}

#[test]
fn test_display_marks_unknown_pages() {
    let entry = parse("[Releaser] A Random Name Vol. 1 Chapter. 01.jpg");
    assert_eq!(
        entry.to_string(),
        "A Random Name: abs=?, vol=1, chap=1, page=? (source: [Releaser] A Random Name Vol. 1 Chapter. 01.jpg)"
    );
}
