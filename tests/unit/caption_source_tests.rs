/*!
 * Tests for the caption supplier
 */

use capclip::caption_source::{extract_from_snapshot, CaptionEntry, CaptionSource};

/// Test extraction from a top-level caption array
#[test]
fn test_extract_withTopLevelArray_shouldReturnEntries() {
    let content = r#"[
        { "time": "00:01", "text": "First." },
        { "time": "00:04", "text": "Second." }
    ]"#;

    let source = extract_from_snapshot(content).unwrap();
    let entries = match source {
        CaptionSource::Found(entries) => entries,
        CaptionSource::NotFound => panic!("expected a caption list"),
    };

    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0],
        CaptionEntry {
            time: "00:01".to_string(),
            text: "First.".to_string(),
        }
    );
}

/// Test extraction from an object carrying a "captions" key
#[test]
fn test_extract_withCaptionsKey_shouldReturnEntries() {
    let content = r#"{ "captions": [ { "time": "01:30", "text": "Hello" } ] }"#;

    let source = extract_from_snapshot(content).unwrap();
    assert_eq!(
        source,
        CaptionSource::Found(vec![CaptionEntry {
            time: "01:30".to_string(),
            text: "Hello".to_string(),
        }])
    );
}

/// Test extraction from an object carrying a "subtitles" key
#[test]
fn test_extract_withSubtitlesKey_shouldReturnEntries() {
    let content = r#"{ "subtitles": [ { "time": "00:10", "text": "Hi" } ] }"#;

    let source = extract_from_snapshot(content).unwrap();
    assert!(matches!(source, CaptionSource::Found(entries) if entries.len() == 1));
}

/// Test the sentinel for a snapshot without any caption list
#[test]
fn test_extract_withObjectWithoutCaptionList_shouldReturnNotFound() {
    let content = r#"{ "title": "Some video", "duration": 300 }"#;

    let source = extract_from_snapshot(content).unwrap();
    assert_eq!(source, CaptionSource::NotFound);
}

/// Test that an empty caption list is distinct from the sentinel
#[test]
fn test_extract_withEmptyList_shouldReturnFoundEmpty() {
    let source = extract_from_snapshot(r#"{ "captions": [] }"#).unwrap();
    assert_eq!(source, CaptionSource::Found(vec![]));

    let source = extract_from_snapshot("[]").unwrap();
    assert_eq!(source, CaptionSource::Found(vec![]));
}

/// Test rejection of snapshot content that is not JSON
#[test]
fn test_extract_withInvalidJson_shouldReturnParseError() {
    assert!(extract_from_snapshot("not json at all").is_err());
}

/// Test rejection of a snapshot whose root is a scalar
#[test]
fn test_extract_withScalarRoot_shouldReturnParseError() {
    assert!(extract_from_snapshot("42").is_err());
    assert!(extract_from_snapshot(r#""hello""#).is_err());
}

/// Test rejection of a caption list that is not an array
#[test]
fn test_extract_withNonArrayCaptionList_shouldReturnParseError() {
    assert!(extract_from_snapshot(r#"{ "captions": "nope" }"#).is_err());
}

/// Test that malformed records are filtered, never fatal
#[test]
fn test_extract_withMalformedRecords_shouldSkipThem() {
    let content = r#"[
        { "time": "00:01", "text": "Valid one" },
        { "time": "0:02", "text": "Bad timestamp shape" },
        { "time": "00:03", "text": "   " },
        { "time": "00:04" },
        { "text": "No timestamp at all" },
        { "time": "00:05", "text": "Valid two" }
    ]"#;

    let source = extract_from_snapshot(content).unwrap();
    let entries = match source {
        CaptionSource::Found(entries) => entries,
        CaptionSource::NotFound => panic!("expected a caption list"),
    };

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "Valid one");
    assert_eq!(entries[1].text, "Valid two");
}

/// Test whitespace trimming on time and text fields
#[test]
fn test_extract_withPaddedFields_shouldTrimThem() {
    let content = r#"[ { "time": " 00:07 ", "text": "  padded text  " } ]"#;

    let source = extract_from_snapshot(content).unwrap();
    let entries = match source {
        CaptionSource::Found(entries) => entries,
        CaptionSource::NotFound => panic!("expected a caption list"),
    };

    assert_eq!(entries[0].time, "00:07");
    assert_eq!(entries[0].text, "padded text");
}

/// Test that input order is preserved
#[test]
fn test_extract_withManyRecords_shouldPreserveOrder() {
    let records: Vec<String> = (0..10)
        .map(|i| format!(r#"{{ "time": "00:{:02}", "text": "caption {}" }}"#, i, i))
        .collect();
    let content = format!("[{}]", records.join(","));

    let source = extract_from_snapshot(&content).unwrap();
    let entries = match source {
        CaptionSource::Found(entries) => entries,
        CaptionSource::NotFound => panic!("expected a caption list"),
    };

    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.text, format!("caption {}", i));
    }
}
