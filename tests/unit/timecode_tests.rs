/*!
 * Tests for coarse timestamp parsing and SRT timestamp formatting
 */

use capclip::timecode;

/// Test parsing a valid coarse timestamp
#[test]
fn test_coarse_to_ms_withValidTimestamp_shouldReturnMilliseconds() {
    assert_eq!(timecode::coarse_to_ms("00:00"), Some(0));
    assert_eq!(timecode::coarse_to_ms("00:05"), Some(5_000));
    assert_eq!(timecode::coarse_to_ms("01:30"), Some(90_000));
    assert_eq!(timecode::coarse_to_ms("59:59"), Some(3_599_000));
}

/// Test that the minutes component is not capped at 59
#[test]
fn test_coarse_to_ms_withMinutesOverSixty_shouldCarryIntoHours() {
    // "75:03" denotes 75 minutes and 3 seconds
    assert_eq!(timecode::coarse_to_ms("75:03"), Some(75 * 60_000 + 3_000));
    assert_eq!(timecode::normalize("75:03").as_deref(), Some("01:15:03,000"));
}

/// Test rejection of strings that do not match the MM:SS shape
#[test]
fn test_coarse_to_ms_withMalformedTimestamp_shouldReturnNone() {
    assert_eq!(timecode::coarse_to_ms("bad"), None);
    assert_eq!(timecode::coarse_to_ms(""), None);
    assert_eq!(timecode::coarse_to_ms("1:05"), None);
    assert_eq!(timecode::coarse_to_ms("01:5"), None);
    assert_eq!(timecode::coarse_to_ms("001:05"), None);
    assert_eq!(timecode::coarse_to_ms("01:05:30"), None);
    assert_eq!(timecode::coarse_to_ms("01-05"), None);
    assert_eq!(timecode::coarse_to_ms(" 01:05"), None);
}

/// Test timestamp formatting in the canonical SRT shape
#[test]
fn test_format_timestamp_withVariousValues_shouldZeroPad() {
    assert_eq!(timecode::format_timestamp(0), "00:00:00,000");
    assert_eq!(timecode::format_timestamp(5_000), "00:00:05,000");
    assert_eq!(timecode::format_timestamp(61_234), "00:01:01,234");
    assert_eq!(timecode::format_timestamp(3_600_000), "01:00:00,000");
    assert_eq!(timecode::format_timestamp(3_661_001), "01:01:01,001");
}

/// Test that the zero timestamp constant matches the canonical format
#[test]
fn test_zero_timestamp_shouldMatchFormattedZero() {
    assert_eq!(timecode::ZERO_TIMESTAMP, timecode::format_timestamp(0));
}

/// Test normalization of a coarse timestamp
#[test]
fn test_normalize_withValidTimestamp_shouldAlwaysHaveZeroMillis() {
    assert_eq!(timecode::normalize("00:05").as_deref(), Some("00:00:05,000"));
    assert_eq!(timecode::normalize("59:59").as_deref(), Some("00:59:59,000"));
    assert_eq!(timecode::normalize("99:59").as_deref(), Some("01:39:59,000"));
}

/// Test normalization failure on a malformed timestamp
#[test]
fn test_normalize_withMalformedTimestamp_shouldReturnNone() {
    assert_eq!(timecode::normalize("bad"), None);
    assert_eq!(timecode::normalize("5:3"), None);
}

/// Test offsetting a coarse timestamp with carry across all boundaries
#[test]
fn test_add_offset_withOverflow_shouldCarryCorrectly() {
    // Carries seconds -> minutes -> hours
    assert_eq!(
        timecode::add_offset("59:59", 2, 500).as_deref(),
        Some("01:00:01,500")
    );
    // Millisecond carry into seconds
    assert_eq!(
        timecode::add_offset("00:01", 0, 1_500).as_deref(),
        Some("00:00:02,500")
    );
}

/// Test offsetting with zero duration
#[test]
fn test_add_offset_withZeroDuration_shouldEqualNormalize() {
    assert_eq!(
        timecode::add_offset("01:30", 0, 0),
        timecode::normalize("01:30")
    );
}

/// Test offset failure on a malformed timestamp
#[test]
fn test_add_offset_withMalformedTimestamp_shouldReturnNone() {
    assert_eq!(timecode::add_offset("nope", 2, 0), None);
}
