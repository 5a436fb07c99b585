use once_cell::sync::Lazy;
use regex::Regex;

// @module: Coarse timestamp parsing and SRT timestamp formatting

// @const: Coarse panel timestamp regex (MM:SS, minutes uncapped)
static COARSE_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2})$").unwrap()
});

/// The canonical zero timestamp, used as the fail-safe substitute for
/// malformed coarse times.
pub const ZERO_TIMESTAMP: &str = "00:00:00,000";

/// Parse a coarse `MM:SS` panel timestamp into a total millisecond count.
///
/// The minutes component is not capped at 59: "75:03" denotes 75 minutes and
/// 3 seconds. Returns `None` when the string does not match the exact
/// two-digit `MM:SS` shape.
pub fn coarse_to_ms(coarse: &str) -> Option<u64> {
    let caps = COARSE_TIME_REGEX.captures(coarse)?;

    // The regex guarantees two-digit numeric components
    let minutes: u64 = caps.get(1)?.as_str().parse().ok()?;
    let seconds: u64 = caps.get(2)?.as_str().parse().ok()?;

    Some(minutes * 60_000 + seconds * 1_000)
}

/// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
pub fn format_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Normalize a coarse `MM:SS` timestamp to the canonical SRT form.
///
/// Coarse timestamps carry no sub-second information, so the milliseconds
/// field of the result is always `,000`.
pub fn normalize(coarse: &str) -> Option<String> {
    coarse_to_ms(coarse).map(format_timestamp)
}

/// Offset a coarse `MM:SS` timestamp by a duration and render canonically.
///
/// Carries overflow across the millisecond, second, minute and hour
/// boundaries.
pub fn add_offset(coarse: &str, seconds: u64, millis: u64) -> Option<String> {
    let base = coarse_to_ms(coarse)?;
    Some(format_timestamp(base + seconds * 1_000 + millis))
}
