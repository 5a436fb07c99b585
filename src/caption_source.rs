use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CaptureError;
use crate::timecode;

// @module: Caption supplier reading panel snapshot files

/// Snapshot keys under which a panel export may carry its caption list.
const CAPTION_LIST_KEYS: [&str; 2] = ["captions", "subtitles"];

/// One caption record as present in a snapshot, prior to validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCaption {
    /// Displayed panel timestamp, expected shape `MM:SS`
    pub time: String,

    /// Displayed caption text
    pub text: String,
}

/// One validated caption entry as handed to the synthesizer.
///
/// `time` matches the coarse `MM:SS` shape and `text` is non-empty and
/// trimmed; the supplier filters everything else before handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionEntry {
    /// Coarse start timestamp (`MM:SS`, minutes may exceed 59)
    pub time: String,

    /// Caption display text
    pub text: String,
}

/// What a snapshot yielded.
///
/// `NotFound` (the snapshot holds no caption panel at all) is distinct from
/// `Found` with an empty list (a panel that yielded no valid captions), so
/// the caller can present a different message for each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionSource {
    /// No caption list found in the snapshot
    NotFound,

    /// A caption list was found; the entries passed validation
    Found(Vec<CaptionEntry>),
}

/// Extract the ordered caption sequence from panel snapshot JSON.
///
/// Accepted shapes: a top-level array of `{time, text}` records, or an
/// object carrying such an array under a `captions` or `subtitles` key. An
/// object with neither key yields [`CaptionSource::NotFound`]. Records that
/// are malformed (wrong shape, invalid timestamp, empty text) are skipped
/// with a warning; they never abort the extraction.
pub fn extract_from_snapshot(content: &str) -> Result<CaptionSource, CaptureError> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| CaptureError::Parse(e.to_string()))?;

    let list = match &document {
        Value::Array(items) => items,
        Value::Object(map) => {
            match CAPTION_LIST_KEYS.iter().find_map(|key| map.get(*key)) {
                Some(Value::Array(items)) => items,
                Some(other) => {
                    return Err(CaptureError::Parse(format!(
                        "caption list is not an array (found {})",
                        json_type_name(other)
                    )));
                }
                None => {
                    debug!("Snapshot has no caption list under any of {:?}", CAPTION_LIST_KEYS);
                    return Ok(CaptionSource::NotFound);
                }
            }
        }
        other => {
            return Err(CaptureError::Parse(format!(
                "snapshot root is not an array or object (found {})",
                json_type_name(other)
            )));
        }
    };

    let mut entries = Vec::with_capacity(list.len());
    let mut skipped = 0;

    for item in list {
        let raw: RawCaption = match serde_json::from_value(item.clone()) {
            Ok(raw) => raw,
            Err(_) => {
                warn!("Skipping fragment without time or text: {}", item);
                skipped += 1;
                continue;
            }
        };

        let time = raw.time.trim().to_string();
        let text = raw.text.trim().to_string();

        if timecode::coarse_to_ms(&time).is_none() || text.is_empty() {
            warn!("Skipping invalid caption fragment: time={:?} text={:?}", raw.time, raw.text);
            skipped += 1;
            continue;
        }

        entries.push(CaptionEntry { time, text });
    }

    if skipped > 0 {
        debug!("Extracted {} captions, skipped {} invalid fragments", entries.len(), skipped);
    } else {
        debug!("Extracted {} captions", entries.len());
    }

    Ok(CaptionSource::Found(entries))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
