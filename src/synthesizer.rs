use std::fmt;
use log::warn;
use crate::caption_source::CaptionEntry;
use crate::timecode;

// @module: Interval synthesis and SRT rendering

/// Fallback display length for the final caption entry, which has no
/// following entry to bound its end time.
pub const DEFAULT_TAIL_SECONDS: u64 = 2;

/// Minimum display duration enforced when the computed end time does not lie
/// strictly after the start time.
pub const MIN_GAP_MILLISECONDS: u64 = 500;

/// Timing policy for interval synthesis.
///
/// These two values are the only timing behavior that is worth tuning:
/// everything else about cue boundaries follows from the caption data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingPolicy {
    /// Display length in seconds assigned to the last entry of a sequence
    pub default_tail_seconds: u64,

    /// Minimum cue duration in milliseconds, enforced by the repair pass
    pub min_gap_ms: u64,
}

impl Default for TimingPolicy {
    fn default() -> Self {
        TimingPolicy {
            default_tail_seconds: DEFAULT_TAIL_SECONDS,
            min_gap_ms: MIN_GAP_MILLISECONDS,
        }
    }
}

/// Non-fatal conditions recovered during synthesis.
///
/// Diagnostics never abort a synthesis run; they record where the input data
/// forced a fallback so the caller can surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A coarse timestamp did not match the `MM:SS` shape and was replaced
    /// with the zero timestamp
    MalformedTimestamp {
        /// Position of the offending entry in the input sequence
        index: usize,
        /// The raw timestamp text as supplied
        raw: String,
    },

    /// A computed end time did not lie strictly after its start time and was
    /// pushed forward by the minimum gap
    DegenerateInterval {
        /// Position of the offending entry in the input sequence
        index: usize,
        /// Canonical start timestamp of the cue
        start: String,
        /// Canonical end timestamp as originally computed
        end: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::MalformedTimestamp { index, raw } => {
                write!(f, "entry {}: malformed timestamp {:?}, substituted {}", index, raw, timecode::ZERO_TIMESTAMP)
            }
            Diagnostic::DegenerateInterval { index, start, end } => {
                write!(f, "entry {}: end {} not after start {}, enforced minimum gap", index, end, start)
            }
        }
    }
}

// @struct: Single synthesized SRT cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: 1-based sequence number
    pub seq_num: usize,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Caption text
    pub text: String,
}

impl Cue {
    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        timecode::format_timestamp(self.start_time_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        timecode::format_timestamp(self.end_time_ms)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Result of one synthesis run.
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// The rendered SRT document, empty for an empty input sequence
    pub srt: String,

    /// The synthesized cues, one per input entry, in input order
    pub cues: Vec<Cue>,

    /// Conditions recovered while synthesizing
    pub diagnostics: Vec<Diagnostic>,
}

/// Synthesizes SRT cues from coarse-timestamped caption entries.
///
/// Panel captions carry only a `MM:SS` start time: no duration, no end time,
/// whole-second resolution. Cue boundaries are therefore placed where the
/// displayed timestamp actually changes, so a run of entries sharing one
/// coarse timestamp ends at the next *differing* timestamp instead of
/// producing a pile of zero-length cues. The last entry (or a trailing run
/// with no boundary after it) gets a fixed tail duration.
///
/// Synthesis is pure and synchronous: no I/O, no shared state, safe to call
/// repeatedly and from concurrent call sites.
#[derive(Debug, Clone, Default)]
pub struct SrtSynthesizer {
    policy: TimingPolicy,
}

impl SrtSynthesizer {
    /// Create a synthesizer with the default timing policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a synthesizer with an explicit timing policy.
    pub fn with_policy(policy: TimingPolicy) -> Self {
        SrtSynthesizer { policy }
    }

    /// The timing policy in effect.
    pub fn policy(&self) -> TimingPolicy {
        self.policy
    }

    /// Synthesize cues and SRT text from an ordered caption sequence.
    ///
    /// Never fails: malformed timestamps fall back to the zero timestamp and
    /// degenerate intervals are repaired in place, each recorded as a
    /// [`Diagnostic`]. Every emitted cue satisfies
    /// `end_time_ms > start_time_ms`.
    pub fn synthesize(&self, entries: &[CaptionEntry]) -> Synthesis {
        let mut diagnostics = Vec::new();

        // Resolve every coarse timestamp once, substituting the zero
        // timestamp for anything that fails the shape check.
        let resolved: Vec<u64> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| match timecode::coarse_to_ms(&entry.time) {
                Some(ms) => ms,
                None => {
                    warn!("Entry {} has malformed timestamp {:?}, substituting {}", index, entry.time, timecode::ZERO_TIMESTAMP);
                    diagnostics.push(Diagnostic::MalformedTimestamp {
                        index,
                        raw: entry.time.clone(),
                    });
                    0
                }
            })
            .collect();

        let mut cues = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let start_ms = resolved[index];

            // Boundary scan: the first entry after this one whose displayed
            // timestamp differs. Entries sharing this entry's coarse
            // timestamp belong to the same one-second bucket and do not end
            // the cue.
            let boundary = entries
                .iter()
                .enumerate()
                .skip(index + 1)
                .find(|(_, next)| next.time != entry.time)
                .map(|(j, _)| j);

            let mut end_ms = match boundary {
                Some(j) => resolved[j],
                None => start_ms + self.policy.default_tail_seconds * 1_000,
            };

            // Repair pass: panel data sometimes carries zero-width or
            // inverted gaps. Whatever the scan produced, the emitted cue
            // must display for a strictly positive duration.
            if end_ms <= start_ms {
                diagnostics.push(Diagnostic::DegenerateInterval {
                    index,
                    start: timecode::format_timestamp(start_ms),
                    end: timecode::format_timestamp(end_ms),
                });
                end_ms = start_ms + self.policy.min_gap_ms;
            }

            cues.push(Cue {
                seq_num: index + 1,
                start_time_ms: start_ms,
                end_time_ms: end_ms,
                text: entry.text.clone(),
            });
        }

        Synthesis {
            srt: render_srt(&cues),
            cues,
            diagnostics,
        }
    }
}

/// Render cues as an SRT document.
///
/// Each cue becomes one numbered block; the empty cue list renders to the
/// empty string.
pub fn render_srt(cues: &[Cue]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for cue in cues {
        // Writing to a String cannot fail
        let _ = write!(out, "{}", cue);
    }
    out
}
