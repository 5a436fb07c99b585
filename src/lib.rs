/*!
 * # capclip - Caption panel to SRT clipboard tool
 *
 * A Rust library for turning coarse-timestamped caption fragments from an
 * AI-video-summary panel into a well-formed SRT subtitle document.
 *
 * ## Features
 *
 * - Extract caption fragments from panel snapshot files
 * - Synthesize non-degenerate cue intervals from `MM:SS` start times only
 * - Collapse runs of repeated timestamps into single cue boundaries
 * - Repair zero-width and inverted gaps with a minimum display duration
 * - Deliver the SRT text to the system clipboard, a file, or stdout
 * - Wait for a caption panel to appear before extracting
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: Coarse timestamp parsing and SRT timestamp formatting
 * - `synthesizer`: Interval synthesis and SRT rendering (the core)
 * - `caption_source`: Caption supplier reading panel snapshots
 * - `delivery`: Delivery sinks (clipboard, file, stdout)
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
// Add other lints you want to allow but not auto-fix

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod caption_source;
pub mod delivery;
pub mod errors;
pub mod file_utils;
pub mod synthesizer;
pub mod timecode;

// Re-export main types for easier usage
pub use app_config::Config;
pub use caption_source::{CaptionEntry, CaptionSource};
pub use synthesizer::{Cue, Diagnostic, SrtSynthesizer, Synthesis, TimingPolicy};
pub use errors::{AppError, CaptureError, DeliveryError};
