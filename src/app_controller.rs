use anyhow::{Result, Context, anyhow};
use log::{warn, info, debug};
use std::path::Path;
use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::caption_source::{self, CaptionSource};
use crate::delivery::DeliverySink;
use crate::errors::CaptureError;
use crate::file_utils::FileManager;
use crate::synthesizer::SrtSynthesizer;

// @module: Application controller for caption extraction and delivery

/// Outcome of one synthesis-and-deliver operation.
///
/// The three cases carry distinct user-facing meaning: a snapshot without a
/// caption panel is not the same as a panel that yielded no usable captions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Captions were synthesized and delivered; carries the cue count
    Copied(usize),

    /// A caption list was present but no entry survived validation
    NoCaptions,

    /// The snapshot holds no caption panel at all
    SourceMissing,
}

/// Main application controller for caption extraction
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Run one synthesis-and-deliver operation against a snapshot file.
    ///
    /// Only one operation is ever in flight at a time: the whole pipeline is
    /// awaited before control returns to the caller.
    pub async fn run(&self, snapshot_path: &Path, sink: &dyn DeliverySink) -> Result<RunOutcome> {
        let content = FileManager::read_to_string(snapshot_path)
            .map_err(|e| CaptureError::Read(e.to_string()))?;

        let source = caption_source::extract_from_snapshot(&content)?;

        let entries = match source {
            CaptionSource::NotFound => {
                warn!("No caption panel found in snapshot {:?}", snapshot_path);
                return Ok(RunOutcome::SourceMissing);
            }
            CaptionSource::Found(entries) if entries.is_empty() => {
                warn!("No valid captions in snapshot {:?}", snapshot_path);
                return Ok(RunOutcome::NoCaptions);
            }
            CaptionSource::Found(entries) => entries,
        };

        info!("Extracted {} captions from {:?}", entries.len(), snapshot_path);

        let synthesizer = SrtSynthesizer::with_policy(self.config.timing.to_policy());
        let synthesis = synthesizer.synthesize(&entries);

        if !synthesis.diagnostics.is_empty() {
            debug!("{} timing repairs applied during synthesis", synthesis.diagnostics.len());
        }

        sink.deliver(&synthesis.srt)
            .await
            .with_context(|| format!("Failed to deliver SRT to {}", sink.describe()))?;

        info!("Copied {} captions to {}", synthesis.cues.len(), sink.describe());
        Ok(RunOutcome::Copied(synthesis.cues.len()))
    }

    /// Wait for a caption panel to become available, then run once.
    ///
    /// Polls for the snapshot file until it exists and yields a caption
    /// panel. A snapshot that appears but holds no panel yet keeps the watch
    /// alive, the way the panel on a live page shows up some time after the
    /// page itself.
    pub async fn watch(&self, snapshot_path: &Path, sink: &dyn DeliverySink) -> Result<RunOutcome> {
        let poll_interval = Duration::from_millis(self.config.capture.poll_interval_ms);
        let deadline = Instant::now() + Duration::from_secs(self.config.capture.wait_timeout_secs);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Waiting for caption panel at {:?}", snapshot_path));
        spinner.enable_steady_tick(Duration::from_millis(120));

        loop {
            if FileManager::file_exists(snapshot_path) {
                match self.run(snapshot_path, sink).await? {
                    RunOutcome::SourceMissing => {
                        debug!("Snapshot present but no caption panel yet, still waiting");
                    }
                    outcome => {
                        spinner.finish_and_clear();
                        return Ok(outcome);
                    }
                }
            }

            if Instant::now() >= deadline {
                spinner.finish_and_clear();
                return Err(anyhow!(
                    "Timed out after {}s waiting for a caption panel at {:?}",
                    self.config.capture.wait_timeout_secs,
                    snapshot_path
                ));
            }

            tokio::time::sleep(poll_interval).await;
        }
    }
}
