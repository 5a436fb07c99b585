use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::synthesizer::{TimingPolicy, DEFAULT_TAIL_SECONDS, MIN_GAP_MILLISECONDS};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Cue timing policy
    #[serde(default)]
    pub timing: TimingConfig,

    /// Snapshot capture settings
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Output delivery settings
    #[serde(default)]
    pub delivery: DeliveryConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            capture: CaptureConfig::default(),
            delivery: DeliveryConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

/// Timing policy for cue synthesis
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    /// Display length in seconds for the final caption entry
    #[serde(default = "default_tail_seconds")]
    pub default_tail_seconds: u64,

    /// Minimum cue duration in milliseconds enforced by the repair pass
    #[serde(default = "default_min_gap_ms")]
    pub min_gap_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            default_tail_seconds: default_tail_seconds(),
            min_gap_ms: default_min_gap_ms(),
        }
    }
}

impl TimingConfig {
    // @returns: Synthesizer policy with these values
    pub fn to_policy(&self) -> TimingPolicy {
        TimingPolicy {
            default_tail_seconds: self.default_tail_seconds,
            min_gap_ms: self.min_gap_ms,
        }
    }
}

/// Snapshot capture configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Watch-mode poll interval in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Watch-mode overall wait timeout in seconds
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            wait_timeout_secs: default_wait_timeout_secs(),
        }
    }
}

/// Output delivery configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// Timeout in seconds for the clipboard utility
    #[serde(default = "default_clipboard_timeout_secs")]
    pub clipboard_timeout_secs: u64,

    /// Explicit clipboard command (program followed by its arguments)
    /// instead of probing the known utilities
    #[serde(default)]
    pub clipboard_command: Option<Vec<String>>,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            clipboard_timeout_secs: default_clipboard_timeout_secs(),
            clipboard_command: None,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_tail_seconds() -> u64 {
    DEFAULT_TAIL_SECONDS
}

fn default_min_gap_ms() -> u64 {
    MIN_GAP_MILLISECONDS
}

fn default_poll_interval_ms() -> u64 {
    500
}

fn default_wait_timeout_secs() -> u64 {
    120
}

fn default_clipboard_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.timing.default_tail_seconds == 0 {
            return Err(anyhow!("timing.default_tail_seconds must be at least 1"));
        }

        if self.timing.min_gap_ms == 0 || self.timing.min_gap_ms > 60_000 {
            return Err(anyhow!(
                "timing.min_gap_ms must be between 1 and 60000, got {}",
                self.timing.min_gap_ms
            ));
        }

        if self.capture.poll_interval_ms < 50 {
            return Err(anyhow!(
                "capture.poll_interval_ms must be at least 50, got {}",
                self.capture.poll_interval_ms
            ));
        }

        if self.capture.wait_timeout_secs == 0 {
            return Err(anyhow!("capture.wait_timeout_secs must be at least 1"));
        }

        if self.delivery.clipboard_timeout_secs == 0 {
            return Err(anyhow!("delivery.clipboard_timeout_secs must be at least 1"));
        }

        if let Some(command) = &self.delivery.clipboard_command {
            if command.is_empty() {
                return Err(anyhow!("delivery.clipboard_command must name a program"));
            }
        }

        Ok(())
    }
}
