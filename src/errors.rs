/*!
 * Error types for the capclip application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when reading captions from a snapshot
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Error reading the snapshot file
    #[error("Failed to read snapshot: {0}")]
    Read(String),

    /// Error when the snapshot content cannot be interpreted
    #[error("Failed to parse snapshot: {0}")]
    Parse(String),
}

/// Errors that can occur when delivering the SRT output
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// No clipboard utility could be found on this system
    #[error("No clipboard utility available (tried: {0})")]
    ClipboardUnavailable(String),

    /// Error spawning or driving the clipboard utility
    #[error("Clipboard command failed: {0}")]
    CommandFailed(String),

    /// The clipboard utility exited with a non-zero status
    #[error("Clipboard command {command} exited with status {status}")]
    CommandExited {
        /// Program that was invoked
        command: String,
        /// Its exit status
        status: String,
    },

    /// The clipboard utility did not finish in time
    #[error("Clipboard command timed out after {0} seconds")]
    Timeout(u64),

    /// The output file already exists and overwrite was not forced
    #[error("Output file already exists: {0} (use -f to force overwrite)")]
    OutputExists(String),

    /// Error from a file or stream operation
    #[error("I/O error during delivery: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from caption capture
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    /// Error from output delivery
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
