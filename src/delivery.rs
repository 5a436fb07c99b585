use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};

use crate::errors::DeliveryError;

// @module: Delivery sinks for synthesized SRT output

/// Clipboard utilities probed in order when no explicit command is
/// configured. Covers Wayland, X11 and macOS.
const CLIPBOARD_CANDIDATES: [(&str, &[&str]); 4] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

/// A destination for a synthesized SRT document.
#[async_trait]
pub trait DeliverySink {
    /// Deliver the SRT text to this sink.
    async fn deliver(&self, srt: &str) -> Result<(), DeliveryError>;

    /// Short human-readable description for status messages.
    fn describe(&self) -> String;
}

/// Places text on the system clipboard by piping it to a platform clipboard
/// utility running as a child process.
pub struct ClipboardSink {
    command: Option<(String, Vec<String>)>,
    timeout_secs: u64,
}

impl ClipboardSink {
    /// Create a sink that probes the known clipboard utilities.
    pub fn new(timeout_secs: u64) -> Self {
        ClipboardSink {
            command: None,
            timeout_secs,
        }
    }

    /// Create a sink that uses an explicit clipboard command.
    pub fn with_command(program: String, args: Vec<String>, timeout_secs: u64) -> Self {
        ClipboardSink {
            command: Some((program, args)),
            timeout_secs,
        }
    }

    fn spawn(program: &str, args: &[String]) -> std::io::Result<Child> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
    }

    /// Feed the text to the child's stdin and wait for it to exit, with a
    /// timeout so a wedged utility cannot hang the whole operation.
    async fn feed_child(mut child: Child, program: &str, srt: &str, timeout_secs: u64) -> Result<(), DeliveryError> {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| DeliveryError::CommandFailed(format!("{}: no stdin handle", program)))?;

        stdin.write_all(srt.as_bytes()).await?;
        // Close stdin so the utility sees EOF and commits the selection
        drop(stdin);

        let timeout_duration = std::time::Duration::from_secs(timeout_secs);
        let status = tokio::select! {
            status = child.wait() => {
                status.map_err(|e| DeliveryError::CommandFailed(format!("{}: {}", program, e)))?
            },
            _ = tokio::time::sleep(timeout_duration) => {
                let _ = child.start_kill();
                return Err(DeliveryError::Timeout(timeout_secs));
            }
        };

        if !status.success() {
            return Err(DeliveryError::CommandExited {
                command: program.to_string(),
                status: status.to_string(),
            });
        }

        debug!("Clipboard write completed via {}", program);
        Ok(())
    }
}

#[async_trait]
impl DeliverySink for ClipboardSink {
    async fn deliver(&self, srt: &str) -> Result<(), DeliveryError> {
        if let Some((program, args)) = &self.command {
            let child = Self::spawn(program, args).map_err(|e| match e.kind() {
                ErrorKind::NotFound => DeliveryError::ClipboardUnavailable(program.clone()),
                _ => DeliveryError::CommandFailed(format!("{}: {}", program, e)),
            })?;
            return Self::feed_child(child, program, srt, self.timeout_secs).await;
        }

        for (program, args) in CLIPBOARD_CANDIDATES {
            let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
            match Self::spawn(program, &args) {
                Ok(child) => {
                    return Self::feed_child(child, program, srt, self.timeout_secs).await;
                }
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    warn!("Clipboard utility {} failed to start: {}", program, e);
                    return Err(DeliveryError::CommandFailed(format!("{}: {}", program, e)));
                }
            }
        }

        let tried: Vec<&str> = CLIPBOARD_CANDIDATES.iter().map(|(p, _)| *p).collect();
        Err(DeliveryError::ClipboardUnavailable(tried.join(", ")))
    }

    fn describe(&self) -> String {
        "system clipboard".to_string()
    }
}

/// Writes the SRT document to a file, creating parent directories as needed.
pub struct FileSink {
    path: PathBuf,
    force_overwrite: bool,
}

impl FileSink {
    pub fn new(path: PathBuf, force_overwrite: bool) -> Self {
        FileSink {
            path,
            force_overwrite,
        }
    }
}

#[async_trait]
impl DeliverySink for FileSink {
    async fn deliver(&self, srt: &str) -> Result<(), DeliveryError> {
        if self.path.exists() && !self.force_overwrite {
            return Err(DeliveryError::OutputExists(self.path.display().to_string()));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, srt).await?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Prints the SRT document to standard output.
pub struct StdoutSink;

#[async_trait]
impl DeliverySink for StdoutSink {
    async fn deliver(&self, srt: &str) -> Result<(), DeliveryError> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(srt.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}
