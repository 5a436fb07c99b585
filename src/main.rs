// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use crate::app_controller::{Controller, RunOutcome};
use crate::delivery::{ClipboardSink, DeliverySink, FileSink, StdoutSink};

mod app_config;
mod app_controller;
mod caption_source;
mod delivery;
mod errors;
mod file_utils;
mod synthesizer;
mod timecode;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract captions from a panel snapshot and copy them as SRT (default command)
    #[command(alias = "extract")]
    Copy(CopyArgs),

    /// Generate shell completions for capclip
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct CopyArgs {
    /// Panel snapshot file to read captions from
    #[arg(value_name = "SNAPSHOT")]
    snapshot_path: PathBuf,

    /// Write the SRT document to a file instead of the clipboard
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the SRT document to stdout instead of the clipboard
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Wait for the snapshot to yield a caption panel before extracting
    #[arg(short, long)]
    watch: bool,

    /// Display length in seconds for the final caption entry
    #[arg(long)]
    tail_seconds: Option<u64>,

    /// Minimum cue duration in milliseconds
    #[arg(long)]
    min_gap_ms: Option<u64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// capclip - Caption panel to SRT clipboard tool
///
/// Extracts the coarse-timestamped caption fragments from an AI-video-summary
/// panel snapshot, synthesizes a well-formed SRT document from them and places
/// it on the system clipboard.
#[derive(Parser, Debug)]
#[command(name = "capclip")]
#[command(version = "0.1.0")]
#[command(about = "Copy AI-summary panel captions as SRT subtitles")]
#[command(long_about = "capclip reads a caption panel snapshot, synthesizes SRT cues from the
coarse MM:SS timestamps and copies the result to the system clipboard.

EXAMPLES:
    capclip panel.json                      # Copy captions to the clipboard
    capclip -o captions.srt panel.json      # Write the SRT to a file instead
    capclip --stdout panel.json             # Print the SRT to stdout
    capclip -w panel.json                   # Wait for the panel to appear first
    capclip --tail-seconds 3 panel.json     # Longer tail for the last caption
    capclip --log-level debug panel.json    # Show synthesis diagnostics
    capclip completions bash > capclip.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Panel snapshot file to read captions from
    #[arg(value_name = "SNAPSHOT")]
    snapshot_path: Option<PathBuf>,

    /// Write the SRT document to a file instead of the clipboard
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the SRT document to stdout instead of the clipboard
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Wait for the snapshot to yield a caption panel before extracting
    #[arg(short, long)]
    watch: bool,

    /// Display length in seconds for the final caption entry
    #[arg(long)]
    tail_seconds: Option<u64>,

    /// Minimum cue duration in milliseconds
    #[arg(long)]
    min_gap_ms: Option<u64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "capclip", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Copy(args)) => {
            // Use the explicit copy subcommand args
            run_copy(args).await
        }
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let snapshot_path = cli.snapshot_path.ok_or_else(|| {
                anyhow!("SNAPSHOT is required when no subcommand is specified")
            })?;

            let copy_args = CopyArgs {
                snapshot_path,
                output: cli.output,
                stdout: cli.stdout,
                force_overwrite: cli.force_overwrite,
                watch: cli.watch,
                tail_seconds: cli.tail_seconds,
                min_gap_ms: cli.min_gap_ms,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_copy(copy_args).await
        }
    }
}

async fn run_copy(options: CopyArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(tail_seconds) = options.tail_seconds {
        config.timing.default_tail_seconds = tail_seconds;
    }

    if let Some(min_gap_ms) = options.min_gap_ms {
        config.timing.min_gap_ms = min_gap_ms;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(level_filter_for(&config.log_level));
    }

    // Pick the delivery sink for this run
    let sink: Box<dyn DeliverySink> = if let Some(output) = options.output {
        Box::new(FileSink::new(output, options.force_overwrite))
    } else if options.stdout {
        Box::new(StdoutSink)
    } else {
        match &config.delivery.clipboard_command {
            Some(command) => Box::new(ClipboardSink::with_command(
                command[0].clone(),
                command[1..].to_vec(),
                config.delivery.clipboard_timeout_secs,
            )),
            None => Box::new(ClipboardSink::new(config.delivery.clipboard_timeout_secs)),
        }
    };

    // Create controller
    let controller = Controller::with_config(config)?;

    let outcome = if options.watch {
        controller.watch(&options.snapshot_path, sink.as_ref()).await?
    } else {
        controller.run(&options.snapshot_path, sink.as_ref()).await?
    };

    match outcome {
        RunOutcome::Copied(_) => Ok(()),
        RunOutcome::NoCaptions => Ok(()),
        RunOutcome::SourceMissing => Err(anyhow!(
            "No caption panel found in snapshot: {:?}",
            options.snapshot_path
        )),
    }
}
