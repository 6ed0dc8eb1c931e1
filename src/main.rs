// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::Path;
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod caption_cleaner;
mod subtitle_fetcher;
mod app_controller;
mod file_utils;
mod language_utils;
mod errors;

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

/// captext - Caption Text Fetcher
///
/// Fetches the auto-generated captions of a video through an external
/// downloader (yt-dlp) and prints them as clean plain text.
#[derive(Parser, Debug)]
#[command(name = "captext")]
#[command(version = "1.0.0")]
#[command(about = "Fetch video captions as clean plain text")]
#[command(long_about = "captext downloads the auto-generated caption track of a video with yt-dlp
and strips timing lines, metadata and markup tags to produce plain text.

EXAMPLES:
    captext https://youtube.com/watch?v=xxx        # English captions
    captext https://youtube.com/watch?v=xxx fr     # French captions
    captext --log-level debug <url>                # Show downloader diagnostics

CONFIGURATION:
    Configuration is read from conf.json if it exists. You can specify a
    different config file with --config-path. Without a config file,
    built-in defaults are used (downloader: yt-dlp, extension: vtt).")]
struct CommandLineOptions {
    /// Video URL to fetch captions for
    #[arg(value_name = "VIDEO_URL")]
    url: String,

    /// Language code for the caption track (e.g., 'en', 'es', 'fr')
    #[arg(value_name = "LANGUAGE_CODE")]
    language: Option<String>,

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
            Level::Error => "\u{274c} ",
            Level::Warn => "\u{1f6a7} ",
            Level::Info => " ",
            Level::Debug => "\u{1f50d} ",
            Level::Trace => "\u{1f4cb} ",
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

            // Diagnostics go to stderr so stdout stays reserved for the result text
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

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap; a usage error must exit
    // with status 1, not clap's default of 2
    let cli = match CommandLineOptions::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(
            e.kind(),
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
        ) =>
        {
            e.exit();
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load configuration, falling back to built-in defaults
    let config_path = &cli.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        debug!("Config file not found at '{}', using defaults.", config_path);
        Config::default()
    };

    // Update log level in config if specified via command line
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    let language = cli
        .language
        .clone()
        .unwrap_or_else(|| config.default_language.clone());

    // Create controller and run the fetch
    let controller = Controller::with_config(config)?;

    match controller.run(&cli.url, &language)? {
        Some(text) => println!("{}", text),
        None => println!(
            "Failed to download subtitles or no subtitles available for language: {}",
            language
        ),
    }

    Ok(())
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
