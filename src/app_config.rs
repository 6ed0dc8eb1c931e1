use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading
/// and validating configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// External downloader command used to fetch caption tracks
    #[serde(default = "default_downloader")]
    pub downloader: String,

    /// File extension of the caption files the downloader produces
    #[serde(default = "default_subtitle_extension")]
    pub subtitle_extension: String,

    /// Language code (ISO) used when none is given on the command line
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level
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

fn default_downloader() -> String {
    "yt-dlp".to_string()
}

fn default_subtitle_extension() -> String {
    "vtt".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.downloader.trim().is_empty() {
            return Err(anyhow!("Downloader command must not be empty"));
        }

        let extension = self.subtitle_extension.trim_start_matches('.');
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(anyhow!(
                "Invalid subtitle extension: {}",
                self.subtitle_extension
            ));
        }

        // Validate the default language code
        crate::language_utils::validate_language_code(&self.default_language)?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            downloader: default_downloader(),
            subtitle_extension: default_subtitle_extension(),
            default_language: default_language(),
            log_level: LogLevel::default(),
        }
    }
}
