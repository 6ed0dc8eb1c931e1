/*!
 * Error types for the captext application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur when fetching a caption track through the
/// external downloader
#[derive(Error, Debug)]
pub enum FetchError {
    /// Error when the downloader executable could not be started at all
    #[error("Failed to launch downloader '{command}': {source}")]
    Launch {
        /// The command that could not be launched
        command: String,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Error when the downloader ran but exited with a non-zero status
    #[error("Downloader command '{command}' failed with {status}")]
    DownloadFailed {
        /// The command that was invoked
        command: String,
        /// The exit status it reported
        status: ExitStatus,
    },

    /// Error reading a downloaded caption file
    #[error("Caption file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the subtitle fetcher
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

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
