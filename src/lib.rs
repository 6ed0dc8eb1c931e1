/*!
 * # captext - Caption Text Fetcher
 *
 * A Rust library for fetching auto-generated video captions and cleaning
 * them into plain, human-readable text.
 *
 * ## Features
 *
 * - Download auto-generated caption tracks via an external downloader (yt-dlp)
 * - Strip WEBVTT headers, metadata lines, cue timings and inline markup tags
 * - Collapse rolling-display duplicate lines into readable prose
 * - Ephemeral, self-cleaning working directory for every download
 * - ISO 639-1 and ISO 639-2 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `caption_cleaner`: The caption-to-plain-text transformation
 * - `subtitle_fetcher`: External downloader invocation and file handling
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
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

// Public modules
pub mod app_config;
pub mod caption_cleaner;
pub mod subtitle_fetcher;
pub mod app_controller;
pub mod file_utils;
pub mod language_utils;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use caption_cleaner::clean_subtitle_text;
pub use subtitle_fetcher::SubtitleFetcher;
pub use app_controller::Controller;
pub use language_utils::{language_codes_match, validate_language_code};
pub use errors::{AppError, FetchError};
