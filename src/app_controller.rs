use anyhow::Result;
use log::{debug, warn};

use crate::app_config::Config;
use crate::caption_cleaner;
use crate::language_utils;
use crate::subtitle_fetcher::SubtitleFetcher;

// @module: Application controller orchestrating fetch and clean

// @struct: Main application controller
pub struct Controller {
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let controller = Self {
            config,
        };

        Ok(controller)
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.downloader.is_empty() && !self.config.subtitle_extension.is_empty()
    }

    /// Fetch the auto-generated captions for a video and clean them into
    /// plain text.
    ///
    /// Returns `Ok(None)` when no caption track exists for the requested
    /// language - that outcome is not an error.
    pub fn run(&self, url: &str, language: &str) -> Result<Option<String>> {
        // Unrecognized codes are passed through as-is; the downloader is the
        // authority on which locales actually exist
        match language_utils::validate_language_code(language) {
            Ok(_) => debug!("Requested caption language: {}", language),
            Err(e) => warn!("Language code issue: {}", e),
        }

        let fetcher = SubtitleFetcher::with_config(self.config.clone());
        match fetcher.fetch(url, language)? {
            Some(raw) => Ok(Some(caption_cleaner::clean_subtitle_text(&raw))),
            None => Ok(None),
        }
    }
}
