use std::process::Command;
use anyhow::{Result, Context};
use log::{debug, warn};
use tempfile::TempDir;

use crate::app_config::Config;
use crate::errors::FetchError;
use crate::file_utils::FileManager;

// @module: Caption track download via the external downloader

/// Wrapper around the external subtitle downloader.
///
/// Each fetch runs inside an ephemeral working directory that is deleted on
/// every exit path; the only thing that outlives the call is the returned
/// caption text.
pub struct SubtitleFetcher {
    config: Config,
}

impl SubtitleFetcher {
    // @method: Create a new fetcher with the given configuration
    pub fn with_config(config: Config) -> Self {
        SubtitleFetcher { config }
    }

    /// Download the auto-generated caption track for a video.
    ///
    /// Invokes the configured downloader with the auto-subtitles and
    /// skip-download flags, waits for it to finish, and reads back the first
    /// caption file it produced. Returns `Ok(None)` when the downloader
    /// succeeded but produced no caption file for the requested language.
    ///
    /// A non-zero exit from the downloader is propagated as
    /// [`FetchError::DownloadFailed`] carrying the command and exit status.
    pub fn fetch(&self, url: &str, language: &str) -> Result<Option<String>> {
        let workdir = TempDir::new()
            .context("Failed to create temporary download directory")?;
        let output_template = workdir.path().join("video");

        debug!("Invoking '{}' for {} (language: {})", self.config.downloader, url, language);

        // The template goes through as an OsStr so non-UTF-8 paths are
        // forwarded intact rather than mangled or emptied
        let output = Command::new(&self.config.downloader)
            .args([
                "--write-auto-subs",
                "--skip-download",
                "--sub-lang", language,
                "--output",
            ])
            .arg(output_template.as_os_str())
            .arg(url)
            .output()
            .map_err(|source| FetchError::Launch {
                command: self.config.downloader.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                debug!("Downloader stderr: {}", stderr.trim());
            }
            return Err(FetchError::DownloadFailed {
                command: self.config.downloader.clone(),
                status: output.status,
            }
            .into());
        }

        // The downloader names the file itself (template + language + extension),
        // so locate it by extension rather than guessing the exact name
        let caption_files =
            FileManager::find_files(workdir.path(), &self.config.subtitle_extension)?;

        match caption_files.first() {
            Some(path) => {
                debug!("Found caption file: {:?}", path.file_name().unwrap_or_default());
                let content = FileManager::read_to_string(path)?;
                Ok(Some(content))
            }
            None => {
                warn!("Downloader succeeded but produced no .{} file", self.config.subtitle_extension);
                Ok(None)
            }
        }
    }
}
