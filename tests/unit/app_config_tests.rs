/*!
 * Tests for application configuration
 */

use anyhow::Result;
use captext::app_config::{Config, LogLevel};

/// Test the built-in defaults
#[test]
fn test_default_config_withNoOverrides_shouldUseYtDlpAndEnglish() {
    let config = Config::default();
    assert_eq!(config.downloader, "yt-dlp");
    assert_eq!(config.subtitle_extension, "vtt");
    assert_eq!(config.default_language, "en");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that the default configuration passes validation
#[test]
fn test_validate_withDefaultConfig_shouldSucceed() {
    assert!(Config::default().validate().is_ok());
}

/// Test that a partial JSON document is filled with defaults
#[test]
fn test_deserialize_withPartialJson_shouldFillDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{"default_language": "fr"}"#)?;
    assert_eq!(config.default_language, "fr");
    assert_eq!(config.downloader, "yt-dlp");
    assert_eq!(config.subtitle_extension, "vtt");
    Ok(())
}

/// Test log level parsing from its lowercase JSON form
#[test]
fn test_deserialize_withLogLevel_shouldParseLowercase() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{"log_level": "debug"}"#)?;
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// Test that an empty downloader command is rejected
#[test]
fn test_validate_withEmptyDownloader_shouldFail() {
    let config = Config {
        downloader: "  ".to_string(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

/// Test that a malformed extension is rejected
#[test]
fn test_validate_withMalformedExtension_shouldFail() {
    let config = Config {
        subtitle_extension: "v t/t".to_string(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

/// Test that a leading dot on the extension is tolerated
#[test]
fn test_validate_withDottedExtension_shouldSucceed() {
    let config = Config {
        subtitle_extension: ".vtt".to_string(),
        ..Config::default()
    };
    assert!(config.validate().is_ok());
}

/// Test that an invalid default language code is rejected
#[test]
fn test_validate_withInvalidDefaultLanguage_shouldFail() {
    let config = Config {
        default_language: "english".to_string(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

/// Test round-tripping the config through JSON
#[test]
fn test_serialize_withDefaultConfig_shouldRoundTrip() -> Result<()> {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config)?;
    let parsed: Config = serde_json::from_str(&json)?;
    assert_eq!(parsed.downloader, config.downloader);
    assert_eq!(parsed.default_language, config.default_language);
    assert_eq!(parsed.log_level, config.log_level);
    Ok(())
}
