/*!
 * Tests for language code utilities
 */

use captext::language_utils::{
    language_codes_match, normalize_to_part1_or_part2t, validate_language_code, LanguageCodeType,
};

/// Test validation of ISO 639-1 two-letter codes
#[test]
fn test_validate_language_code_withPart1Code_shouldSucceed() {
    assert!(matches!(
        validate_language_code("en"),
        Ok(LanguageCodeType::Part1)
    ));
    assert!(matches!(
        validate_language_code("FR"),
        Ok(LanguageCodeType::Part1)
    ));
}

/// Test validation of ISO 639-2/T three-letter codes
#[test]
fn test_validate_language_code_withPart2TCode_shouldSucceed() {
    assert!(matches!(
        validate_language_code("eng"),
        Ok(LanguageCodeType::Part2T)
    ));
}

/// Test validation of ISO 639-2/B legacy codes
#[test]
fn test_validate_language_code_withPart2BCode_shouldSucceed() {
    assert!(matches!(
        validate_language_code("fre"),
        Ok(LanguageCodeType::Part2B)
    ));
    assert!(matches!(
        validate_language_code("ger"),
        Ok(LanguageCodeType::Part2B)
    ));
}

/// Test rejection of codes that are not ISO 639
#[test]
fn test_validate_language_code_withInvalidCode_shouldFail() {
    assert!(validate_language_code("english").is_err());
    assert!(validate_language_code("q!").is_err());
    assert!(validate_language_code("").is_err());
}

/// Test normalization down to two-letter codes
#[test]
fn test_normalize_withThreeLetterCode_shouldPreferPart1() {
    assert_eq!(normalize_to_part1_or_part2t("eng").unwrap(), "en");
    assert_eq!(normalize_to_part1_or_part2t("fre").unwrap(), "fr");
    assert_eq!(normalize_to_part1_or_part2t("EN").unwrap(), "en");
}

/// Test matching across code formats
#[test]
fn test_language_codes_match_withEquivalentCodes_shouldReturnTrue() {
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("fr", "fre"));
    assert!(language_codes_match("de", "ger"));
    assert!(!language_codes_match("en", "fr"));
}
