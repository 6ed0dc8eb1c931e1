use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module provides functions for validating and normalizing
/// ISO 639-1 (2-letter) and ISO 639-2 (3-letter) language codes.
/// Language code type
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T (3-letter) code
    Part2T,
    /// ISO 639-2/B (3-letter) code
    Part2B,
}

/// Validate if a language code is a valid ISO 639-1 or ISO 639-2 code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let normalized_code = code.trim().to_lowercase();

    // Check for ISO 639-1 (2-letter) code
    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(LanguageCodeType::Part1);
        }
    }
    // Check for ISO 639-2 (3-letter) code
    else if normalized_code.len() == 3 {
        // Try to parse as ISO 639-2/T code
        if Language::from_639_3(&normalized_code).is_some() {
            return Ok(LanguageCodeType::Part2T);
        }

        // Check if it's a ISO 639-2/B code that differs from ISO 639-2/T
        if part2b_to_part2t(&normalized_code).is_some() {
            return Ok(LanguageCodeType::Part2B);
        }
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Normalize a language code to ISO 639-1 (2-letter) format if possible
/// Falls back to ISO 639-2/T if no ISO 639-1 code exists
pub fn normalize_to_part1_or_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    // If it's already a 2-letter code, validate it
    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(normalized_code);
        }
    }
    // If it's a 3-letter code, try to find a corresponding 2-letter code
    else if normalized_code.len() == 3 {
        // First normalize to ISO 639-2/T if it's a ISO 639-2/B code
        let part2t = part2b_to_part2t(&normalized_code)
            .map(str::to_string)
            .unwrap_or(normalized_code);

        if let Some(lang) = Language::from_639_3(&part2t) {
            if let Some(part1) = lang.to_639_1() {
                return Ok(part1.to_string());
            }
            return Ok(part2t);
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Check if two language codes refer to the same language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (
        normalize_to_part1_or_part2t(code1),
        normalize_to_part1_or_part2t(code2),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => code1.trim().eq_ignore_ascii_case(code2.trim()),
    }
}

// ISO 639-2/B codes that differ from their ISO 639-2/T equivalent
fn part2b_to_part2t(code: &str) -> Option<&'static str> {
    match code {
        "fre" => Some("fra"), // French
        "ger" => Some("deu"), // German
        "dut" => Some("nld"), // Dutch
        "gre" => Some("ell"), // Greek
        "chi" => Some("zho"), // Chinese
        "cze" => Some("ces"), // Czech
        "ice" => Some("isl"), // Icelandic
        "alb" => Some("sqi"), // Albanian
        "arm" => Some("hye"), // Armenian
        "baq" => Some("eus"), // Basque
        "bur" => Some("mya"), // Burmese
        "per" => Some("fas"), // Persian
        "geo" => Some("kat"), // Georgian
        "may" => Some("msa"), // Malay
        "mac" => Some("mkd"), // Macedonian
        "rum" => Some("ron"), // Romanian
        "slo" => Some("slk"), // Slovak
        "wel" => Some("cym"), // Welsh
        _ => None,
    }
}
