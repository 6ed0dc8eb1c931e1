use std::collections::HashSet;
use regex::Regex;
use once_cell::sync::Lazy;

// @module: Caption track cleaning and plain-text extraction

// @const: WEBVTT header regex (dot matches newline, non-greedy to the first newline)
static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)WEBVTT.*?\n").unwrap()
});

// @const: "Kind:" metadata line regex
static KIND_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Kind:.*?\n").unwrap()
});

// @const: "Language:" metadata line regex
static LANGUAGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Language:.*?\n").unwrap()
});

// @const: Cue timing line regex (HH:MM:SS.mmm --> HH:MM:SS.mmm plus trailing settings)
static CUE_TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{2}:\d{2}:\d{2}\.\d{3} --> \d{2}:\d{2}:\d{2}\.\d{3}.*?\n").unwrap()
});

// @const: Inline markup tag regex (<c>, <b>, </i>, <00:00:01.000>, ...)
static MARKUP_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<.*?>").unwrap()
});

// @const: Runs of newlines
static NEWLINE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n+").unwrap()
});

/// Clean a raw caption track into plain text.
///
/// Strips the WEBVTT header, `Kind:`/`Language:` metadata lines, cue timing
/// lines, and inline markup tags, collapses blank lines, and removes duplicate
/// lines while keeping each surviving line at its first occurrence. Surviving
/// lines are never reordered. This is a total function: any input string
/// produces a result, and an empty input produces an empty output.
///
/// Auto-generated caption tracks repeat cue text across adjacent cues to
/// emulate a rolling display; the dedup pass is what turns that into readable
/// prose.
pub fn clean_subtitle_text(raw: &str) -> String {
    // Header and metadata lines, each removed through its trailing newline
    let text = HEADER_REGEX.replace_all(raw, "");
    let text = KIND_REGEX.replace_all(&text, "");
    let text = LANGUAGE_REGEX.replace_all(&text, "");

    // Cue timing lines, including any same-line cue settings
    let text = CUE_TIMING_REGEX.replace_all(&text, "");

    // Inline markup tags, leaving only the enclosed text
    let text = MARKUP_TAG_REGEX.replace_all(&text, "");

    // Collapse blank lines left behind by the removals and trim the document
    let text = NEWLINE_RUN_REGEX.replace_all(&text, "\n");
    let text = text.trim();

    remove_duplicate_lines(text)
}

/// Remove duplicate lines, keeping the first occurrence of each line in its
/// original position.
pub fn remove_duplicate_lines(text: &str) -> String {
    let mut seen = HashSet::new();
    text.split('\n')
        .filter(|line| seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}
