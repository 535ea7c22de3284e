//! Structural validation for the two editor buffers.
//!
//! These checks are deliberately lightweight: they run on every keystroke
//! and exist to nudge learners toward well-formed code, not to be a real
//! HTML or CSS parser. Diagnostics are plain strings shown above the
//! editor; nothing here blocks editing or preview.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which buffer a piece of text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Html,
    Css,
}

/// Validate a buffer for the given language.
pub fn validate(language: Language, text: &str) -> Vec<String> {
    match language {
        Language::Html => validate_html(text),
        Language::Css => validate_css(text),
    }
}

/// Validate a CSS buffer.
///
/// Two checks, both heuristic:
/// 1. Global `{` / `}` counts must match.
/// 2. A trimmed line that looks like a `property: value` pair but does not
///    end with `;`, `{`, or `}` is flagged as missing a semicolon. Lines
///    containing `@` (at-rules) and lines starting with `//` or `/*` are
///    skipped.
///
/// The line heuristic has no comment or multi-line-value tracking and will
/// flag continuation lines of multi-line values. That imprecision is part
/// of the contract: the message points at a line worth a second look.
pub fn validate_css(text: &str) -> Vec<String> {
    let mut diagnostics = Vec::new();

    let open = text.matches('{').count();
    let close = text.matches('}').count();
    if open != close {
        diagnostics.push(format!("Unmatched braces: {open} opening, {close} closing"));
    }

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.ends_with(';') || trimmed.ends_with('{') || trimmed.ends_with('}') {
            continue;
        }
        if trimmed.contains('@') {
            continue;
        }
        if trimmed.contains(':') && !trimmed.starts_with("//") && !trimmed.starts_with("/*") {
            diagnostics.push(format!("Line {}: Missing semicolon", index + 1));
        }
    }

    diagnostics
}

/// The generic tag pattern: `<`, anything that is not `>`, then `>`.
/// No nested-angle-bracket awareness.
fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new("<[^>]+>").expect("tag pattern is valid"))
}

/// Validate an HTML buffer.
///
/// Collects the names of all opening and closing tags (self-closing tags
/// are excluded from both), sorts both lists, and compares them as
/// multisets. A mismatch yields the single diagnostic
/// `"Unmatched HTML tags detected"`.
///
/// This is a closed-tag check, not a nesting check: `<a><b></a></b>` has
/// equal multisets and passes. Keeping the weaker semantics is deliberate;
/// a stack-based matcher would change which inputs are flagged.
pub fn validate_html(text: &str) -> Vec<String> {
    let mut diagnostics = Vec::new();

    let mut open_tags: Vec<&str> = Vec::new();
    let mut close_tags: Vec<&str> = Vec::new();

    for found in tag_pattern().find_iter(text) {
        let tag = found.as_str();
        if let Some(inner) = tag.strip_prefix("</") {
            let name = inner.trim_end_matches('>');
            close_tags.push(name.split(' ').next().unwrap_or(name));
        } else if !tag.ends_with("/>") {
            let name = tag.trim_start_matches('<').trim_end_matches('>');
            open_tags.push(name.split(' ').next().unwrap_or(name));
        }
    }

    open_tags.sort_unstable();
    close_tags.sort_unstable();
    if open_tags != close_tags {
        diagnostics.push("Unmatched HTML tags detected".to_string());
    }

    diagnostics
}
