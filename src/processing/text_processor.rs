//! Text normalization and tokenization

use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static NON_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid non-word regex"));

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Lowercase, replace everything outside `[\w\s]` with a space, collapse
/// whitespace runs and trim. Total: every input yields a (possibly empty) string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let spaced = NON_WORD_REGEX.replace_all(&lowered, " ");
    WHITESPACE_REGEX.replace_all(&spaced, " ").trim().to_string()
}

/// Split text into linguistic tokens on Unicode word boundaries.
///
/// Every non-whitespace segment is a token, so punctuation marks count as
/// tokens of their own: `"Intro to AI."` yields `["Intro", "to", "AI", "."]`.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Token with its byte span in the source text
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Like [`tokenize`] but keeps byte offsets, used to align entity spans
pub fn tokenize_with_offsets(text: &str) -> Vec<Token<'_>> {
    text.split_word_bound_indices()
        .filter(|(_, segment)| !segment.trim().is_empty())
        .map(|(start, segment)| Token {
            text: segment,
            start,
            end: start + segment.len(),
        })
        .collect()
}

/// True when the token carries no letters or digits
pub fn is_punctuation(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

/// Strip leading/trailing characters that are not alphanumeric, keeping inner
/// punctuation such as in `node.js` or `c++`
pub fn trim_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
}
