//! Pre-compiled patterns for the spans the linter must never rewrite.
//!
//! All regexes are compiled once on first use and shared across threads. The
//! quick-check helpers let the detector skip a pattern entirely when the text
//! cannot possibly contain it.

use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use std::sync::LazyLock;

/// Fenced code block: triple backticks, non-greedy, may span lines
pub static FENCED_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Inline code span: single backticks, no newline inside
pub static INLINE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`\n]+`").unwrap());

/// `http://`, `https://` or `www.` up to whitespace or a closing bracket
pub static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s)\]}]+|www\.[^\s)\]}]+").unwrap());

/// Email address with ASCII boundaries on both ends. The local part also
/// admits `_`. A digit may follow the top-level domain (`a@b.com1号`).
///
/// `\b` in the `regex` crate is Unicode-aware, which would treat a preceding
/// Han character as a word character, so the boundaries are spelled out as
/// ASCII lookarounds instead.
pub static EMAIL_REGEX: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(r"(?<![A-Za-z0-9_])[A-Za-z0-9_.%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}(?![A-Za-z_])").unwrap()
});

#[inline]
pub fn has_backtick(content: &str) -> bool {
    content.contains('`')
}

#[inline]
pub fn has_fence_marker(content: &str) -> bool {
    content.contains("```")
}

#[inline]
pub fn has_url_hint(content: &str) -> bool {
    content.contains("http://") || content.contains("https://") || content.contains("www.")
}

#[inline]
pub fn has_at_sign(content: &str) -> bool {
    content.contains('@')
}
