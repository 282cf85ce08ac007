use crate::protected_ranges::ProtectedRanges;
use crate::utils::char_class::{is_cjk, is_line_break};

/// Pre-computed, read-only data shared by every rule during one lint call.
///
/// All indices are codepoint offsets into `chars`.
pub struct LintContext<'a> {
    pub content: &'a str,
    pub chars: Vec<char>,
    pub protected: ProtectedRanges,
    /// For every codepoint: does its line (delimited by `\n` or `\r`) contain a Han character?
    line_has_cjk: Vec<bool>,
}

impl<'a> LintContext<'a> {
    pub fn new(content: &'a str) -> Self {
        let chars: Vec<char> = content.chars().collect();
        let protected = ProtectedRanges::detect(content);
        let line_has_cjk = compute_line_cjk(&chars);

        log::debug!(
            "Lint context: {} codepoints, {} protected ranges",
            chars.len(),
            protected.len()
        );

        Self {
            content,
            chars,
            protected,
            line_has_cjk,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Codepoint at `index`, `None` past either end.
    #[inline]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Codepoint before `index`, `None` at the start of the text.
    #[inline]
    pub fn char_before(&self, index: usize) -> Option<char> {
        index.checked_sub(1).and_then(|i| self.char_at(i))
    }

    #[inline]
    pub fn is_protected(&self, start: usize, end: usize) -> bool {
        self.protected.overlaps(start, end)
    }

    /// Source text of `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    /// Whether the character at `index` sits in Chinese context: one of its
    /// neighbours is a Han character, or a Han character appears elsewhere on
    /// the same line. Line breaks bound the search in both directions.
    ///
    /// The character at `index` itself does not count.
    pub fn has_cjk_context(&self, index: usize) -> bool {
        if self.char_before(index).is_some_and(is_cjk) || self.char_at(index + 1).is_some_and(is_cjk) {
            return true;
        }
        match self.char_at(index) {
            Some(c) if is_line_break(c) => false,
            // The line flag covers the character itself; only trust it when that is not Han
            Some(c) if is_cjk(c) => self.scan_line_for_other_cjk(index),
            Some(_) => self.line_has_cjk[index],
            None => false,
        }
    }

    fn scan_line_for_other_cjk(&self, index: usize) -> bool {
        let before = self.chars[..index].iter().rev().take_while(|&&c| !is_line_break(c));
        let after = self.chars[index + 1..].iter().take_while(|&&c| !is_line_break(c));
        before.chain(after).any(|&c| is_cjk(c))
    }
}

fn compute_line_cjk(chars: &[char]) -> Vec<bool> {
    let mut flags = vec![false; chars.len()];
    let mut line_start = 0;
    for i in 0..=chars.len() {
        if i == chars.len() || is_line_break(chars[i]) {
            let has_cjk = chars[line_start..i].iter().any(|&c| is_cjk(c));
            flags[line_start..i].fill(has_cjk);
            line_start = i + 1;
        }
    }
    flags
}
