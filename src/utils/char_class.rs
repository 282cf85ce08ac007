//! Character classes shared by the rules.
//!
//! Ranges follow the chinese-copywriting-guidelines conventions: "CJK" means
//! Han ideographs only, not kana, CJK punctuation or full-width forms.

/// Ideographic space (U+3000)
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Offset between a full-width ASCII variant (U+FF01..=U+FF5E) and its ASCII form
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Han ideograph: Unified Ideographs (incl. Extension A) or Compatibility Ideographs
#[inline]
pub fn is_cjk(c: char) -> bool {
    matches!(c, '\u{3400}'..='\u{9FFF}' | '\u{F900}'..='\u{FAFF}')
}

/// Latin letter or digit, in ASCII or full-width form
#[inline]
pub fn is_ascii_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '\u{FF10}'..='\u{FF19}' | '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}')
}

/// ASCII or full-width decimal digit
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '\u{FF10}'..='\u{FF19}')
}

/// ASCII or full-width full stop
#[inline]
pub fn is_period(c: char) -> bool {
    c == '.' || c == '\u{FF0E}'
}

#[inline]
pub fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Horizontal whitespace that may sit before a closing mark and be removed
#[inline]
pub fn is_horizontal_space(c: char) -> bool {
    c == ' ' || c == '\t' || c == IDEOGRAPHIC_SPACE
}

/// Character in the full-width forms block or the ideographic space
#[inline]
pub fn is_fullwidth_form(c: char) -> bool {
    c == IDEOGRAPHIC_SPACE || matches!(c, '\u{FF01}'..='\u{FF5E}')
}

/// Half-width equivalent of a full-width form; other characters map to themselves.
pub fn to_halfwidth(c: char) -> char {
    match c {
        IDEOGRAPHIC_SPACE => ' ',
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c),
        _ => c,
    }
}
