//! In-band formatting escapes.
//!
//! Every escape starts with the section sign introducer. Three shapes are
//! recognized, longest first:
//!
//! - expanded hex: `§x§R§R§G§G§B§B` (14 units)
//! - inline hex: `§#RRGGBB` (8 units) or `§#AARRGGBB` (10 units)
//! - legacy: `§` followed by any single unit (2 units)
//!
//! A lone introducer at the end of the text is not an escape.

/// Escape introducer (U+00A7).
pub const SECTION_SIGN: char = '§';

const INLINE_HEX_MARKER: char = '#';
const EXPANDED_HEX_MARKER: char = 'x';
const EXPANDED_HEX_PAIRS: usize = 6;
const INLINE_HEX_MAX_DIGITS: usize = 8;

/// Length of the legacy `§<code>` escape.
pub const LEGACY_CODE_LEN: usize = 2;
/// Length of the `§x§R§R§G§G§B§B` escape.
pub const EXPANDED_HEX_CODE_LEN: usize = 2 + EXPANDED_HEX_PAIRS * 2;

/// Legacy formatting code carried by the unit after the introducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatCode {
    /// One of the sixteen palette colors (`0`-`9`, `a`-`f`).
    Color(u8),
    /// `k`
    Obfuscated,
    /// `l`
    Bold,
    /// `m`
    Strikethrough,
    /// `n`
    Underline,
    /// `o`
    Italic,
    /// `r`
    Reset,
}

impl FormatCode {
    /// Classify a formatting character, case-insensitively.
    pub fn from_char(ch: char) -> Option<Self> {
        let lower = ch.to_ascii_lowercase();
        match lower {
            '0'..='9' | 'a'..='f' => lower.to_digit(16).map(|v| Self::Color(v as u8)),
            'k' => Some(Self::Obfuscated),
            'l' => Some(Self::Bold),
            'm' => Some(Self::Strikethrough),
            'n' => Some(Self::Underline),
            'o' => Some(Self::Italic),
            'r' => Some(Self::Reset),
            _ => None,
        }
    }

    /// Whether this code replaces the active color (and so clears styles).
    pub fn is_color(self) -> bool {
        matches!(self, Self::Color(_))
    }

    /// Bold state after applying this code to `bold`.
    ///
    /// `l` turns bold on, colors and `r` turn it off, other styles leave it.
    pub fn apply_bold(self, bold: bool) -> bool {
        match self {
            Self::Bold => true,
            Self::Color(_) | Self::Reset => false,
            _ => bold,
        }
    }
}

/// Number of units forming a formatting escape at `index`, or 0 when no
/// complete escape starts there.
pub fn detect_code_length(text: &[char], index: usize) -> usize {
    if text.get(index) != Some(&SECTION_SIGN) || index + 1 >= text.len() {
        return 0;
    }

    let marker = text[index + 1].to_ascii_lowercase();
    if marker == EXPANDED_HEX_MARKER && expanded_hex_digits(text, index).is_some() {
        return EXPANDED_HEX_CODE_LEN;
    }
    if marker == INLINE_HEX_MARKER {
        let digits = inline_hex_digit_count(text, index);
        if digits == 6 || digits == 8 {
            return 2 + digits;
        }
    }

    LEGACY_CODE_LEN
}

/// Bold state after the escape of `code_len` units at `index`.
///
/// Only two-unit escapes carry a style code; longer hex escapes leave the
/// bold state as it was.
pub(crate) fn bold_after_escape(text: &[char], index: usize, code_len: usize, bold: bool) -> bool {
    if code_len != LEGACY_CODE_LEN {
        return bold;
    }
    match text.get(index + 1).copied().and_then(FormatCode::from_char) {
        Some(code) => code.apply_bold(bold),
        None => bold,
    }
}

/// Count of contiguous hex digits following `§#` at `index`, capped at 8.
pub(crate) fn inline_hex_digit_count(text: &[char], index: usize) -> usize {
    let start = index + 2;
    let end = text.len().min(start + INLINE_HEX_MAX_DIGITS);
    text.get(start..end)
        .map(|run| run.iter().take_while(|c| c.is_ascii_hexdigit()).count())
        .unwrap_or(0)
}

/// Six hex digits of a `§x§R§R§G§G§B§B` escape starting at `index`.
pub(crate) fn expanded_hex_digits(text: &[char], index: usize) -> Option<[char; 6]> {
    let mut digits = ['0'; EXPANDED_HEX_PAIRS];
    let mut cursor = index + 2;
    for digit in digits.iter_mut() {
        let (&intro, &value) = (text.get(cursor)?, text.get(cursor + 1)?);
        if intro != SECTION_SIGN || !value.is_ascii_hexdigit() {
            return None;
        }
        *digit = value;
        cursor += 2;
    }
    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn plain_text_has_no_escapes() {
        let text = units("hello");
        assert!((0..text.len()).all(|i| detect_code_length(&text, i) == 0));
    }

    #[test]
    fn legacy_codes_are_two_units() {
        let text = units("a§lb§Rc§zd");
        assert_eq!(detect_code_length(&text, 1), 2);
        assert_eq!(detect_code_length(&text, 4), 2);
        assert_eq!(detect_code_length(&text, 7), 2);
        assert_eq!(detect_code_length(&text, 0), 0);
    }

    #[test]
    fn trailing_introducer_is_not_an_escape() {
        let text = units("abc§");
        assert_eq!(detect_code_length(&text, 3), 0);
        assert_eq!(detect_code_length(&text, 10), 0);
    }

    #[test]
    fn inline_hex_accepts_six_or_eight_digits() {
        assert_eq!(detect_code_length(&units("§#ff00FFx"), 0), 8);
        assert_eq!(detect_code_length(&units("§#80ff00ff"), 0), 10);
        // Lookahead stops at eight digits.
        assert_eq!(detect_code_length(&units("§#80ff00ff12"), 0), 10);
    }

    #[test]
    fn malformed_inline_hex_degrades_to_legacy_skip() {
        assert_eq!(detect_code_length(&units("§#ff00f"), 0), 2);
        assert_eq!(detect_code_length(&units("§#ff00fff"), 0), 2);
        assert_eq!(detect_code_length(&units("§#zz"), 0), 2);
    }

    #[test]
    fn expanded_hex_is_fourteen_units() {
        let text = units("§x§f§f§0§0§a§Bz");
        assert_eq!(detect_code_length(&text, 0), 14);
        assert_eq!(detect_code_length(&units("§X§f§f§0§0§a§b"), 0), 14);
    }

    #[test]
    fn truncated_expanded_hex_degrades_to_legacy_skip() {
        assert_eq!(detect_code_length(&units("§x§f§f§0§0§a"), 0), 2);
        assert_eq!(detect_code_length(&units("§x§f§f§0§0§a§g"), 0), 2);
        assert_eq!(detect_code_length(&units("§x§f§fq0§0§a§b"), 0), 2);
    }

    #[test]
    fn classifies_legacy_codes() {
        assert_eq!(FormatCode::from_char('L'), Some(FormatCode::Bold));
        assert_eq!(FormatCode::from_char('e'), Some(FormatCode::Color(14)));
        assert_eq!(FormatCode::from_char('7'), Some(FormatCode::Color(7)));
        assert_eq!(FormatCode::from_char('r'), Some(FormatCode::Reset));
        assert_eq!(FormatCode::from_char('z'), None);
    }

    #[test]
    fn bold_transitions_follow_legacy_rules() {
        let text = units("§l§o§a§r§#ff00ff");
        assert!(bold_after_escape(&text, 0, 2, false));
        assert!(bold_after_escape(&text, 2, 2, true));
        assert!(!bold_after_escape(&text, 4, 2, true));
        assert!(!bold_after_escape(&text, 6, 2, true));
        assert!(bold_after_escape(&text, 8, 8, true));
    }
}
