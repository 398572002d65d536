//! Hex-color escapes contributed by the HexText extension.
//!
//! When the extension is installed in the host, formatting escapes may carry
//! a full ARGB color instead of a palette index:
//!
//! - inline: `§#RRGGBB` (opaque) or `§#AARRGGBB`
//! - expanded: `§x§R§R§G§G§B§B` (opaque)
//!
//! The decoder is inert unless it was constructed with the extension marked
//! present. Presence is resolved once by the host at startup.

use crate::format_code::{expanded_hex_digits, inline_hex_digit_count, SECTION_SIGN};

const OPAQUE_ALPHA: u32 = 0xFF00_0000;
const ALPHA_MASK: u32 = 0xFF00_0000;
const SHADOW_CHANNEL_MASK: u32 = 0x00FC_FCFC;

/// Color and style state of the glyph run being drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormattingState {
    /// Packed ARGB text color.
    pub color: u32,
    /// Packed ARGB shadow color.
    pub shadow_color: u32,
    pub random: bool,
    pub bold: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub italic: bool,
}

impl FormattingState {
    /// State with the given colors and every style flag cleared.
    pub fn new(color: u32, shadow_color: u32) -> Self {
        Self {
            color,
            shadow_color,
            ..Self::default()
        }
    }

    /// Overwrite every field at once.
    #[allow(clippy::too_many_arguments)]
    pub fn load(
        &mut self,
        color: u32,
        shadow_color: u32,
        random: bool,
        bold: bool,
        strikethrough: bool,
        underline: bool,
        italic: bool,
    ) -> &mut Self {
        *self = Self {
            color,
            shadow_color,
            random,
            bold,
            strikethrough,
            underline,
            italic,
        };
        self
    }

    /// Clear the five style flags; a new color cancels active styles.
    pub fn reset_styles(&mut self) {
        self.random = false;
        self.bold = false;
        self.strikethrough = false;
        self.underline = false;
        self.italic = false;
    }

    /// Set `argb` as the text color and derive its quarter-brightness shadow.
    pub fn apply_color(&mut self, argb: u32) {
        self.color = argb;
        self.shadow_color = shadow_of(argb);
        self.reset_styles();
    }
}

/// Shadow color for `argb`: each RGB channel at roughly a quarter of its
/// brightness, alpha unchanged.
pub fn shadow_of(argb: u32) -> u32 {
    (argb & ALPHA_MASK) | ((argb & SHADOW_CHANNEL_MASK) >> 2)
}

/// Decoder for hex-color escapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HexTextDecoder {
    present: bool,
}

impl HexTextDecoder {
    /// Create a decoder; `present` is the host's extension presence flag.
    pub fn new(present: bool) -> Self {
        if !present {
            log::debug!("hex text extension not present; hex color escapes stay undecoded");
        }
        Self { present }
    }

    /// Decoder configured from a loaded [`WrapConfig`](crate::WrapConfig).
    #[cfg(feature = "std")]
    pub fn from_config(config: &crate::WrapConfig) -> Self {
        Self::new(config.hex_text_present)
    }

    /// Whether hex escapes are decoded at all.
    pub fn is_active(&self) -> bool {
        self.present
    }

    /// Decode a hex-color escape whose introducer sits at `format_index`.
    ///
    /// Only units before `string_end` are considered. On success `state`
    /// receives the color, its shadow and cleared styles, and the index of
    /// the last consumed unit is returned. Otherwise `state` is untouched
    /// and the caller falls back to legacy single-code handling.
    ///
    /// Opaque white (`§#FFFFFF`, `§#FFFFFFFF`) decodes like any other color.
    /// Older renderers used `0xFFFFFFFF` as their "no color" marker and
    /// refused these escapes.
    pub fn try_handle(
        &self,
        text: &[char],
        format_index: usize,
        string_end: usize,
        state: &mut FormattingState,
    ) -> Option<usize> {
        if !self.present {
            return None;
        }

        let end = string_end.min(text.len());
        if format_index >= end.saturating_sub(1) || text[format_index] != SECTION_SIGN {
            return None;
        }
        let text = &text[..end];

        let (argb, last) = match text[format_index + 1].to_ascii_lowercase() {
            '#' => parse_inline_hex(text, format_index)?,
            'x' => parse_expanded_hex(text, format_index)?,
            _ => return None,
        };

        log::trace!("decoded hex color {:#010x} at {}", argb, format_index);
        state.apply_color(argb);
        Some(last)
    }
}

fn parse_inline_hex(text: &[char], format_index: usize) -> Option<(u32, usize)> {
    let start = format_index + 2;
    let digits = inline_hex_digit_count(text, format_index);
    let value = hex_value(text.get(start..start + digits)?)?;
    let argb = match digits {
        6 => OPAQUE_ALPHA | value,
        8 => value,
        _ => return None,
    };
    Some((argb, start + digits - 1))
}

fn parse_expanded_hex(text: &[char], format_index: usize) -> Option<(u32, usize)> {
    let digits = expanded_hex_digits(text, format_index)?;
    let value = hex_value(&digits)?;
    Some((OPAQUE_ALPHA | value, format_index + 13))
}

fn hex_value(digits: &[char]) -> Option<u32> {
    digits
        .iter()
        .try_fold(0u32, |acc, c| c.to_digit(16).map(|d| (acc << 4) | d))
}
