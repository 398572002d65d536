//! Splitting formatted text into lines with the greedy breaker.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use smallvec::SmallVec;

use crate::format_code::{detect_code_length, FormatCode, LEGACY_CODE_LEN};
use crate::glyph_metrics::GlyphMetrics;
use crate::line_break::{size_to_width, DEFAULT_WIDTH_EPSILON, LINE_SEPARATOR};

/// Formatting escapes active at the end of a line.
pub type FormatPrefix = SmallVec<[char; 16]>;

/// Options for [`wrap_ranges`] and [`wrap_lines`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapOptions {
    /// Tolerance added to the maximum width before overflow.
    pub width_epsilon: f32,
    /// Re-open the formatting active at the end of each line on the next one.
    pub carry_formatting: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width_epsilon: DEFAULT_WIDTH_EPSILON,
            carry_formatting: false,
        }
    }
}

impl WrapOptions {
    pub fn with_width_epsilon(mut self, width_epsilon: f32) -> Self {
        self.width_epsilon = width_epsilon;
        self
    }

    pub fn with_carry_formatting(mut self, enabled: bool) -> Self {
        self.carry_formatting = enabled;
        self
    }

    #[cfg(feature = "std")]
    pub fn from_config(config: &crate::WrapConfig) -> Self {
        Self::default().with_width_epsilon(config.width_epsilon)
    }
}

/// Unit ranges of the lines of `text` wrapped to `max_width`.
///
/// A space or separator at a break is dropped; any other unit starts the
/// next line. Every line consumes at least one unit, even when a single glyph
/// is wider than `max_width`.
pub fn wrap_ranges<M>(
    text: &[char],
    max_width: f32,
    metrics: &M,
    options: &WrapOptions,
) -> Vec<Range<usize>>
where
    M: GlyphMetrics + ?Sized,
{
    let mut ranges = Vec::new();
    let mut start = 0;
    while start < text.len() {
        let (end, next) = next_line(&text[start..], max_width, metrics, options, 0);
        ranges.push(start..start + end);
        start += next;
    }
    ranges
}

/// Lines of `text` wrapped to `max_width`.
///
/// With [`WrapOptions::carry_formatting`], every continuation line starts
/// with the escapes that were active at the end of the previous line.
pub fn wrap_lines<M>(text: &str, max_width: f32, metrics: &M, options: &WrapOptions) -> Vec<String>
where
    M: GlyphMetrics + ?Sized,
{
    let units: Vec<char> = text.chars().collect();
    if !options.carry_formatting {
        return wrap_ranges(&units, max_width, metrics, options)
            .into_iter()
            .map(|range| units[range].iter().collect())
            .collect();
    }

    let mut lines = Vec::new();
    let mut remaining = units;
    let mut carried = 0;
    while !remaining.is_empty() {
        let (end, next) = next_line(&remaining, max_width, metrics, options, carried);
        let line = &remaining[..end];
        lines.push(line.iter().collect());
        if next >= remaining.len() {
            break;
        }

        let prefix = format_prefix(line);
        carried = prefix.len();
        let mut continued = Vec::with_capacity(carried + remaining.len() - next);
        continued.extend_from_slice(&prefix);
        continued.extend_from_slice(&remaining[next..]);
        remaining = continued;
    }
    lines
}

/// Escapes needed to restore the formatting active at the end of `text`.
///
/// A color (palette or hex) replaces everything accumulated so far, style
/// codes accumulate, and `§r` clears the prefix.
pub fn format_prefix(text: &[char]) -> FormatPrefix {
    let mut prefix = FormatPrefix::new();
    let mut i = 0;
    while i < text.len() {
        let code_len = detect_code_length(text, i);
        if code_len == 0 {
            i += 1;
            continue;
        }

        let escape = &text[i..i + code_len];
        if code_len > LEGACY_CODE_LEN {
            prefix.clear();
            prefix.extend_from_slice(escape);
        } else {
            match FormatCode::from_char(escape[1]) {
                Some(FormatCode::Reset) => prefix.clear(),
                Some(code) if code.is_color() => {
                    prefix.clear();
                    prefix.extend_from_slice(escape);
                }
                Some(_) => prefix.extend_from_slice(escape),
                None => {}
            }
        }
        i += code_len;
    }
    prefix
}

/// End of the first line of `text` and the start of the one after it.
///
/// Units before `floor` are a carried prefix; a line never ends inside it.
fn next_line<M>(
    text: &[char],
    max_width: f32,
    metrics: &M,
    options: &WrapOptions,
    floor: usize,
) -> (usize, usize)
where
    M: GlyphMetrics + ?Sized,
{
    let end = size_to_width(text, max_width, metrics, options.width_epsilon);
    if end >= text.len() {
        return (text.len(), text.len());
    }
    if matches!(text[end], ' ' | LINE_SEPARATOR) {
        return (end, end + 1);
    }
    if end <= floor {
        let forced = (floor + detect_code_length(text, floor).max(1)).min(text.len());
        return (forced, forced);
    }
    (end, end)
}
