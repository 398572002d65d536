//! Measurements over formatted text that may span several lines.
//!
//! Lines are split on explicit separators only. Formatting escapes are always
//! skipped and never add width; the `styled` flag decides whether bold codes
//! widen the glyphs that follow them.

use crate::format_code::{bold_after_escape, detect_code_length};
use crate::glyph_metrics::{FnMetrics, GlyphMetrics, Unstyled};
use crate::line_break::{size_to_width, DEFAULT_WIDTH_EPSILON, LINE_SEPARATOR};

/// Width of the widest line of `text`.
///
/// Each visible glyph costs its width plus one unit of spacing, plus the bold
/// offset while bold is active and `styled` is set. Width and bold state reset
/// at every line separator.
pub fn max_line_width<F>(
    text: &[char],
    styled: bool,
    char_width: F,
    spacing: f32,
    bold_offset: f32,
) -> f32
where
    F: Fn(char) -> f32 + Send + Sync,
{
    max_line_width_with(text, styled, &FnMetrics::new(char_width, spacing, bold_offset))
}

/// [`max_line_width`] over any [`GlyphMetrics`].
pub fn max_line_width_with<M>(text: &[char], styled: bool, metrics: &M) -> f32
where
    M: GlyphMetrics + ?Sized,
{
    let mut max_width = 0.0f32;
    let mut line_width = 0.0f32;
    let mut is_bold = false;

    let mut i = 0;
    while i < text.len() {
        let ch = text[i];
        if ch == LINE_SEPARATOR {
            max_width = max_width.max(line_width);
            line_width = 0.0;
            is_bold = false;
            i += 1;
            continue;
        }

        let code_len = detect_code_length(text, i);
        if code_len > 0 {
            if styled {
                is_bold = bold_after_escape(text, i, code_len, is_bold);
            }
            i += code_len;
            continue;
        }

        let width = metrics.char_width(ch);
        if width > 0.0 {
            line_width += width + metrics.glyph_spacing();
            if is_bold {
                line_width += metrics.bold_offset();
            }
        }
        i += 1;
    }

    max_width.max(line_width)
}

/// Index where the first line of `text` ends within `max_width`.
///
/// A line separator reached before overflow is returned unchanged; otherwise
/// this is the greedy break of [`size_to_width`].
pub fn line_break_index<F>(
    text: &[char],
    max_width: f32,
    styled: bool,
    char_width: F,
    spacing: f32,
    bold_offset: f32,
) -> usize
where
    F: Fn(char) -> f32 + Send + Sync,
{
    line_break_index_with(
        text,
        max_width,
        styled,
        &FnMetrics::new(char_width, spacing, bold_offset),
    )
}

/// [`line_break_index`] over any [`GlyphMetrics`].
pub fn line_break_index_with<M>(text: &[char], max_width: f32, styled: bool, metrics: &M) -> usize
where
    M: GlyphMetrics + ?Sized,
{
    if styled {
        size_to_width(text, max_width, metrics, DEFAULT_WIDTH_EPSILON)
    } else {
        size_to_width(text, max_width, &Unstyled(metrics), DEFAULT_WIDTH_EPSILON)
    }
}
