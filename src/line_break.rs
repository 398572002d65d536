//! Greedy line breaker.
//!
//! Walks the text left to right, accumulating glyph widths, and reports the
//! index where the line has to end for a bounded width. Tie-breaks follow
//! the legacy renderer exactly:
//!
//! - a line separator always ends the line at its own index;
//! - on overflow the most recent space wins, then the position after the
//!   last consumed unit, then the overflowing unit itself;
//! - inter-glyph spacing is charged after a glyph has been accepted, and only
//!   when another visible glyph follows on the same line.

use crate::format_code::{bold_after_escape, detect_code_length};
use crate::glyph_metrics::{GlyphMetrics, WithoutSpacing};

/// Tolerance added to the maximum width before a glyph counts as overflow.
pub const DEFAULT_WIDTH_EPSILON: f32 = 0.001;

pub(crate) const LINE_SEPARATOR: char = '\n';

/// Break index for `text` within `max_width`, charging inter-glyph spacing.
///
/// Returns `text.len()` when the whole text fits, the index of the first
/// line separator when one is reached first, and 0 for empty text.
pub fn size_to_width<M>(text: &[char], max_width: f32, metrics: &M, epsilon: f32) -> usize
where
    M: GlyphMetrics + ?Sized,
{
    if text.is_empty() {
        return 0;
    }

    let length = text.len();
    let limit = max_width + epsilon;
    let mut current_width = 0.0f32;
    let mut last_safe_position = 0usize;
    let mut last_space: Option<usize> = None;
    let mut is_bold = false;

    let mut i = 0;
    while i < length {
        let ch = text[i];
        if ch == LINE_SEPARATOR {
            return i;
        }

        let code_len = detect_code_length(text, i);
        if code_len > 0 {
            is_bold = bold_after_escape(text, i, code_len, is_bold);
            i += code_len;
            last_safe_position = i;
            continue;
        }

        if ch == ' ' {
            last_space = Some(i);
        }

        let char_width = metrics.char_width(ch).max(0.0);
        let mut next = current_width + char_width;
        if is_bold && char_width > 0.0 {
            next += metrics.bold_offset();
        }

        if next > limit {
            let mut break_at = last_space.unwrap_or(last_safe_position);
            if break_at == 0 {
                break_at = i;
            }
            log::trace!(
                "line overflow at {} (width {} > {}), breaking at {}",
                i,
                next,
                max_width,
                break_at
            );
            return break_at;
        }

        current_width = next;
        if next_visible_on_line(text, i + 1, metrics) {
            current_width += metrics.glyph_spacing();
        }

        i += 1;
        last_safe_position = i;
    }

    length
}

/// Break index for `text` within `max_width`, ignoring inter-glyph spacing.
///
/// Same decisions as [`size_to_width`] for metrics without spacing.
pub fn compute_forward_break<M>(text: &[char], max_width: f32, metrics: &M, epsilon: f32) -> usize
where
    M: GlyphMetrics + ?Sized,
{
    size_to_width(text, max_width, &WithoutSpacing(metrics), epsilon)
}

/// Whether a glyph with positive width follows `from` before the line ends.
fn next_visible_on_line<M>(text: &[char], from: usize, metrics: &M) -> bool
where
    M: GlyphMetrics + ?Sized,
{
    let mut j = from;
    while j < text.len() {
        let ch = text[j];
        if ch == LINE_SEPARATOR {
            return false;
        }
        let code_len = detect_code_length(text, j);
        if code_len > 0 {
            j += code_len;
            continue;
        }
        return metrics.char_width(ch) > 0.0;
    }
    false
}
