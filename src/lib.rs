//! Legacy-compatible rich-text measurement and line breaking.
//!
//! `fontwrap` reproduces the line-wrapping decisions of the legacy
//! formatted-text renderer: strings carry in-band `§` formatting escapes
//! (legacy two-unit codes plus the extended hex-color forms), glyphs have
//! fractional widths, bold text is widened by a shadow offset, and a flat
//! inter-glyph spacing is charged only between visible glyphs.
//!
//! Text is addressed as a slice of `char` code units so that break indices
//! line up with the legacy renderer for every BMP character.
//!
//! ```
//! use fontwrap::{size_to_width, Monospace, DEFAULT_WIDTH_EPSILON};
//!
//! let text: Vec<char> = "ok ok HELLO".chars().collect();
//! let metrics = Monospace::new(1.0).with_glyph_spacing(0.5);
//! assert_eq!(size_to_width(&text, 7.0, &metrics, DEFAULT_WIDTH_EPSILON), 5);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

extern crate alloc;

#[cfg(feature = "std")]
pub mod config;
pub mod format_code;
pub mod glyph_metrics;
pub mod hex_text;
pub mod line_break;
pub mod text_metrics;
pub mod wrap;

#[cfg(feature = "std")]
pub use config::{ConfigError, WrapConfig};
pub use format_code::{detect_code_length, FormatCode, SECTION_SIGN};
pub use glyph_metrics::{FnMetrics, GlyphMetrics, Monospace, Unstyled, WithoutSpacing};
pub use hex_text::{FormattingState, HexTextDecoder};
pub use line_break::{compute_forward_break, size_to_width, DEFAULT_WIDTH_EPSILON};
pub use text_metrics::{line_break_index, line_break_index_with, max_line_width, max_line_width_with};
pub use wrap::{format_prefix, wrap_lines, wrap_ranges, FormatPrefix, WrapOptions};
