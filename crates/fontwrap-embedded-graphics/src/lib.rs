//! embedded-graphics mono-font metrics for `fontwrap`.
//!
//! Mono fonts have a single advance per glyph, so the metrics reduce to the
//! font's character width and spacing. Bold is emulated by drawing the glyph
//! a second time one pixel to the right, which is what the bold offset
//! models.

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

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10, FONT_6X13, FONT_7X14, FONT_8X13, FONT_9X15, FONT_9X18},
        MonoFont,
    },
    pixelcolor::Rgb888,
};
use fontwrap::{FormattingState, GlyphMetrics};

/// Bold shadow stroke width in pixels.
pub const DEFAULT_BOLD_OFFSET: f32 = 1.0;

/// [`GlyphMetrics`] over an embedded-graphics [`MonoFont`].
#[derive(Clone, Copy)]
pub struct MonoFontMetrics<'a> {
    font: &'a MonoFont<'a>,
    bold_offset: f32,
}

impl core::fmt::Debug for MonoFontMetrics<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MonoFontMetrics")
            .field("character_size", &self.font.character_size)
            .field("character_spacing", &self.font.character_spacing)
            .field("bold_offset", &self.bold_offset)
            .finish()
    }
}

impl<'a> MonoFontMetrics<'a> {
    pub fn new(font: &'a MonoFont<'a>) -> Self {
        Self {
            font,
            bold_offset: DEFAULT_BOLD_OFFSET,
        }
    }

    pub fn with_bold_offset(mut self, bold_offset: f32) -> Self {
        self.bold_offset = bold_offset;
        self
    }

    pub fn font(&self) -> &'a MonoFont<'a> {
        self.font
    }
}

impl MonoFontMetrics<'static> {
    /// Metrics for the bundled ASCII font closest to `height_px`.
    pub fn for_line_height(height_px: u32) -> Self {
        let font = match height_px {
            0..=11 => &FONT_6X10,
            12..=13 => &FONT_6X13,
            14 => &FONT_7X14,
            15 => &FONT_9X15,
            16..=18 => &FONT_9X18,
            _ => &FONT_10X20,
        };
        log::debug!(
            "line height {}px -> mono font {}x{}",
            height_px,
            font.character_size.width,
            font.character_size.height
        );
        Self::new(font)
    }
}

impl Default for MonoFontMetrics<'static> {
    fn default() -> Self {
        Self::new(&FONT_8X13)
    }
}

impl GlyphMetrics for MonoFontMetrics<'_> {
    fn char_width(&self, ch: char) -> f32 {
        if ch.is_control() {
            0.0
        } else {
            self.font.character_size.width as f32
        }
    }

    fn glyph_spacing(&self) -> f32 {
        self.font.character_spacing as f32
    }

    fn bold_offset(&self) -> f32 {
        self.bold_offset
    }
}

/// Text color of `state` as an embedded-graphics color; alpha is dropped.
pub fn text_color(state: &FormattingState) -> Rgb888 {
    argb_to_rgb888(state.color)
}

/// Shadow color of `state` as an embedded-graphics color; alpha is dropped.
pub fn shadow_color(state: &FormattingState) -> Rgb888 {
    argb_to_rgb888(state.shadow_color)
}

fn argb_to_rgb888(argb: u32) -> Rgb888 {
    let [_, r, g, b] = argb.to_be_bytes();
    Rgb888::new(r, g, b)
}
