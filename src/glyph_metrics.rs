//! Glyph metrics consumed by the breaker and the multi-line metrics.

/// Per-glyph measurements supplied by the font subsystem.
///
/// Implementations must stay immutable for the duration of a measurement
/// pass, so one instance can be shared across threads. Widths may be
/// negative for invisible glyphs; callers clamp them.
pub trait GlyphMetrics: Send + Sync {
    /// Fine-grained advance of `ch` in pixels.
    fn char_width(&self, ch: char) -> f32;

    /// Spacing inserted between two consecutive visible glyphs.
    fn glyph_spacing(&self) -> f32 {
        0.0
    }

    /// Extra width of a bold glyph (the offset shadow stroke).
    fn bold_offset(&self) -> f32;
}

impl<M: GlyphMetrics + ?Sized> GlyphMetrics for &M {
    fn char_width(&self, ch: char) -> f32 {
        (**self).char_width(ch)
    }

    fn glyph_spacing(&self) -> f32 {
        (**self).glyph_spacing()
    }

    fn bold_offset(&self) -> f32 {
        (**self).bold_offset()
    }
}

/// Metrics backed by a width closure and two constants.
#[derive(Clone, Copy, Debug)]
pub struct FnMetrics<F> {
    width: F,
    spacing: f32,
    bold_offset: f32,
}

impl<F> FnMetrics<F>
where
    F: Fn(char) -> f32,
{
    pub fn new(width: F, spacing: f32, bold_offset: f32) -> Self {
        Self {
            width,
            spacing,
            bold_offset,
        }
    }
}

impl<F> GlyphMetrics for FnMetrics<F>
where
    F: Fn(char) -> f32 + Send + Sync,
{
    fn char_width(&self, ch: char) -> f32 {
        (self.width)(ch)
    }

    fn glyph_spacing(&self) -> f32 {
        self.spacing
    }

    fn bold_offset(&self) -> f32 {
        self.bold_offset
    }
}

/// Flat advance for every glyph except line separators and control units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Monospace {
    advance: f32,
    spacing: f32,
    bold_offset: f32,
}

impl Monospace {
    pub fn new(advance: f32) -> Self {
        Self {
            advance,
            spacing: 0.0,
            bold_offset: 1.0,
        }
    }

    pub fn with_glyph_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_bold_offset(mut self, bold_offset: f32) -> Self {
        self.bold_offset = bold_offset;
        self
    }
}

impl GlyphMetrics for Monospace {
    fn char_width(&self, ch: char) -> f32 {
        if ch.is_control() {
            0.0
        } else {
            self.advance
        }
    }

    fn glyph_spacing(&self) -> f32 {
        self.spacing
    }

    fn bold_offset(&self) -> f32 {
        self.bold_offset
    }
}

/// Hides the inter-glyph spacing of the wrapped metrics.
///
/// This is the call shape of the plain forward breaker, which predates
/// spacing-aware fonts.
#[derive(Clone, Copy, Debug)]
pub struct WithoutSpacing<M>(pub M);

impl<M: GlyphMetrics> GlyphMetrics for WithoutSpacing<M> {
    fn char_width(&self, ch: char) -> f32 {
        self.0.char_width(ch)
    }

    fn bold_offset(&self) -> f32 {
        self.0.bold_offset()
    }
}

/// Hides the bold offset of the wrapped metrics, for unstyled measurement.
#[derive(Clone, Copy, Debug)]
pub struct Unstyled<M>(pub M);

impl<M: GlyphMetrics> GlyphMetrics for Unstyled<M> {
    fn char_width(&self, ch: char) -> f32 {
        self.0.char_width(ch)
    }

    fn glyph_spacing(&self) -> f32 {
        self.0.glyph_spacing()
    }

    fn bold_offset(&self) -> f32 {
        0.0
    }
}
