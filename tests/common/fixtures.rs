use fontwrap::GlyphMetrics;

/// Sample from the legacy wrap regression: two short tokens and a long run.
pub const OK_OK_HELLO: &str =
    "ok ok HELLLLLLLLLLLLLLLLLLLLLLLLLLLLLLOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOO";

/// Mixed prose with legacy codes, hex escapes and explicit separators.
pub const CORPUS: &[&str] = &[
    "",
    "hello",
    "the quick brown fox jumps over the lazy dog",
    "ok ok  HELLLLL",
    "§lBold §rplain §ogreen §athings and  double  spaces",
    "§#ff8800orange§r text §x§1§2§3§4§5§6expanded hex",
    "§#80ff00ffalpha§lbold run without any spaces at all here",
    "line one\nline two is longer\n\nline four",
    "   leading spaces then words",
    "trailing lone introducer §",
    "§kmagic §mstrike §nunder §oitalic §lbold §rreset",
    "Supercalifragilisticexpialidocious",
];

pub fn units(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Glyph widths of the legacy regression: spaces 2, lowercase 3, rest 5.
pub struct ProportionalMetrics {
    pub spacing: f32,
    pub bold_offset: f32,
}

impl ProportionalMetrics {
    pub const fn new() -> Self {
        Self {
            spacing: 0.0,
            bold_offset: 1.0,
        }
    }

    pub const fn with_spacing(spacing: f32) -> Self {
        Self {
            spacing,
            bold_offset: 1.0,
        }
    }
}

impl GlyphMetrics for ProportionalMetrics {
    fn char_width(&self, ch: char) -> f32 {
        if ch == ' ' || ch == '\u{00A0}' || ch == '\u{202F}' {
            2.0
        } else if ch.is_lowercase() {
            3.0
        } else if ch == '\n' {
            0.0
        } else {
            5.0
        }
    }

    fn glyph_spacing(&self) -> f32 {
        self.spacing
    }

    fn bold_offset(&self) -> f32 {
        self.bold_offset
    }
}
