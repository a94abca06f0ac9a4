use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use image::{Rgb as RgbPixel, Rgba};

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn rgba(self) -> Rgba<u8> {
        Rgba([self.0, self.1, self.2, 0xff])
    }

    pub fn rgb(self) -> RgbPixel<u8> {
        RgbPixel([self.0, self.1, self.2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
}

/// Navy square, white glyph and wordmark.
pub const NAVY_BLUE: Rgb = Rgb(0x00, 0x3d, 0x7a);
pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

impl Default for Palette {
    fn default() -> Self {
        Self { background: NAVY_BLUE, foreground: WHITE }
    }
}

/// Which of the two icon layouts to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutVariant {
    /// One centered wordmark line on a rounded square.
    #[default]
    SingleLine,
    /// Wordmark split over two stacked lines on a square with sharp corners.
    TwoLine,
}

impl LayoutVariant {
    pub fn rounded_corners(self) -> bool {
        matches!(self, LayoutVariant::SingleLine)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutVariant::SingleLine => "single-line",
            LayoutVariant::TwoLine => "two-line",
        }
    }
}

impl FromStr for LayoutVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single-line" | "single" | "1" => Ok(LayoutVariant::SingleLine),
            "two-line" | "two" | "2" => Ok(LayoutVariant::TwoLine),
            other => Err(format!("unknown layout variant '{}'", other)),
        }
    }
}

/// Everything the renderer needs besides the edge length.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub palette: Palette,
    pub wordmark: String,
    pub variant: LayoutVariant,
    /// Probed in order; the first path that exists wins.
    pub font_paths: Vec<PathBuf>,
}

impl IconStyle {
    pub fn with_variant(mut self, variant: LayoutVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_font_paths(mut self, font_paths: Vec<PathBuf>) -> Self {
        self.font_paths = font_paths;
        self
    }

    /// Wordmark split into the lines drawn for this style's variant.
    pub fn wordmark_lines(&self) -> Vec<String> {
        match self.variant {
            LayoutVariant::SingleLine => vec![self.wordmark.clone()],
            LayoutVariant::TwoLine => {
                let (first, second) = split_wordmark(&self.wordmark);
                if second.is_empty() {
                    vec![first.to_string()]
                } else {
                    vec![first.to_string(), second.to_string()]
                }
            }
        }
    }
}

impl Default for IconStyle {
    fn default() -> Self {
        (*crate::DEFAULT_STYLE).clone()
    }
}

/// Split a wordmark in two: at the first space, else before the first
/// capital after the start ("NeuroInsight" -> "Neuro", "Insight"), else
/// at the middle character.
pub fn split_wordmark(text: &str) -> (&str, &str) {
    let text = text.trim();
    if let Some((a, b)) = text.split_once(' ') {
        return (a.trim_end(), b.trim_start());
    }
    if let Some((idx, _)) = text.char_indices().skip(1).find(|(_, c)| c.is_uppercase()) {
        return text.split_at(idx);
    }
    let chars = text.chars().count();
    if chars < 2 {
        return (text, "");
    }
    let mid = text
        .char_indices()
        .nth(chars / 2)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    text.split_at(mid)
}
