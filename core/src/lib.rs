//! Procedural renderer for the NeuroInsight application icon.
//!
//! A square canvas gets a navy fill (optionally with rounded corners), a
//! white two-hemisphere brain glyph near the top and the wordmark centered in
//! the lower third. All geometry scales with the edge length.

mod builtin_font;
pub mod error;
pub mod font;
pub mod geometry;
pub mod models;
pub mod render;

pub use error::{IconError, Result};
pub use font::{FontSource, WordmarkFont};
pub use models::*;
pub use render::{render, render_canvas, render_icon, render_with_style, RenderedIcon};

use std::path::PathBuf;

use once_cell::sync::Lazy;

pub const WORDMARK: &str = "NeuroInsight";

/// Font files probed in order; the first one present is used.
pub const FONT_PATHS: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

pub static DEFAULT_STYLE: Lazy<IconStyle> = Lazy::new(|| IconStyle {
    palette: Palette::default(),
    wordmark: WORDMARK.to_string(),
    variant: LayoutVariant::default(),
    font_paths: FONT_PATHS.iter().map(PathBuf::from).collect(),
});
