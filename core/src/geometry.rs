//! Proportional placement of the brain glyph and the wordmark lines.

use crate::font::WordmarkFont;
use crate::models::LayoutVariant;

/// Inclusive pixel box `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    pub fn center(&self) -> (f32, f32) {
        ((self.x0 + self.x1) as f32 / 2.0, (self.y0 + self.y1) as f32 / 2.0)
    }

    pub fn radii(&self) -> (f32, f32) {
        ((self.x1 - self.x0) as f32 / 2.0, (self.y1 - self.y0) as f32 / 2.0)
    }
}

/// Arc sweep in degrees, clockwise from 3 o'clock (screen coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub bbox: BBox,
    pub start: f32,
    pub end: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    pub brain: BBox,
    pub left: Arc,
    pub right: Arc,
    pub stroke: u32,
    pub corner_radius: u32,
}

impl GlyphPlacement {
    pub fn for_size(size: u32) -> Self {
        let s = size as i32;
        let brain_y = s / 4;
        let brain_size = s / 6;
        let brain = BBox {
            x0: s / 2 - brain_size,
            y0: brain_y - brain_size / 2,
            x1: s / 2 + brain_size,
            y1: brain_y + brain_size / 2,
        };
        let left = Arc {
            bbox: BBox { x0: brain.x0, y0: brain.y0, x1: s / 2, y1: brain.y1 },
            start: 180.0,
            end: 360.0,
        };
        let right = Arc {
            bbox: BBox { x0: s / 2, y0: brain.y0, x1: brain.x1, y1: brain.y1 },
            start: 0.0,
            end: 180.0,
        };
        Self { brain, left, right, stroke: (size / 80).max(1), corner_radius: size / 8 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<LineLayout>,
}

/// Spacing between stacked lines, as a multiple of the line height.
const LINE_SPACING: f32 = 1.1;

impl TextLayout {
    pub fn compute(size: u32, variant: LayoutVariant, lines: &[String], font: &WordmarkFont) -> Self {
        let top = match variant {
            LayoutVariant::SingleLine => (size * 2 / 3) as f32,
            LayoutVariant::TwoLine => (size * 7 / 12) as f32,
        };
        let (_, line_height) = font.measure_lines(lines);
        let mut y = top;
        let mut out = Vec::with_capacity(lines.len());
        for text in lines {
            let (width, height) = font.face.measure(text, font.px);
            out.push(LineLayout {
                text: text.clone(),
                x: centered_origin(size, width),
                y,
                width,
                height,
            });
            y += line_height as f32 * LINE_SPACING;
        }
        Self { lines: out }
    }
}

/// Left edge that centers a run of `width` pixels on a `size` wide canvas.
pub fn centered_origin(size: u32, width: u32) -> f32 {
    (size as f32 - width as f32) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Face, FontSource};

    fn builtin(px: f32) -> WordmarkFont {
        WordmarkFont { face: Face::BuiltIn, px, source: FontSource::Default, fitted: false }
    }

    #[test]
    fn glyph_matches_proportions_at_512() {
        let g = GlyphPlacement::for_size(512);
        assert_eq!(g.brain, BBox { x0: 171, y0: 86, x1: 341, y1: 170 });
        assert_eq!(g.left.bbox, BBox { x0: 171, y0: 86, x1: 256, y1: 170 });
        assert_eq!(g.right.bbox, BBox { x0: 256, y0: 86, x1: 341, y1: 170 });
        assert_eq!(g.stroke, 6);
        assert_eq!(g.corner_radius, 64);
    }

    #[test]
    fn glyph_stays_inside_canvas_for_all_sizes() {
        for size in [16u32, 32, 48, 64, 128, 256, 512, 1024] {
            let g = GlyphPlacement::for_size(size);
            let s = size as i32;
            assert!(g.brain.x0 >= 0 && g.brain.x1 <= s);
            assert!(g.brain.y0 >= 0 && g.brain.y1 <= s);
            assert!(g.stroke >= 1);
        }
    }

    #[test]
    fn lines_are_horizontally_centered() {
        let lines = vec!["NeuroInsight".to_string()];
        for size in [16u32, 32, 48, 64, 128, 256, 512, 1024] {
            let layout = TextLayout::compute(size, LayoutVariant::SingleLine, &lines, &builtin(size as f32 / 10.0));
            let line = &layout.lines[0];
            let center = line.x + line.width as f32 / 2.0;
            assert!((center - size as f32 / 2.0).abs() < 1e-3, "size {} off center", size);
            assert_eq!(line.y, (size * 2 / 3) as f32);
        }
    }

    #[test]
    fn outline_lines_are_horizontally_centered() {
        let path = std::path::Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf");
        let Some(face) = Face::load(path) else { return };
        let lines = vec!["Neuro".to_string(), "Insight".to_string()];
        for size in [16u32, 32, 48, 64, 128, 256, 512, 1024] {
            let font = WordmarkFont {
                face: face.clone(),
                px: (size / 5).max(1) as f32,
                source: FontSource::Found(path.to_path_buf()),
                fitted: true,
            };
            for variant in [LayoutVariant::SingleLine, LayoutVariant::TwoLine] {
                let layout = TextLayout::compute(size, variant, &lines, &font);
                for line in &layout.lines {
                    let center = line.x + line.width as f32 / 2.0;
                    assert!((center - size as f32 / 2.0).abs() < 1e-3, "size {} '{}' off center", size, line.text);
                }
            }
        }
    }

    #[test]
    fn two_line_layout_stacks_downwards() {
        let lines = vec!["Neuro".to_string(), "Insight".to_string()];
        let layout = TextLayout::compute(512, LayoutVariant::TwoLine, &lines, &builtin(50.0));
        assert_eq!(layout.lines.len(), 2);
        let (a, b) = (&layout.lines[0], &layout.lines[1]);
        assert_eq!(a.y, (512 * 7 / 12) as f32);
        assert!(b.y > a.y + a.height as f32);
        assert!(a.x > b.x, "shorter first line starts further right");
    }
}
