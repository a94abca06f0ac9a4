use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage, RgbImage};
use imageproc::drawing::draw_filled_ellipse_mut;

use crate::error::{IconError, Result};
use crate::font::{select_wordmark_font, WordmarkFont};
use crate::geometry::{Arc, GlyphPlacement, TextLayout};
use crate::models::{IconStyle, Rgb};

/// Render the icon with the default style and write it to `output_path`.
pub fn render<P: AsRef<Path>>(size: u32, output_path: P) -> Result<RgbaImage> {
    render_with_style(size, output_path, &IconStyle::default())
}

/// Render with an explicit style, write exactly one file, return the canvas.
pub fn render_with_style<P: AsRef<Path>>(size: u32, output_path: P, style: &IconStyle) -> Result<RgbaImage> {
    render_icon(size, output_path, style).map(|rendered| rendered.image)
}

/// A written icon together with the wordmark font it was drawn with.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub image: RgbaImage,
    pub font: WordmarkFont,
}

/// Like [`render_with_style`], also reporting the font that was used.
pub fn render_icon<P: AsRef<Path>>(size: u32, output_path: P, style: &IconStyle) -> Result<RenderedIcon> {
    let (image, font) = draw_icon(size, style)?;
    save_canvas(&image, output_path.as_ref(), style.palette.background)?;
    Ok(RenderedIcon { image, font })
}

/// Draw the icon into a fresh `size x size` RGBA canvas.
pub fn render_canvas(size: u32, style: &IconStyle) -> Result<RgbaImage> {
    draw_icon(size, style).map(|(image, _)| image)
}

fn draw_icon(size: u32, style: &IconStyle) -> Result<(RgbaImage, WordmarkFont)> {
    // reject before any font file is touched
    if size == 0 {
        return Err(IconError::InvalidSize);
    }
    let lines = style.wordmark_lines();
    let font = select_wordmark_font(size, &lines, &style.font_paths);
    let image = render_canvas_with_font(size, style, &lines, &font)?;
    Ok((image, font))
}

/// Same as [`render_canvas`] with an already selected wordmark font.
pub fn render_canvas_with_font(
    size: u32,
    style: &IconStyle,
    lines: &[String],
    font: &WordmarkFont,
) -> Result<RgbaImage> {
    if size == 0 {
        return Err(IconError::InvalidSize);
    }
    let mut canvas = RgbaImage::new(size, size);
    let glyph = GlyphPlacement::for_size(size);
    let background = style.palette.background.rgba();
    let foreground = style.palette.foreground.rgba();

    let radius = if style.variant.rounded_corners() { glyph.corner_radius } else { 0 };
    fill_rounded_square(&mut canvas, radius, background);
    draw_brain(&mut canvas, &glyph, foreground, background);

    let layout = TextLayout::compute(size, style.variant, lines, font);
    for line in &layout.lines {
        font.face.draw(&mut canvas, foreground, line.x.round() as i32, line.y as i32, font.px, &line.text);
    }
    Ok(canvas)
}

/// Fill the whole canvas, leaving the outside of `radius` corners transparent.
fn fill_rounded_square(canvas: &mut RgbaImage, radius: u32, color: Rgba<u8>) {
    let size = canvas.width() as f32;
    let r = radius as f32;
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let dx = (r - px).max(px - (size - r)).max(0.0);
        let dy = (r - py).max(py - (size - r)).max(0.0);
        if dx * dx + dy * dy <= r * r {
            *pixel = color;
        }
    }
}

fn draw_brain(canvas: &mut RgbaImage, glyph: &GlyphPlacement, fill: Rgba<u8>, detail: Rgba<u8>) {
    let (rx, ry) = glyph.brain.radii();
    if rx < 1.0 || ry < 1.0 {
        return;
    }
    let (cx, cy) = glyph.brain.center();
    draw_filled_ellipse_mut(canvas, (cx as i32, cy as i32), rx as i32, ry as i32, fill);
    draw_arc(canvas, &glyph.left, glyph.stroke, detail);
    draw_arc(canvas, &glyph.right, glyph.stroke, detail);
}

/// Stroke an elliptical arc of `width` pixels, inset from the arc's box.
fn draw_arc(canvas: &mut RgbaImage, arc: &Arc, width: u32, color: Rgba<u8>) {
    let (cx, cy) = arc.bbox.center();
    let (a, b) = arc.bbox.radii();
    if a <= 0.0 || b <= 0.0 {
        return;
    }
    let w = width as f32;
    let (ia, ib) = (a - w, b - w);
    let (cw, ch) = canvas.dimensions();
    let x0 = arc.bbox.x0.max(0) as u32;
    let y0 = arc.bbox.y0.max(0) as u32;
    let x1 = (arc.bbox.x1.max(0) as u32).min(cw.saturating_sub(1));
    let y1 = (arc.bbox.y1.max(0) as u32).min(ch.saturating_sub(1));
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let outer = (dx / a).powi(2) + (dy / b).powi(2);
            if outer > 1.0 {
                continue;
            }
            let inside_inner = ia > 0.0 && ib > 0.0 && (dx / ia).powi(2) + (dy / ib).powi(2) < 1.0;
            if inside_inner {
                continue;
            }
            let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
            if in_sweep(angle, arc.start, arc.end) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

fn in_sweep(angle: f32, start: f32, end: f32) -> bool {
    if end - start >= 360.0 {
        return true;
    }
    let start = start.rem_euclid(360.0);
    let end = end.rem_euclid(360.0);
    if start <= end {
        angle >= start && angle <= end
    } else {
        angle >= start || angle <= end
    }
}

/// Encode by extension: PNG keeps alpha, everything else is flattened onto
/// `background` first.
pub fn save_canvas(canvas: &RgbaImage, path: &Path, background: Rgb) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let format = match ext.as_str() {
        "png" => ImageFormat::Png,
        "jpg" | "jpeg" => ImageFormat::Jpeg,
        "bmp" => ImageFormat::Bmp,
        _ => return Err(IconError::UnsupportedFormat(path.to_path_buf())),
    };
    if format == ImageFormat::Png {
        canvas.save_with_format(path, format)?;
    } else {
        flatten_onto(canvas, background).save_with_format(path, format)?;
    }
    Ok(())
}

/// Alpha-composite `canvas` over an opaque `background`.
pub fn flatten_onto(canvas: &RgbaImage, background: Rgb) -> RgbImage {
    let bg = background.rgb();
    RgbImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        let p = canvas.get_pixel(x, y);
        let alpha = p[3] as f32 / 255.0;
        let mut out = bg;
        for c in 0..3 {
            let v = p[c] as f32 * alpha + bg[c] as f32 * (1.0 - alpha);
            out[c] = v.round().clamp(0.0, 255.0) as u8;
        }
        out
    })
}
