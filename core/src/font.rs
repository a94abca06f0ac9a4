//! Font probing and wordmark font selection.
//!
//! Nothing in here fails: a missing or unreadable font file only means the
//! next candidate is tried, and the compiled-in bitmap face is the last resort.

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{FontArc, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::builtin_font;

/// Outcome of probing the candidate font paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    Found(PathBuf),
    Default,
}

/// First candidate for which `exists` holds, in list order.
pub fn probe_font_path<F>(candidates: &[PathBuf], exists: F) -> FontSource
where
    F: Fn(&Path) -> bool,
{
    candidates
        .iter()
        .find(|p| exists(p.as_path()))
        .map(|p| FontSource::Found(p.clone()))
        .unwrap_or(FontSource::Default)
}

pub fn probe_fonts(candidates: &[PathBuf]) -> FontSource {
    probe_font_path(candidates, |p| p.is_file())
}

/// A loaded typeface.
#[derive(Clone)]
pub enum Face {
    Outline(FontArc),
    BuiltIn,
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Outline(_) => f.write_str("Face::Outline"),
            Face::BuiltIn => f.write_str("Face::BuiltIn"),
        }
    }
}

impl Face {
    /// Read and parse an outline font; any failure yields `None`.
    pub fn load(path: &Path) -> Option<Face> {
        let data = fs::read(path).ok()?;
        FontArc::try_from_vec(data).ok().map(Face::Outline)
    }

    /// Resolve a probe result to a face, falling back to the built-in one.
    pub fn from_source(source: &FontSource) -> Face {
        match source {
            FontSource::Found(path) => Face::load(path).unwrap_or(Face::BuiltIn),
            FontSource::Default => Face::BuiltIn,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Face::BuiltIn)
    }

    /// Pixel width and height of `text` rendered at `px`.
    pub fn measure(&self, text: &str, px: f32) -> (u32, u32) {
        match self {
            Face::Outline(font) => text_size(PxScale::from(px), font, text),
            Face::BuiltIn => builtin_font::text_size(text, builtin_font::scale_for_px(px)),
        }
    }

    pub fn draw(&self, canvas: &mut RgbaImage, color: Rgba<u8>, x: i32, y: i32, px: f32, text: &str) {
        match self {
            Face::Outline(font) => draw_text_mut(canvas, color, x, y, PxScale::from(px), font, text),
            Face::BuiltIn => {
                builtin_font::draw_text(canvas, color, x, y, builtin_font::scale_for_px(px), text)
            }
        }
    }
}

/// The face and pixel size chosen for the wordmark.
#[derive(Debug, Clone)]
pub struct WordmarkFont {
    pub face: Face,
    pub px: f32,
    /// Where the face came from; `Default` means the built-in bitmap face.
    pub source: FontSource,
    /// Whether the face/size came out of the fit search rather than the base font.
    pub fitted: bool,
}

impl WordmarkFont {
    /// Width of the widest line and height of the tallest one.
    pub fn measure_lines(&self, lines: &[String]) -> (u32, u32) {
        lines.iter().fold((0, 0), |(w, h), line| {
            let (lw, lh) = self.face.measure(line, self.px);
            (w.max(lw), h.max(lh))
        })
    }
}

/// Pixel size of the base font for an icon of edge `size`.
pub fn base_px(size: u32) -> f32 {
    (size / 9).max(1) as f32
}

/// Widest wordmark line allowed: the canvas minus a `size/8` margin each side.
pub fn max_text_width(size: u32) -> u32 {
    size - 2 * (size / 8)
}

/// Candidate pixel sizes for the fit search, largest first: `size/5` down to
/// (but not including) `size/20`, step 2.
pub fn fit_sizes(size: u32) -> impl Iterator<Item = u32> {
    (size / 20 + 1..=size / 5).rev().step_by(2)
}

/// Scan `fit_sizes` and at each size try every face in order. Returns the
/// index of the first face whose widest line fits, with its pixel size.
pub fn fit_search(size: u32, faces: &[Face], lines: &[String]) -> Option<(usize, f32)> {
    let limit = max_text_width(size);
    for px in fit_sizes(size) {
        let px = px as f32;
        for (idx, face) in faces.iter().enumerate() {
            let widest = lines.iter().map(|l| face.measure(l, px).0).max().unwrap_or(0);
            if widest <= limit {
                return Some((idx, px));
            }
        }
    }
    None
}

/// Pick the wordmark font for an icon of edge `size`.
///
/// The base font is the first existing candidate at `base_px(size)`, or the
/// built-in face. The fit search then looks for the largest size at which a
/// loadable candidate (or, with none loadable, the built-in face) keeps every
/// line inside the margins; without a fit the base font is used.
pub fn select_wordmark_font(size: u32, lines: &[String], candidates: &[PathBuf]) -> WordmarkFont {
    // each existing candidate is read once; `None` marks a file that failed to parse
    let existing: Vec<(&PathBuf, Option<Face>)> = candidates
        .iter()
        .filter(|p| p.is_file())
        .map(|p| (p, Face::load(p)))
        .collect();

    let (base_source, base_face) = match existing.first() {
        Some((path, Some(face))) => (FontSource::Found((*path).clone()), face.clone()),
        _ => (FontSource::Default, Face::BuiltIn),
    };

    let mut loaded: Vec<(FontSource, Face)> = existing
        .into_iter()
        .filter_map(|(p, face)| face.map(|f| (FontSource::Found(p.clone()), f)))
        .collect();
    if loaded.is_empty() {
        loaded.push((FontSource::Default, Face::BuiltIn));
    }

    let faces: Vec<Face> = loaded.iter().map(|(_, f)| f.clone()).collect();
    match fit_search(size, &faces, lines) {
        Some((idx, px)) => {
            let (source, face) = loaded.swap_remove(idx);
            WordmarkFont { face, px, source, fitted: true }
        }
        None => WordmarkFont { face: base_face, px: base_px(size), source: base_source, fitted: false },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn first_existing_candidate_wins() {
        let candidates = paths(&["/a.ttf", "/b.ttf", "/c.ttf"]);
        let found = probe_font_path(&candidates, |p| p == Path::new("/b.ttf") || p == Path::new("/c.ttf"));
        assert_eq!(found, FontSource::Found(PathBuf::from("/b.ttf")));
    }

    #[test]
    fn candidate_lookup_is_deterministic() {
        let candidates = paths(&["/x.ttf", "/y.ttf"]);
        let exists = |p: &Path| p == Path::new("/y.ttf");
        let first = probe_font_path(&candidates, exists);
        for _ in 0..5 {
            assert_eq!(probe_font_path(&candidates, exists), first);
        }
    }

    #[test]
    fn no_existing_candidate_is_default() {
        let candidates = paths(&["/nope.ttf"]);
        assert_eq!(probe_font_path(&candidates, |_| false), FontSource::Default);
        assert_eq!(probe_font_path(&[], |_| true), FontSource::Default);
    }

    #[test]
    fn malformed_font_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("broken.ttf");
        fs::write(&bogus, b"definitely not a font").unwrap();
        assert!(Face::load(&bogus).is_none());
        let face = Face::from_source(&FontSource::Found(bogus.clone()));
        assert!(face.is_builtin());

        let lines = vec!["NeuroInsight".to_string()];
        let font = select_wordmark_font(512, &lines, &[bogus]);
        assert!(font.face.is_builtin());
        assert_eq!(font.source, FontSource::Default);
    }

    #[test]
    fn fit_sizes_scan_downwards_by_two() {
        let sizes: Vec<u32> = fit_sizes(100).collect();
        assert_eq!(sizes, vec![20, 18, 16, 14, 12, 10, 8, 6]);
        assert_eq!(fit_sizes(4).count(), 0);
    }

    #[test]
    fn fit_search_finds_largest_fitting_builtin_size() {
        let lines = vec!["NeuroInsight".to_string()];
        let (idx, px) = fit_search(512, &[Face::BuiltIn], &lines).unwrap();
        assert_eq!(idx, 0);
        let (w, _) = Face::BuiltIn.measure(&lines[0], px);
        assert!(w <= max_text_width(512));
        // two pixels larger would no longer fit (or is outside the scan)
        let bigger = px + 2.0;
        if bigger as u32 <= 512 / 5 {
            assert!(Face::BuiltIn.measure(&lines[0], bigger).0 > max_text_width(512));
        }
    }

    const SYSTEM_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

    fn system_font() -> Option<PathBuf> {
        let path = PathBuf::from(SYSTEM_FONT);
        if path.is_file() {
            Some(path)
        } else {
            println!("{} not installed; skipping outline font test", SYSTEM_FONT);
            None
        }
    }

    #[test]
    fn outline_font_is_fitted_inside_margins() {
        let Some(font_path) = system_font() else { return };
        let lines = vec!["NeuroInsight".to_string()];
        let candidates = vec![PathBuf::from("/nonexistent/first.ttf"), font_path.clone()];
        for size in [64u32, 128, 256, 512, 1024] {
            let font = select_wordmark_font(size, &lines, &candidates);
            assert_eq!(font.source, FontSource::Found(font_path.clone()), "size {}", size);
            assert!(font.fitted, "size {} not fitted", size);
            assert!(!font.face.is_builtin());

            let (widest, _) = font.measure_lines(&lines);
            assert!(widest <= max_text_width(size), "size {}: {} too wide", size, widest);

            let bigger = font.px + 2.0;
            if bigger as u32 <= size / 5 {
                assert!(
                    font.face.measure(&lines[0], bigger).0 > max_text_width(size),
                    "size {}: {}px would also fit",
                    size,
                    bigger
                );
            }
        }
    }

    #[test]
    fn fit_search_skips_malformed_candidate() {
        let Some(font_path) = system_font() else { return };
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("broken.ttf");
        fs::write(&bogus, b"not a font either").unwrap();
        let lines = vec!["NeuroInsight".to_string()];
        let font = select_wordmark_font(512, &lines, &[bogus, font_path.clone()]);
        assert_eq!(font.source, FontSource::Found(font_path));
        assert!(font.fitted);
    }

    #[test]
    fn unfitted_outline_font_uses_base_size() {
        let Some(font_path) = system_font() else { return };
        let lines = vec!["NeuroInsight".to_string()];
        // 16px: the scan only tries 3px and 1px, neither leaves room in 12px
        let font = select_wordmark_font(16, &lines, &[font_path.clone()]);
        if !font.fitted {
            assert_eq!(font.source, FontSource::Found(font_path));
            assert!(!font.face.is_builtin());
            assert_eq!(font.px, base_px(16));
        }
    }

    #[test]
    fn tiny_icons_use_base_font() {
        let lines = vec!["NeuroInsight".to_string()];
        let font = select_wordmark_font(16, &lines, &[]);
        assert!(!font.fitted);
        assert!(font.face.is_builtin());
        assert_eq!(font.px, 1.0);
    }
}
