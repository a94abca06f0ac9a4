use std::fs;
use std::path::PathBuf;

use neuroicon_core::{render_icon, FontSource, Result, WordmarkFont};

use crate::container::{assemble_container, ContainerOutcome};
use crate::logger::{log_detail, log_line};
use crate::models::Config;

#[derive(Debug, Clone)]
pub struct RunReport {
    /// Per-size files, in render order.
    pub icons: Vec<(u32, PathBuf)>,
    pub main_icon: PathBuf,
    pub container: ContainerOutcome,
}

/// Render every configured size, the canonical icon, then try the container.
/// Render failures abort the run; the container step never does.
pub fn run(cfg: &Config) -> Result<RunReport> {
    let style = cfg.style();
    log_line("🎨 Generating NeuroInsight icons...");
    log_line(&format!("   Using navy blue color: {}", style.palette.background));
    log_line(&format!("   Layout: {}", style.variant.as_str()));

    fs::create_dir_all(cfg.icons_path())?;

    let mut icons = Vec::with_capacity(cfg.sizes.len());
    for &size in &cfg.sizes {
        let path = cfg.size_path(size);
        let rendered = render_icon(size, &path, &style)?;
        log_line(&format!("✅ Created {} ({}x{})", path.display(), size, size));
        log_detail(&describe_font(size, &rendered.font));
        icons.push((size, path));
    }

    let main_icon = cfg.main_icon_path();
    let rendered = render_icon(cfg.main_size, &main_icon, &style)?;
    log_line(&format!("✅ Created {} ({}x{})", main_icon.display(), cfg.main_size, cfg.main_size));
    log_detail(&describe_font(cfg.main_size, &rendered.font));

    log_line("");
    log_line("Generated files:");
    log_line(&format!("  - {} ({}x{}) - Main icon", main_icon.display(), cfg.main_size, cfg.main_size));
    log_line(&format!("  - {}/icon-*.png ({} sizes)", cfg.icons_path().display(), icons.len()));

    log_line("");
    log_line("Attempting to create Windows .ico file...");
    let sources: Vec<PathBuf> = cfg.container_sizes.iter().map(|&s| cfg.size_path(s)).collect();
    let container = assemble_container(&sources, &cfg.container_path());
    match &container {
        ContainerOutcome::Written { path, sizes } => {
            log_line(&format!("✅ Created {} for Windows ({:?})", path.display(), sizes))
        }
        ContainerOutcome::Skipped => log_line("ℹ️  Could not create .ico: no source images could be opened"),
        ContainerOutcome::Failed(msg) => log_line(&format!("ℹ️  Could not create .ico: {}", msg)),
    }

    Ok(RunReport { icons, main_icon, container })
}

/// One log line naming the wordmark font an icon was drawn with.
fn describe_font(size: u32, font: &WordmarkFont) -> String {
    let face = match &font.source {
        FontSource::Found(path) => path.display().to_string(),
        FontSource::Default => "built-in bitmap font".to_string(),
    };
    let how = if font.fitted { "fitted" } else { "base size" };
    format!("icon-{}: wordmark in {} at {}px ({})", size, face, font.px, how)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn test_config(dir: &Path) -> Config {
        Config {
            output_dir: dir.to_path_buf(),
            font_paths: vec![dir.join("missing-font.ttf")],
            write_log_file: false,
            ..Config::default()
        }
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn full_run_writes_every_size_and_canonical_icon() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = test_config(dir.path());
        let report = run(&cfg).unwrap();

        let icons = file_names(&cfg.icons_path());
        assert_eq!(icons.len(), 8);
        for size in [16u32, 32, 48, 64, 128, 256, 512, 1024] {
            let path = cfg.size_path(size);
            assert!(icons.contains(&format!("icon-{}.png", size)));
            assert_eq!(image::image_dimensions(&path).unwrap(), (size, size));
        }
        assert_eq!(image::image_dimensions(&report.main_icon).unwrap(), (512, 512));
        assert_eq!(report.icons.len(), 8);
        assert_eq!(
            report.container,
            ContainerOutcome::Written { path: cfg.container_path(), sizes: vec![16, 32, 48, 64, 128, 256] }
        );
        assert_eq!(file_names(dir.path()), vec!["icon.ico", "icon.png", "icons"]);
    }

    #[test]
    fn existing_output_directory_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config { sizes: vec![16, 32], ..test_config(dir.path()) };
        fs::create_dir_all(cfg.icons_path()).unwrap();
        run(&cfg).unwrap();
        run(&cfg).unwrap();
        assert_eq!(file_names(&cfg.icons_path()), vec!["icon-16.png", "icon-32.png"]);
    }

    #[test]
    fn unreadable_container_sources_do_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        // none of the container sizes are rendered, so every open fails
        let cfg = Config { sizes: vec![20, 40], ..test_config(dir.path()) };
        let report = run(&cfg).unwrap();
        assert_eq!(report.container, ContainerOutcome::Skipped);
        assert!(!cfg.container_path().exists());
        assert!(report.main_icon.exists());
    }

    #[test]
    fn font_description_names_the_chosen_font() {
        let lines = vec!["NeuroInsight".to_string()];
        let font = neuroicon_core::font::select_wordmark_font(16, &lines, &[]);
        assert_eq!(describe_font(16, &font), "icon-16: wordmark in built-in bitmap font at 1px (base size)");

        let fitted = WordmarkFont {
            source: FontSource::Found(PathBuf::from("/fonts/a.ttf")),
            fitted: true,
            px: 60.0,
            ..font
        };
        assert_eq!(describe_font(512, &fitted), "icon-512: wordmark in /fonts/a.ttf at 60px (fitted)");
    }

    #[test]
    fn render_failure_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config { sizes: vec![16, 0], ..test_config(dir.path()) };
        assert!(run(&cfg).is_err());
        assert!(!cfg.main_icon_path().exists());
    }
}
