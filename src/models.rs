use std::path::PathBuf;

use neuroicon_core::{IconStyle, LayoutVariant};

/// Sizes written to `icons/icon-<size>.png`.
pub const DEFAULT_SIZES: [u32; 8] = [16, 32, 48, 64, 128, 256, 512, 1024];
/// Sizes bundled into `icon.ico`.
pub const DEFAULT_CONTAINER_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];
pub const DEFAULT_MAIN_SIZE: u32 = 512;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output_dir: PathBuf,     // default "."
    pub icons_dir: String,       // default "icons", relative to output_dir
    pub sizes: Vec<u32>,
    pub main_size: u32,          // written to output_dir/icon.png
    pub container_sizes: Vec<u32>,
    pub variant: LayoutVariant,
    pub font_paths: Vec<PathBuf>, // probed in order
    pub write_log_file: bool,    // default true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            icons_dir: "icons".to_string(),
            sizes: DEFAULT_SIZES.to_vec(),
            main_size: DEFAULT_MAIN_SIZE,
            container_sizes: DEFAULT_CONTAINER_SIZES.to_vec(),
            variant: LayoutVariant::default(),
            font_paths: IconStyle::default().font_paths,
            write_log_file: true,
        }
    }
}

impl Config {
    pub fn icons_path(&self) -> PathBuf {
        self.output_dir.join(&self.icons_dir)
    }

    pub fn size_path(&self, size: u32) -> PathBuf {
        self.icons_path().join(format!("icon-{}.png", size))
    }

    pub fn main_icon_path(&self) -> PathBuf {
        self.output_dir.join("icon.png")
    }

    pub fn container_path(&self) -> PathBuf {
        self.output_dir.join("icon.ico")
    }

    pub fn style(&self) -> IconStyle {
        IconStyle::default()
            .with_variant(self.variant)
            .with_font_paths(self.font_paths.clone())
    }
}
