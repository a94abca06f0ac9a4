use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::Config;

/// Read a `key=value` run configuration. Keys that are missing, unknown or
/// unparsable keep their defaults.
pub fn read_config(path: &Path) -> Result<Config, io::Error> {
    let content = fs::read_to_string(path)?;
    Ok(parse_config(&content))
}

pub fn parse_config(content: &str) -> Config {
    let mut cfg = Config::default();
    // font_path lines replace the default candidate list as a whole
    let mut font_paths: Vec<PathBuf> = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            let v = v.trim();
            match k.trim() {
                "output_dir" => cfg.output_dir = PathBuf::from(v),
                "icons_dir" => {
                    if !v.is_empty() {
                        cfg.icons_dir = v.to_string();
                    }
                }
                "sizes" => {
                    if let Some(list) = parse_sizes(v) {
                        cfg.sizes = list;
                    }
                }
                "main_size" => cfg.main_size = v.parse::<u32>().ok().filter(|n| *n > 0).unwrap_or(cfg.main_size),
                "container_sizes" => {
                    if let Some(list) = parse_sizes(v) {
                        cfg.container_sizes = list;
                    }
                }
                "variant" => cfg.variant = v.parse().unwrap_or(cfg.variant),
                "font_path" => {
                    if !v.is_empty() {
                        font_paths.push(PathBuf::from(v));
                    }
                }
                "write_log_file" => cfg.write_log_file = parse_bool(v).unwrap_or(cfg.write_log_file),
                _ => {}
            }
        }
    }
    if !font_paths.is_empty() {
        cfg.font_paths = font_paths;
    }
    cfg
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Comma separated positive sizes; `None` if any entry is bad or the list is empty.
fn parse_sizes(v: &str) -> Option<Vec<u32>> {
    let sizes: Vec<u32> = v
        .split(',')
        .map(|s| s.trim().parse::<u32>().ok().filter(|n| *n > 0))
        .collect::<Option<Vec<u32>>>()?;
    if sizes.is_empty() { None } else { Some(sizes) }
}
