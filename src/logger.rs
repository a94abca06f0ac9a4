use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use once_cell::sync::OnceCell;

static LOG_FILE: OnceCell<Option<PathBuf>> = OnceCell::new();

fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "NeuroInsight", "NeuroIcon")
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn log_path() -> PathBuf {
    let dir = data_dir();
    let _ = fs::create_dir_all(&dir);
    dir.join("neuroicon.log")
}

/// Enable or disable the log file for this process. Only the first call counts;
/// without a call nothing is written to disk.
pub fn init(write_log_file: bool) {
    let _ = LOG_FILE.set(if write_log_file { Some(log_path()) } else { None });
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn append(line: &str) {
    if let Some(Some(path)) = LOG_FILE.get() {
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = writeln!(f, "[{}] {}", timestamp(), line);
        }
    }
}

/// Progress message: printed and logged.
pub fn log_line(line: &str) {
    println!("{}", line);
    append(line);
}

/// Detail only worth keeping in the log file.
pub fn log_detail(line: &str) {
    append(line);
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    eprintln!("{}: {}", prefix, e);
    append(&format!("ERROR: {}: {}", prefix, e));
}
