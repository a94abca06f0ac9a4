use std::fs;
use std::path::PathBuf;

use neuroicon::icon;

fn main() {
    let mut args = std::env::args().skip(1);
    let size = args.next().and_then(|s| s.parse::<u32>().ok()).unwrap_or(1024);
    let out = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("assets/icon-{}.png", size)));
    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).expect("create output dir");
    }
    icon::render(size, &out).unwrap_or_else(|e| panic!("failed to render {}: {}", out.display(), e));
    println!("Wrote {}", out.display());
}
