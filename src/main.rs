use std::path::Path;

use neuroicon::config::read_config;
use neuroicon::driver::run;
use neuroicon::logger::{self, log_error, log_line};
use neuroicon::models::Config;

fn main() {
    // Optional single argument: a key=value config file.
    let cfg = match std::env::args().nth(1) {
        Some(path) => match read_config(Path::new(&path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Could not read config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    logger::init(cfg.write_log_file);

    if let Err(e) = run(&cfg) {
        log_error("Icon generation failed", &e);
        std::process::exit(1);
    }
    log_line("");
    log_line("✅ All icons generated successfully!");
}
