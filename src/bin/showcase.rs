// Runs the pattern demos listed in an optional TOML config, in order.
//
//   cargo run --bin showcase                  # all six, colored
//   cargo run --bin showcase -- demo.toml     # see config::ShowcaseConfig

use colored::Colorize;
use design_patterns::config::ShowcaseConfig;
use std::path::Path;
use tracing::info;

fn main() -> design_patterns::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => ShowcaseConfig::load(Path::new(&path))?,
        None => ShowcaseConfig::default(),
    };
    config.apply();
    info!(patterns = config.patterns.len(), "starting showcase");

    println!("{}", "Design Patterns Gallery".bold());
    println!("{}\n", "=".repeat(23));

    for pattern in &config.patterns {
        design_patterns::run_pattern(*pattern)?;
    }
    Ok(())
}
