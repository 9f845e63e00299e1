//! Writes the five 1080×1920 phone screenshots into `screenshots/`.

use promo_cli::{AssetConfig, Generated, ensure_dir, format_kb, generate_artifact, init_logging};
use promo_core::artifacts::screenshot_set;
use promo_core::artifacts::screens::{SCREEN_HEIGHT, SCREEN_WIDTH};
use std::process::ExitCode;

fn run(config: &AssetConfig) -> promo_render::Result<()> {
    println!("Generating store screenshots...");
    println!("   resolution: {SCREEN_WIDTH}x{SCREEN_HEIGHT}px");
    println!();

    let dir = config.screenshots_dir();
    ensure_dir(&dir)?;
    let fonts = config.font_book();

    let mut written: Vec<(Generated, &'static str)> = Vec::new();
    for artifact in screenshot_set() {
        println!("{}", artifact.description);
        let out = generate_artifact(&artifact, &dir, &fonts)?;
        println!("   saved {}", out.file_name());
        written.push((out, artifact.description));
    }

    println!();
    println!("All screenshots generated.");
    println!("Output: {}/", dir.display());
    println!();
    println!("Files:");
    for (out, description) in &written {
        println!("  - {} ({}) - {description}", out.file_name(), format_kb(out.bytes));
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let config = AssetConfig::from_env();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
