//! Writes the app icon, feature graphic, and promo graphic.

use promo_cli::{AssetConfig, ensure_dir, generate_artifact, init_logging};
use promo_core::artifacts::icon_set;
use std::process::ExitCode;

fn run(config: &AssetConfig) -> promo_render::Result<()> {
    println!("Generating store listing assets...");
    ensure_dir(&config.output_dir)?;
    let fonts = config.font_book();

    for artifact in icon_set() {
        println!("{}...", artifact.description);
        let out = generate_artifact(&artifact, &config.output_dir, &fonts)?;
        println!("   saved {}", out.file_name());
    }

    println!();
    println!("All assets generated.");
    println!("Output: {}", config.output_dir.display());
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
