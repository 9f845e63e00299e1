//! Store listing generators: configuration, logging setup, and the shared
//! render-and-save loop behind the `generate-icons` and
//! `generate-screenshots` binaries.

pub mod config;
pub mod generate;

pub use config::AssetConfig;
pub use generate::{Generated, ensure_dir, format_kb, generate_artifact};

/// Install `env_logger` with a default filter of `warn`. `RUST_LOG`
/// overrides it.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
