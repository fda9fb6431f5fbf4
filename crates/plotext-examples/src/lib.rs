// File: crates/plotext-examples/src/lib.rs
// Summary: Shared setup for the example binaries: logging and output paths.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

/// Output path for an example image: `arg` when given, otherwise
/// `target/out/<name>`.
pub fn out_path(arg: Option<String>, name: &str) -> PathBuf {
    arg.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out").join(name))
}
