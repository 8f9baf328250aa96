//! Logging setup: full-detail file log plus a quieter console mirror.
//!
//! The file layer always records at DEBUG so a finished session can be
//! audited afterwards. The console layer stays at WARN unless --verbose
//! is given. RUST_LOG overrides the global filter when set.
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

pub fn init(log_path: &Path, verbose: bool) -> Result<(), String> {
    let file = File::create(log_path)
        .map_err(|e| format!("Failed to create log file {}: {e}", log_path.display()))?;

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bellrank_cli=debug,bellrank_core=debug".into()),
        )
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(console_level))
        .init();

    Ok(())
}
