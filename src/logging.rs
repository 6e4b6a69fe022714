//! Logging configuration for MedAssist

use std::path::Path;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{
    self,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::Result;

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "medassist.log";

/// Initialize logging with configuration
///
/// `RUST_LOG` takes precedence over `logging.level` when it is set.
pub fn init_logging_with_config(config: &crate::config::AppConfig) -> Result<()> {
    let (env_filter, level) =
        filter_from(&config.logging.level, |key| std::env::var(key).ok());
    install(env_filter, &level)
}

/// Initialize logging with custom log level
pub fn init_logging_with_level(level: &str) -> Result<()> {
    install(filter_for_level(level), level)
}

/// Initialize simple logging for testing
pub fn init_simple_logging() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::INFO)
        .try_init();

    tracing::info!("Simple logging initialized");
    Ok(())
}

fn filter_for_level(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{level},medassist={level}"))
}

/// Pick the filter from `RUST_LOG` when it parses, otherwise from the configured level
fn filter_from<F>(level: &str, lookup: F) -> (EnvFilter, String)
where
    F: Fn(&str) -> Option<String>,
{
    let directives = lookup(EnvFilter::DEFAULT_ENV).filter(|value| !value.trim().is_empty());
    if let Some(directives) = directives {
        match EnvFilter::try_new(&directives) {
            Ok(filter) => return (filter, directives),
            Err(e) => eprintln!("Ignoring invalid {}: {e}", EnvFilter::DEFAULT_ENV),
        }
    }
    (filter_for_level(level), level.to_string())
}

fn install(env_filter: EnvFilter, level: &str) -> Result<()> {
    let logs_dir = Path::new(LOG_DIR);
    if !logs_dir.exists() {
        std::fs::create_dir_all(logs_dir)?;
    }

    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking)
        .with_ansi(false); // No colors in file

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| crate::MedAssistError::Custom(format!("Failed to install logger: {e}")))?;

    tracing::info!("Logging initialized with level: {level} - console and file output enabled");
    tracing::info!("Log files will be saved to: {LOG_DIR}/{LOG_FILE_PREFIX}.YYYY-MM-DD");

    // The writer thread must outlive main
    std::mem::forget(guard);

    Ok(())
}
