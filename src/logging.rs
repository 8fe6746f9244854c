//! Logging setup.
//!
//! Log output goes to stderr so it never interleaves with the menu on stdout.

use crate::config::LogConfig;
use crate::error::{WordTrieError, WordTrieResult};
use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence; otherwise the configured level applies.
pub fn init_logging(config: &LogConfig) -> WordTrieResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(config.source_location)
        .with_file(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| {
        WordTrieError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}
