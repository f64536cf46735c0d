//! Logging setup for the CLI, powered by tracing-subscriber
//!
//! Logs go to stderr so stdout stays clean for the schema document.

use tracing_subscriber::EnvFilter;

/// Default level for a given `-v` count
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter from `RUST_LOG` when set, otherwise from the `-v` count
fn build_env_filter(verbosity: u8) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let level = level_for(verbosity);
    // Keep columnar crates quiet unless explicitly asked for
    let filter_str = format!("{level},arrow=warn,parquet=warn");
    EnvFilter::try_new(&filter_str)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", filter_str, e))
}

/// Initialize the global subscriber
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let filter = build_env_filter(verbosity)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }
}
