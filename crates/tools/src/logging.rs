//! Structured logging for the CLI.
//!
//! Log level comes from `RUST_LOG` (which may be set in `.env`), falling
//! back to [`DEFAULT_FILTER`]. Output goes to stderr so exported
//! configuration on stdout stays clean.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "deploy_tools=info,deploy_config=info";

/// Install the global tracing subscriber.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
