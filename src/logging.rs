//! Log subscriber setup
//!
//! Everything goes to one writer at INFO, except reqwest's connection
//! trace, which is only emitted at TRACE and only for verbose requests.

use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

/// Target reqwest logs raw connection reads and writes under
pub const VERBOSE_TARGET: &str = "reqwest::connect::verbose";

pub fn log_filter() -> Targets {
    Targets::new()
        .with_default(Level::INFO)
        .with_target(VERBOSE_TARGET, Level::TRACE)
}

/// Installs the global subscriber, bridging `log` records into it.
pub fn init<W>(writer: W) -> anyhow::Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(log_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keeps_info_and_connection_trace() {
        let filter = log_filter();
        assert!(filter.would_enable("httpx::network::client", &Level::INFO));
        assert!(!filter.would_enable("httpx::network::client", &Level::DEBUG));
        assert!(!filter.would_enable("hyper_util::client", &Level::TRACE));
        assert!(filter.would_enable(VERBOSE_TARGET, &Level::TRACE));
        assert!(!filter.would_enable("reqwest::connect", &Level::TRACE));
    }
}
