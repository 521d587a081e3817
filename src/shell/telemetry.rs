use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

use crate::shared::infrastructure::logger::LogLevel;

/// Install the global `fmt` subscriber. `RUST_LOG` wins over `level` when set.
/// Calling it twice is harmless; the second call leaves the first subscriber in place.
pub fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .from_env_lossy();

    if fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod telemetry_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_tolerate_repeated_initialisation() {
        init_tracing(LogLevel::Debug);
        init_tracing(LogLevel::Error);

        tracing::info!("still alive");
    }
}
