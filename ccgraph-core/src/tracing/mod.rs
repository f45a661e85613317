//! Subscriber setup and timing instrumentation.

use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this more
/// than once is harmless: later calls leave the first subscriber in place
/// and return `false`.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.effective_log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!config.effective_plain())
        .try_init()
        .is_ok()
}

/// Run `f`, log how long it took under `label`, and return the result with
/// the elapsed time.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    ::tracing::info!(
        operation = label,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "{label} computed in {:.3} seconds",
        elapsed.as_secs_f64()
    );
    (result, elapsed)
}
