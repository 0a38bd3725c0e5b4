use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the demo binaries.
///
/// Safe to call multiple times; the first call that resolves a filter installs
/// the subscriber. With no explicit `filter`, a filter only exists when
/// `RUST_LOG` is set, e.g. `RUST_LOG=design_patterns=debug`.
pub fn init_tracing(filter: Option<&str>) {
    let Some(filter) = resolve_filter(filter) else {
        return;
    };

    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*};

        // try_init: a test harness may already own the global subscriber
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
    });
}

pub fn tracing_installed() -> bool {
    TRACING_INIT.is_completed()
}

fn resolve_filter(filter: Option<&str>) -> Option<EnvFilter> {
    match filter {
        Some(directives) => Some(EnvFilter::new(directives)),
        None if std::env::var("RUST_LOG").is_ok() => Some(EnvFilter::from_default_env()),
        None => None,
    }
}
