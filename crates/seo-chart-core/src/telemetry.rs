// File: crates/seo-chart-core/src/telemetry.rs
// Summary: Opt-in log output for tools built on the chart crates (feature "telemetry").

/// Filter used when `RUST_LOG` is unset: chart crates at `info`, everything else at `warn`.
pub const DEFAULT_DIRECTIVES: &str = "warn,seo_chart_core=info,seo_chart_render=info,seo_chart_demo=info";

/// Install a global fmt subscriber filtered by `RUST_LOG`, falling back to `directives`.
///
/// The chart crates only emit events; hosts that already have a subscriber skip this.
/// Returns `false` when a subscriber was already installed or the feature is off.
#[cfg(feature = "telemetry")]
pub fn init_tracing(directives: &str) -> bool {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "telemetry"))]
pub fn init_tracing(_directives: &str) -> bool {
    false
}

#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_DIRECTIVES)
}
