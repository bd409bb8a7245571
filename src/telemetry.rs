//! Opt-in tracing setup for hosts embedding the widget.
//!
//! The library itself only emits `tracing` events; it never installs a
//! subscriber on its own. Hosts that do not care about wiring one can call
//! [`init_default_tracing`], everyone else points their existing subscriber
//! at the `dotbar_rs` target.

/// Installs a compact stderr subscriber honoring `RUST_LOG`, falling back
/// to `info` globally with `debug` for this crate's own events.
///
/// Returns `false` when the `telemetry` feature is off or another global
/// subscriber won the race; either way the widget keeps working, its events
/// just go wherever the host routed them.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,dotbar_rs=debug"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
