//! Process-wide tracing/logging bootstrap for the kirana crates.
//!
//! The domain crates only *emit* diagnostics (`warn!` on skipped cart lines,
//! `debug!` on service-area misses); a host calls [`init`] once at startup to
//! actually see them. Nothing here is required for correctness — pricing and
//! serviceability behave identically with no subscriber installed.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// JSON lines to stdout, filtered by `RUST_LOG` (default `info`). Safe to
/// call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with_default_filter("info");
}

/// Initialize with an explicit fallback filter.
///
/// `RUST_LOG` still wins when set; `fallback` applies otherwise. Test
/// harnesses use this to silence the cart-line skip warnings.
pub fn init_with_default_filter(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        init_with_default_filter("warn");
        tracing::info!("subscriber installed");
    }
}
