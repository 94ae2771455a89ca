//! Log output for unit tests that drive `cmd_match` and the index.

use tracing_subscriber::EnvFilter;

/// Route `tracing` events to the test harness so a failing test shows the
/// index load and skip events next to its assertion. `RUST_LOG` overrides the
/// default `soundex_core=debug,xperm=debug`. Later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("soundex_core=debug,xperm=debug")),
        )
        .with_test_writer()
        .try_init();
}
