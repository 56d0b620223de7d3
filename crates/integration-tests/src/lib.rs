// Shared fixtures for integration scenarios

use chrono::{TimeZone, Utc};
use initiator_core::domain::ExternalInitiator;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_TRACING: Once = Once::new();

/// Install a test subscriber once per binary (filter via RUST_LOG)
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Initiator with deterministic timestamps and a push endpoint
pub fn initiator(id: i64, name: &str) -> ExternalInitiator {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    ExternalInitiator::new(id, name, Some(format!("https://{}.example.com/jobs", name)), now)
}
