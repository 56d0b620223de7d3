// External Initiator Configuration

use crate::error::{AppError, Result};
use crate::port::{ExternalInitiatorManager, NullExternalInitiatorManager};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Environment variable toggling the external initiator feature
pub const ENV_FEATURE_EXTERNAL_INITIATORS: &str = "INITIATOR_FEATURE_EXTERNAL_INITIATORS";

/// External initiator feature configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalInitiatorConfig {
    /// Off by default: webhook specs referencing initiators are rejected
    #[serde(default)]
    pub enabled: bool,
}

impl ExternalInitiatorConfig {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Load from process environment
    ///
    /// # Environment Variables
    ///
    /// - `INITIATOR_FEATURE_EXTERNAL_INITIATORS`: `true`/`false`/`1`/`0` (default: false)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable source (tests inject a map here)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let enabled = match lookup(ENV_FEATURE_EXTERNAL_INITIATORS) {
            Some(raw) => parse_flag(ENV_FEATURE_EXTERNAL_INITIATORS, &raw)?,
            None => false,
        };
        Ok(Self { enabled })
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be true/false/1/0, got '{}'",
            key, other
        ))),
    }
}

/// Pick the manager matching the feature flag
///
/// Returns `live` when enabled, a NullExternalInitiatorManager otherwise.
pub fn select_manager(
    config: &ExternalInitiatorConfig,
    live: Arc<dyn ExternalInitiatorManager>,
) -> Arc<dyn ExternalInitiatorManager> {
    if config.enabled {
        live
    } else {
        info!("External initiators disabled, using null manager");
        Arc::new(NullExternalInitiatorManager)
    }
}
