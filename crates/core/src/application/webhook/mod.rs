// Webhook Job Service - Keeps external initiators in sync with webhook jobs

pub mod lifecycle;


use crate::config::ExternalInitiatorConfig;
use crate::domain::{ExternalInitiator, WebhookSpec};
use crate::error::Result;
use crate::port::ExternalInitiatorManager;
use std::sync::Arc;

/// Webhook Job Service
pub struct WebhookJobService {
    manager: Arc<dyn ExternalInitiatorManager>,
    config: ExternalInitiatorConfig,
}

impl WebhookJobService {
    pub fn new(
        manager: Arc<dyn ExternalInitiatorManager>,
        config: ExternalInitiatorConfig,
    ) -> Self {
        Self { manager, config }
    }

    /// Check a spec and resolve its initiators (spec order)
    pub async fn validate(&self, spec: &WebhookSpec) -> Result<Vec<ExternalInitiator>> {
        lifecycle::validate(self.manager.as_ref(), &self.config, spec).await
    }

    /// Validate a new webhook job and notify its initiators
    pub async fn register(&self, spec: &WebhookSpec) -> Result<Vec<ExternalInitiator>> {
        lifecycle::register(self.manager.as_ref(), &self.config, spec).await
    }

    /// Ask the initiators of a removed webhook job to drop it
    pub async fn unregister(&self, spec: &WebhookSpec) -> Result<()> {
        lifecycle::unregister(self.manager.as_ref(), spec).await
    }
}
