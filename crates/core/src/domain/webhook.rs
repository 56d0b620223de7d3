// Webhook Spec Domain Model

use crate::domain::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Webhook spec ID (database serial)
pub type WebhookSpecId = i32;

/// One external initiator subscribed to a webhook job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalInitiatorRef {
    pub name: String,

    /// Initiator-specific job spec, forwarded as-is
    #[serde(default)]
    pub spec: serde_json::Value,
}

impl ExternalInitiatorRef {
    pub fn new(name: impl Into<String>, spec: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }
}

/// Webhook job spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookSpec {
    pub id: WebhookSpecId,

    #[serde(default)]
    pub external_initiators: Vec<ExternalInitiatorRef>,
}

impl WebhookSpec {
    pub fn new(id: WebhookSpecId) -> Self {
        Self {
            id,
            external_initiators: Vec::new(),
        }
    }

    /// Builder-style helper to subscribe an initiator
    pub fn with_initiator(mut self, name: impl Into<String>, spec: serde_json::Value) -> Self {
        self.external_initiators.push(ExternalInitiatorRef::new(name, spec));
        self
    }

    pub fn has_external_initiators(&self) -> bool {
        !self.external_initiators.is_empty()
    }

    /// Check initiator names: non-empty and unique within the spec
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for ei in &self.external_initiators {
            if ei.name.trim().is_empty() {
                return Err(DomainError::ValidationError(
                    "external initiator name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(ei.name.as_str()) {
                return Err(DomainError::DuplicateInitiator(ei.name.clone()));
            }
        }
        Ok(())
    }
}
