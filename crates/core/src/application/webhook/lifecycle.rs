// Webhook Lifecycle Use Cases

use crate::config::ExternalInitiatorConfig;
use crate::domain::{ExternalInitiator, WebhookSpec};
use crate::error::{AppError, Result};
use crate::port::ExternalInitiatorManager;
use tracing::{debug, info, warn};

/// Validate a webhook spec against the known initiators
///
/// # Errors
/// - AppError::Domain on blank or duplicate initiator names
/// - AppError::Validation if the spec uses initiators while the feature is disabled
/// - AppError::NotFound if a referenced initiator cannot be resolved
pub async fn validate(
    manager: &dyn ExternalInitiatorManager,
    config: &ExternalInitiatorConfig,
    spec: &WebhookSpec,
) -> Result<Vec<ExternalInitiator>> {
    spec.validate()?;

    if spec.has_external_initiators() && !config.enabled {
        return Err(AppError::Validation("external initiators are disabled".to_string()));
    }

    let mut resolved = Vec::with_capacity(spec.external_initiators.len());
    for ei_ref in &spec.external_initiators {
        match manager.find_external_initiator_by_name(&ei_ref.name).await {
            Ok(ei) => resolved.push(ei),
            Err(e) => {
                warn!(
                    webhook_spec_id = spec.id,
                    external_initiator = %ei_ref.name,
                    error = %e,
                    "External initiator lookup failed"
                );
                return Err(AppError::NotFound(format!(
                    "external initiator '{}'",
                    ei_ref.name
                )));
            }
        }
    }

    Ok(resolved)
}

/// Validate, then notify initiators that the job exists
///
/// Nothing is sent unless at least one resolved initiator has a push URL.
pub async fn register(
    manager: &dyn ExternalInitiatorManager,
    config: &ExternalInitiatorConfig,
    spec: &WebhookSpec,
) -> Result<Vec<ExternalInitiator>> {
    let initiators = validate(manager, config, spec).await?;

    let push_targets = initiators
        .iter()
        .filter(|ei| ei.accepts_notifications())
        .count();
    if push_targets == 0 {
        debug!(
            webhook_spec_id = spec.id,
            initiators = initiators.len(),
            "No initiator accepts notifications, skipping notify"
        );
        return Ok(initiators);
    }

    manager.notify(spec.id).await?;

    info!(
        webhook_spec_id = spec.id,
        initiators = push_targets,
        "Notified external initiators"
    );

    Ok(initiators)
}

/// Tell initiators that the job was deleted
pub async fn unregister(manager: &dyn ExternalInitiatorManager, spec: &WebhookSpec) -> Result<()> {
    if !spec.has_external_initiators() {
        return Ok(());
    }

    manager.delete_job(spec.id).await?;

    info!(
        webhook_spec_id = spec.id,
        "Removed webhook job from external initiators"
    );

    Ok(())
}
