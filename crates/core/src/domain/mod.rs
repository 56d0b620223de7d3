// Domain Layer - Pure records and validation rules

pub mod error;
pub mod external_initiator;
pub mod webhook;

// Re-exports
pub use error::DomainError;
pub use external_initiator::ExternalInitiator;
pub use webhook::{ExternalInitiatorRef, WebhookSpec, WebhookSpecId};
