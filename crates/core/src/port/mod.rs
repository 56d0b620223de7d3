// Port Layer - Interfaces for external dependencies

pub mod external_initiator_manager;

// Re-exports
pub use external_initiator_manager::{ExternalInitiatorManager, NullExternalInitiatorManager};

#[cfg(any(test, feature = "mocks"))]
pub use external_initiator_manager::mocks;
