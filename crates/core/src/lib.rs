// Initiator Core - Domain Logic & Ports
// NO infrastructure dependencies: the live initiator client lives outside this crate

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use config::ExternalInitiatorConfig;
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
