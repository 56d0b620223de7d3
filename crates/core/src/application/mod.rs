// Application Layer - Use cases over the ports

pub mod webhook;

pub use webhook::WebhookJobService;
