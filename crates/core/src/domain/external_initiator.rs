// External Initiator Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// External initiator record
///
/// An external system, identified by a unique name, that triggers webhook jobs.
/// Credentials are kept in the record but never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalInitiator {
    pub id: i64,
    pub name: String,
    pub url: Option<String>,

    // Incoming credentials (initiator -> node)
    pub access_key: String,
    #[serde(skip_serializing, default)]
    pub salt: String,
    #[serde(skip_serializing, default)]
    pub hashed_secret: String,

    // Outgoing credentials (node -> initiator)
    #[serde(skip_serializing, default)]
    pub outgoing_secret: String,
    #[serde(skip_serializing, default)]
    pub outgoing_token: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExternalInitiator {
    /// Create an initiator with empty credentials
    ///
    /// # Arguments
    ///
    /// * `id` - Storage ID (injected)
    /// * `name` - Unique initiator name
    /// * `url` - Endpoint notified about job changes; `None` for pull-only initiators
    /// * `now` - Creation timestamp (injected, not system time)
    pub fn new(
        id: i64,
        name: impl Into<String>,
        url: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            url,
            access_key: String::new(),
            salt: String::new(),
            hashed_secret: String::new(),
            outgoing_secret: String::new(),
            outgoing_token: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether job changes are pushed to this initiator
    pub fn accepts_notifications(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.is_empty())
    }
}
