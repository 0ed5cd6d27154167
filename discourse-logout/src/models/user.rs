//! User models.

use serde::{Deserialize, Serialize};

use super::{ExternalUserId, RemoteUserId};

/// The application user carried by a logout event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUser {
    /// Application-side user ID.
    pub id: ExternalUserId,
}

impl EventUser {
    /// Create an event user with the given ID.
    pub fn new(id: impl Into<ExternalUserId>) -> Self {
        Self { id: id.into() }
    }
}

/// A Discourse account resolved through the external-id lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    /// Discourse-internal user ID.
    pub id: RemoteUserId,
}

/// Body of `GET users/by-external/{id}.json`.
///
/// Discourse returns the full user card; only `user.id` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalLookup {
    pub user: RemoteUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_extra_fields() {
        let body = r#"{"user":{"id":42,"username":"alice","external_id":"7"},"user_badges":[]}"#;
        let lookup: ExternalLookup = serde_json::from_str(body).unwrap();
        assert_eq!(lookup.user.id, RemoteUserId::from(42i64));
    }
}
