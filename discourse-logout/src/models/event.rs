//! Logout events.

use serde::{Deserialize, Serialize};

use super::{EventUser, ExternalUserId};

/// Raised by the application when a user logs out.
///
/// `user` is absent for guest sessions; such events are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutEvent {
    pub user: Option<EventUser>,
}

impl LogoutEvent {
    /// Event for an authenticated user.
    pub fn for_user(id: impl Into<ExternalUserId>) -> Self {
        Self {
            user: Some(EventUser::new(id)),
        }
    }

    /// Event without a user.
    pub fn anonymous() -> Self {
        Self::default()
    }
}
