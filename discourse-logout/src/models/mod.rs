//! Data models for logout events and Discourse entities.

mod event;
mod ids;
mod tenant;
mod user;

pub use event::LogoutEvent;
pub use ids::{ExternalUserId, RemoteUserId};
pub use tenant::Tenant;
pub use user::{EventUser, ExternalLookup, RemoteUser};
