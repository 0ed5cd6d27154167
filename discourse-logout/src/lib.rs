//! Log application users out of their Discourse forums.
//!
//! [`LogoutDiscourseUser`] listens for [`LogoutEvent`]s and, for every forum
//! configured under `services.discourse.*`, resolves the user's forum account
//! by external id and calls the admin logout endpoint.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod listener;
pub mod logger;
pub mod models;

// Re-export main types
pub use client::{ForumClient, ForumResponse, HttpConfig, HttpForumClient, HttpForumClientBuilder};
pub use config::{ConfigRepository, DiscourseSettings, MapConfig};
pub use error::{Error, Result};
pub use listener::{Listener, LogoutDiscourseUser, LogoutReport, TenantOutcome, TenantReport};
pub use logger::{EventLogger, FacadeLogger, LogEntry, MemoryLogger, Severity};

// Re-export commonly used models
pub use models::{EventUser, ExternalUserId, LogoutEvent, RemoteUser, RemoteUserId, Tenant};
