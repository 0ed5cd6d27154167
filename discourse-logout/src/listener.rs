//! Logout listener.
//!
//! On every [`LogoutEvent`] the listener walks the configured Discourse
//! tenants in order, resolves the user's forum account by external id and
//! asks the forum to end all of that account's sessions. Tenants are
//! independent: whatever happens on one is logged and the next one is
//! processed anyway.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::{
    api::{parse_lookup, UserApi},
    client::ForumClient,
    config::{ConfigRepository, DiscourseSettings},
    logger::EventLogger,
    models::{ExternalUserId, LogoutEvent, RemoteUserId, Tenant},
};

/// Something that reacts to application events of type `E`.
#[async_trait]
pub trait Listener<E: Send + Sync>: Send + Sync {
    /// Handle one event. Failures are reported, never returned.
    async fn handle(&self, event: &E);
}

/// How processing ended for a single tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TenantOutcome {
    /// The forum confirmed the logout.
    LoggedOut { remote_id: RemoteUserId },
    /// The lookup answered with a status other than 200.
    LookupFailed { status: u16 },
    /// The lookup answered 200 but without a usable `user.id`.
    UnreadableBody,
    /// The logout answered with a status other than 200.
    LogoutFailed { remote_id: RemoteUserId, status: u16 },
    /// No response was received.
    Unreachable,
}

impl TenantOutcome {
    pub fn is_logged_out(&self) -> bool {
        matches!(self, TenantOutcome::LoggedOut { .. })
    }
}

/// Outcome for one processed tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantReport {
    /// Position of the tenant in the configured url list.
    pub index: usize,
    pub base_url: String,
    pub outcome: TenantOutcome,
}

/// Per-tenant results of one invocation, in processing order.
///
/// Misaligned tenants are never processed and do not appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogoutReport {
    pub tenants: Vec<TenantReport>,
}

impl LogoutReport {
    /// Check if no tenant was processed.
    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    /// Number of tenants that confirmed the logout.
    pub fn logged_out(&self) -> usize {
        self.tenants
            .iter()
            .filter(|t| t.outcome.is_logged_out())
            .count()
    }

    /// Tenants that did not confirm the logout.
    pub fn failures(&self) -> impl Iterator<Item = &TenantReport> {
        self.tenants.iter().filter(|t| !t.outcome.is_logged_out())
    }
}

/// Logs the user behind a [`LogoutEvent`] out of every configured forum.
#[derive(Clone)]
pub struct LogoutDiscourseUser {
    client: Arc<dyn ForumClient>,
    config: Arc<dyn ConfigRepository>,
    logger: Arc<dyn EventLogger>,
}

impl LogoutDiscourseUser {
    /// Create the listener from its collaborators.
    pub fn new(
        client: Arc<dyn ForumClient>,
        config: Arc<dyn ConfigRepository>,
        logger: Arc<dyn EventLogger>,
    ) -> Self {
        Self {
            client,
            config,
            logger,
        }
    }

    /// Process an event and return what happened on each tenant.
    ///
    /// Configuration is read again on every call.
    pub async fn run(&self, event: &LogoutEvent) -> LogoutReport {
        let mut report = LogoutReport::default();

        let Some(user) = &event.user else {
            return report;
        };

        let settings = DiscourseSettings::from_repository(self.config.as_ref());

        for (index, tenant) in settings.indexed_tenants() {
            let Some(tenant) = tenant else {
                log::debug!("Skipping Discourse tenant #{}: incomplete configuration", index);
                continue;
            };

            let outcome = self.logout_tenant(&tenant, &user.id).await;
            log::debug!("Discourse tenant {}: {:?}", tenant.base_url, outcome);

            report.tenants.push(TenantReport {
                index,
                base_url: tenant.base_url,
                outcome,
            });
        }

        report
    }

    async fn logout_tenant(&self, tenant: &Tenant, user_id: &ExternalUserId) -> TenantOutcome {
        let api = UserApi::new(self.client.as_ref(), tenant);

        let response = match api.by_external(user_id).await {
            Ok(response) => response,
            Err(e) => {
                self.logger.error(
                    &format!("When getting user {} Discourse could not be reached", user_id),
                    &e.to_string(),
                );
                return TenantOutcome::Unreachable;
            }
        };

        if !response.is_ok() {
            self.logger.error(
                &format!(
                    "When getting user {} Discourse returned status code {}",
                    user_id, response.status
                ),
                &response.reason,
            );
            return TenantOutcome::LookupFailed {
                status: response.status,
            };
        }

        let remote = match parse_lookup(&response.body) {
            Ok(remote) => remote,
            Err(e) => {
                self.logger.error(
                    &format!("When getting user {} Discourse returned an unreadable body", user_id),
                    &e.to_string(),
                );
                return TenantOutcome::UnreadableBody;
            }
        };

        let response = match api.log_out(&remote.id).await {
            Ok(response) => response,
            Err(e) => {
                self.logger.notice(
                    &format!("When logging out user {} Discourse could not be reached", user_id),
                    &e.to_string(),
                );
                return TenantOutcome::Unreachable;
            }
        };

        if !response.is_ok() {
            self.logger.notice(
                &format!(
                    "When logging out user {} Discourse returned status code {}:",
                    user_id, response.status
                ),
                &response.reason,
            );
            return TenantOutcome::LogoutFailed {
                remote_id: remote.id,
                status: response.status,
            };
        }

        TenantOutcome::LoggedOut {
            remote_id: remote.id,
        }
    }
}

#[async_trait]
impl Listener<LogoutEvent> for LogoutDiscourseUser {
    async fn handle(&self, event: &LogoutEvent) {
        let report = self.run(event).await;
        if !report.is_empty() {
            log::debug!(
                "Discourse logout done: {}/{} tenants",
                report.logged_out(),
                report.tenants.len()
            );
        }
    }
}

impl std::fmt::Debug for LogoutDiscourseUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogoutDiscourseUser").finish_non_exhaustive()
    }
}
