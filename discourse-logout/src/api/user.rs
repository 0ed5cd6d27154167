//! User API.

use crate::{
    client::{ForumClient, ForumResponse},
    error::{Error, Result},
    models::{ExternalLookup, ExternalUserId, RemoteUser, RemoteUserId, Tenant},
};

/// Path of the external-id lookup.
pub fn by_external_path(id: &ExternalUserId) -> String {
    format!("users/by-external/{}.json", id)
}

/// Path of the admin logout action.
pub fn log_out_path(id: &RemoteUserId) -> String {
    format!("admin/users/{}/log_out", id)
}

/// User endpoints of one Discourse tenant.
pub struct UserApi<'a> {
    client: &'a dyn ForumClient,
    tenant: &'a Tenant,
}

impl<'a> UserApi<'a> {
    pub fn new(client: &'a dyn ForumClient, tenant: &'a Tenant) -> Self {
        Self { client, tenant }
    }

    /// Look up the account linked to an application user.
    pub async fn by_external(&self, id: &ExternalUserId) -> Result<ForumResponse> {
        self.client.get(self.tenant, &by_external_path(id)).await
    }

    /// Terminate every session of a Discourse account.
    pub async fn log_out(&self, id: &RemoteUserId) -> Result<ForumResponse> {
        self.client.post(self.tenant, &log_out_path(id)).await
    }
}

/// Extract the remote account from a lookup body.
pub fn parse_lookup(body: &str) -> Result<RemoteUser> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if value.pointer("/user/id").map_or(true, |v| v.is_null()) {
        return Err(Error::missing("user.id"));
    }
    let lookup: ExternalLookup = serde_json::from_value(value)?;
    Ok(lookup.user)
}
