//! Logout command.

use anyhow::{bail, Result};
use discourse_logout::LogoutEvent;

use crate::config::{build_listener, Config};
use crate::output::{print_table, OutcomeRow, OutputFormat};

/// Log one application user out of every configured forum.
///
/// Fails when at least one tenant did not confirm the logout, so scripts
/// can detect partial success.
pub async fn handle(user_id: &str, config: Config, format: OutputFormat) -> Result<()> {
    let listener = build_listener(config)?;
    let report = listener.run(&LogoutEvent::for_user(user_id)).await;

    if report.is_empty() {
        tracing::warn!("No Discourse tenant is fully configured");
    }

    let failed = report.failures().count();
    let total = report.tenants.len();

    let rows: Vec<OutcomeRow> = report.tenants.iter().map(OutcomeRow::from).collect();
    print_table(rows, format);

    if failed > 0 {
        bail!("{} of {} Discourse tenants did not log out user {}", failed, total, user_id);
    }
    Ok(())
}
