//! Tenants command.

use anyhow::Result;
use discourse_logout::DiscourseSettings;

use crate::config::Config;
use crate::output::{print_table, OutputFormat, TenantRow};

/// List configured tenants, including the ones dropped as incomplete.
pub fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    let settings = DiscourseSettings::from_repository(config);

    let rows: Vec<TenantRow> = settings
        .indexed_tenants()
        .iter()
        .map(|(i, tenant)| TenantRow::new(*i, &settings.urls[*i], tenant.as_ref()))
        .collect();

    print_table(rows, format);
    Ok(())
}
