//! Output formatting.

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use discourse_logout::{Tenant, TenantOutcome, TenantReport};
use serde::Serialize;

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table format
    Table,
    /// JSON format
    Json,
    /// Plain text format
    #[default]
    Plain,
}

/// Trait for plain text output.
pub trait PlainPrint {
    /// Print as plain text with formatting.
    fn plain_print(&self);
}

/// Trait for table row generation.
pub trait TableRow {
    /// Get table headers.
    fn headers() -> Vec<&'static str>;
    /// Get row data as strings.
    fn row(&self) -> Vec<String>;
}

/// Print items in plain text format.
pub fn print_plain<T: PlainPrint>(items: &[T]) {
    if items.is_empty() {
        println!("No results");
        return;
    }
    for item in items {
        item.plain_print();
    }
}

/// Print a table of items with proper formatting for each output mode.
pub fn print_table<T: TableRow + Serialize + PlainPrint>(items: Vec<T>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items).unwrap_or_default());
        }
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results");
                return;
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(T::headers());
            for item in &items {
                table.add_row(item.row());
            }
            println!("{table}");
        }
        OutputFormat::Plain => {
            print_plain(&items);
        }
    }
}

/// Row for a per-tenant logout result.
#[derive(Serialize)]
pub struct OutcomeRow {
    pub index: usize,
    pub forum: String,
    pub ok: bool,
    pub result: String,
}

impl From<&TenantReport> for OutcomeRow {
    fn from(r: &TenantReport) -> Self {
        let result = match &r.outcome {
            TenantOutcome::LoggedOut { remote_id } => format!("logged out (forum user {})", remote_id),
            TenantOutcome::LookupFailed { status } => format!("lookup returned {}", status),
            TenantOutcome::UnreadableBody => "lookup body unreadable".to_string(),
            TenantOutcome::LogoutFailed { remote_id, status } => {
                format!("logout of forum user {} returned {}", remote_id, status)
            }
            TenantOutcome::Unreachable => "unreachable".to_string(),
        };

        Self {
            index: r.index,
            forum: r.base_url.clone(),
            ok: r.outcome.is_logged_out(),
            result,
        }
    }
}

impl TableRow for OutcomeRow {
    fn headers() -> Vec<&'static str> {
        vec!["#", "Forum", "Result"]
    }
    fn row(&self) -> Vec<String> {
        vec![self.index.to_string(), self.forum.clone(), self.result.clone()]
    }
}

impl PlainPrint for OutcomeRow {
    fn plain_print(&self) {
        let result = if self.ok {
            self.result.green()
        } else {
            self.result.red()
        };
        println!("[{}] {} {}", self.index.to_string().cyan(), self.forum.bold(), result);
    }
}

/// Row for configured tenant display.
#[derive(Serialize)]
pub struct TenantRow {
    pub index: usize,
    pub url: String,
    pub api_key: String,
    pub api_username: String,
    pub active: bool,
}

impl TenantRow {
    /// Row for a url index, `tenant` is `None` when the index is dropped.
    pub fn new(index: usize, url: &str, tenant: Option<&Tenant>) -> Self {
        match tenant {
            Some(t) => Self {
                index,
                url: t.base_url.clone(),
                api_key: t.masked_key(),
                api_username: t.api_username.clone(),
                active: true,
            },
            None => Self {
                index,
                url: url.to_string(),
                api_key: "-".to_string(),
                api_username: "-".to_string(),
                active: false,
            },
        }
    }

    fn status(&self) -> &'static str {
        if self.active {
            "active"
        } else {
            "skipped (incomplete)"
        }
    }
}

impl TableRow for TenantRow {
    fn headers() -> Vec<&'static str> {
        vec!["#", "URL", "API Key", "API User", "Status"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.index.to_string(),
            self.url.clone(),
            self.api_key.clone(),
            self.api_username.clone(),
            self.status().to_string(),
        ]
    }
}

impl PlainPrint for TenantRow {
    fn plain_print(&self) {
        let status = if self.active {
            self.status().green()
        } else {
            self.status().yellow()
        };
        println!("[{}] {} {}", self.index.to_string().cyan(), self.url.bold(), status);
        if self.active {
            println!("   {}", format!("{} / {}", self.api_username, self.api_key).dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discourse_logout::RemoteUserId;

    #[test]
    fn test_outcome_row() {
        let report = TenantReport {
            index: 1,
            base_url: "https://b.example".into(),
            outcome: TenantOutcome::LogoutFailed {
                remote_id: RemoteUserId::from(42i64),
                status: 500,
            },
        };

        let row = OutcomeRow::from(&report);
        assert!(!row.ok);
        assert_eq!(row.row(), vec!["1", "https://b.example", "logout of forum user 42 returned 500"]);
    }

    #[test]
    fn test_tenant_row_masks_key() {
        let tenant = Tenant::new("https://a.example", "abcdefgh", "system");
        let row = TenantRow::new(0, "https://a.example", Some(&tenant));
        assert_eq!(row.api_key, "****efgh");
        assert_eq!(row.row()[4], "active");

        let skipped = TenantRow::new(1, "https://b.example", None);
        assert!(!skipped.active);
        assert_eq!(skipped.row()[4], "skipped (incomplete)");
    }
}
