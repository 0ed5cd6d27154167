//! Discourse tenant settings.

use serde::{Deserialize, Serialize};

use super::ConfigRepository;
use crate::models::Tenant;

/// Configuration keys read by the logout listener.
pub mod keys {
    /// Comma-separated forum base URLs.
    pub const URL: &str = "services.discourse.url";
    /// Comma-separated admin API keys, aligned with [`URL`].
    pub const API_KEY: &str = "services.discourse.api.key";
    /// Comma-separated admin API usernames, aligned with [`URL`].
    pub const API_USER: &str = "services.discourse.api.user";
}

/// The three comma-separated lists describing every configured forum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscourseSettings {
    pub urls: Vec<String>,
    pub api_keys: Vec<String>,
    pub api_usernames: Vec<String>,
}

impl DiscourseSettings {
    /// Parse settings from raw comma-separated values.
    pub fn parse(urls: &str, api_keys: &str, api_usernames: &str) -> Self {
        Self {
            urls: split_list(urls),
            api_keys: split_list(api_keys),
            api_usernames: split_list(api_usernames),
        }
    }

    /// Read settings from a repository. Unset keys read as empty strings.
    pub fn from_repository(config: &dyn ConfigRepository) -> Self {
        Self::parse(
            &config.get_or_empty(keys::URL),
            &config.get_or_empty(keys::API_KEY),
            &config.get_or_empty(keys::API_USER),
        )
    }

    /// Tenants at every url index that also has a key and a username.
    ///
    /// Misaligned indices are dropped without error.
    pub fn tenants(&self) -> Vec<Tenant> {
        self.indexed_tenants()
            .into_iter()
            .filter_map(|(_, tenant)| tenant)
            .collect()
    }

    /// Every url index paired with its tenant, `None` where the index is dropped.
    pub fn indexed_tenants(&self) -> Vec<(usize, Option<Tenant>)> {
        self.urls
            .iter()
            .enumerate()
            .map(|(i, url)| {
                let tenant = match (self.api_keys.get(i), self.api_usernames.get(i)) {
                    (Some(key), Some(user)) => {
                        Some(Tenant::new(url.as_str(), key.as_str(), user.as_str()))
                    }
                    _ => None,
                };
                (i, tenant)
            })
            .collect()
    }
}

// An empty value still yields one (empty) entry.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_aligned_lists() {
        let settings = DiscourseSettings::parse("https://a,https://b", "k1,k2", "n1,n2");
        assert_eq!(
            settings.tenants(),
            vec![
                Tenant::new("https://a", "k1", "n1"),
                Tenant::new("https://b", "k2", "n2"),
            ]
        );
    }

    #[test]
    fn test_ragged_lists_drop_trailing_tenant() {
        let settings = DiscourseSettings::parse("https://a,https://b", "k1", "n1,n2");
        assert_eq!(settings.tenants(), vec![Tenant::new("https://a", "k1", "n1")]);
        assert!(settings.indexed_tenants()[1].1.is_none());
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let settings = DiscourseSettings::parse("https://a", "k1,k2,k3", "n1,n2");
        assert_eq!(settings.tenants().len(), 1);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let settings = DiscourseSettings::parse(" https://a , https://b", "k1, k2", "n1 ,n2");
        assert_eq!(settings.tenants()[1], Tenant::new("https://b", "k2", "n2"));
    }

    #[test]
    fn test_unset_keys_yield_one_empty_tenant() {
        let settings = DiscourseSettings::from_repository(&MapConfig::new());
        assert_eq!(settings.urls, vec![""]);
        assert_eq!(settings.tenants(), vec![Tenant::new("", "", "")]);
    }

    #[test]
    fn test_empty_key_list_still_aligns() {
        let settings = DiscourseSettings::parse("https://a", "", "n1");
        assert_eq!(settings.tenants(), vec![Tenant::new("https://a", "", "n1")]);

        let settings = DiscourseSettings::parse("https://a,https://b", " ", "n1,n2");
        assert_eq!(settings.tenants().len(), 1);
    }

    #[test]
    fn test_empty_url_entry_is_kept() {
        let settings = DiscourseSettings::parse("https://a,,https://c", "k1,k2,k3", "n1,n2,n3");
        let urls: Vec<_> = settings.tenants().into_iter().map(|t| t.base_url).collect();
        assert_eq!(urls, vec!["https://a", "", "https://c"]);
    }

    #[test]
    fn test_from_repository() {
        let config = MapConfig::new()
            .with(keys::URL, "https://a")
            .with(keys::API_KEY, "k1")
            .with(keys::API_USER, "system");

        let settings = DiscourseSettings::from_repository(&config);
        assert_eq!(settings.tenants(), vec![Tenant::new("https://a", "k1", "system")]);
    }
}
