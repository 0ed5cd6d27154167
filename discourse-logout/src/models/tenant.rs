//! Forum tenant model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One configured Discourse instance and the admin credentials used on it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Forum base URL, e.g. `https://forum.example.com`.
    pub base_url: String,
    /// Value of the `Api-Key` header.
    pub api_key: String,
    /// Value of the `Api-Username` header.
    pub api_username: String,
}

impl Tenant {
    /// Create a tenant.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_username: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            api_username: api_username.into(),
        }
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}

impl fmt::Debug for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tenant")
            .field("base_url", &self.base_url)
            .field("api_key", &self.masked_key())
            .field("api_username", &self.api_username)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_key() {
        assert_eq!(Tenant::new("u", "abcdef123456", "n").masked_key(), "********3456");
        assert_eq!(Tenant::new("u", "abc", "n").masked_key(), "***");
    }

    #[test]
    fn test_debug_hides_key() {
        let tenant = Tenant::new("https://forum.example.com", "secret-key-9876", "system");
        let debug = format!("{:?}", tenant);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("9876"));
    }
}
