//! Configuration repository trait definitions.

use std::collections::HashMap;
use std::sync::Arc;

/// Read-only key/value configuration store.
///
/// Keys are dotted paths such as `services.discourse.url`.
pub trait ConfigRepository: Send + Sync {
    /// Get a string value by key.
    fn get(&self, key: &str) -> Option<String>;

    /// Get a value, falling back to an empty string when the key is unset.
    fn get_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default()
    }
}

impl ConfigRepository for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<T: ConfigRepository + ?Sized> ConfigRepository for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_repository() {
        let mut map = HashMap::new();
        map.insert("a.b".to_owned(), "value".to_owned());

        assert_eq!(ConfigRepository::get(&map, "a.b"), Some("value".to_owned()));
        assert_eq!(map.get_or_empty("missing"), "");
    }
}
