//! Type-safe ID wrappers.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                $name(id.into())
            }

            /// Check if this ID is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Get the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(s.to_owned())
            }
        }

        impl From<&String> for $name {
            fn from(s: &String) -> Self {
                $name(s.clone())
            }
        }

        impl From<i64> for $name {
            fn from(n: i64) -> Self {
                $name(n.to_string())
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                $name(n.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        // Discourse sends numeric ids, applications often use strings.
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                #[derive(Deserialize)]
                #[serde(untagged)]
                enum Raw {
                    Int(i64),
                    Str(String),
                }

                Ok(match Raw::deserialize(deserializer)? {
                    Raw::Int(n) => $name::from(n),
                    Raw::Str(s) => $name(s),
                })
            }
        }
    };
}

define_id!(
    ExternalUserId,
    "The application's own identifier for a user, used as Discourse's external id."
);
define_id!(RemoteUserId, "A Discourse-internal user identifier.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ExternalUserId::new("abc-1");
        assert_eq!(id.as_str(), "abc-1");
        assert_eq!(format!("{}", id), "abc-1");
    }

    #[test]
    fn test_id_from_int() {
        let id = RemoteUserId::from(42i64);
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_id_deserialize_number_or_string() {
        let from_num: RemoteUserId = serde_json::from_str("42").unwrap();
        let from_str: RemoteUserId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_num, from_str);

        assert!(serde_json::from_str::<RemoteUserId>("null").is_err());
    }
}
