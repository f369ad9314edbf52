//! Typed identifier newtypes with a resource prefix (`ath_`, `rol_`, `scp_`).
//!
//! Fresh identifiers are the prefix followed by the simple (hyphen-less) form
//! of a random UUID. Parsing accepts any non-empty body after the prefix, since
//! identifiers are assigned by the backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IdError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $prefix:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl Default for $name {
            fn default() -> Self {
                Self(format!("{}{}", Self::PREFIX, uuid::Uuid::new_v4().simple()))
            }
        }

        impl $name {
            /// Prefix every identifier of this kind starts with.
            pub const PREFIX: &'static str = $prefix;

            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Borrow the full identifier, prefix included.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.strip_prefix(Self::PREFIX) {
                    None => Err(IdError::Prefix {
                        expected: Self::PREFIX,
                        value: s.to_string(),
                    }),
                    Some("") => Err(IdError::EmptyBody {
                        value: s.to_string(),
                    }),
                    Some(_) => Ok(Self(s.to_string())),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_id!(
    /// Unique identifier for an [`Authority`](crate::authority::Authority).
    AuthorityId,
    "ath_"
);

define_id!(
    /// Unique identifier for a [`Role`](crate::role::Role).
    RoleId,
    "rol_"
);

define_id!(
    /// Unique identifier for a [`Scope`](crate::scope::Scope).
    ScopeId,
    "scp_"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let a = AuthorityId::new();
        let b = AuthorityId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn should_start_with_resource_prefix_when_generated() {
        assert!(AuthorityId::new().as_str().starts_with("ath_"));
        assert!(RoleId::new().as_str().starts_with("rol_"));
        assert!(ScopeId::new().as_str().starts_with("scp_"));
    }

    #[test]
    fn should_generate_prefix_followed_by_32_hex_chars() {
        let id = ScopeId::new();
        let body = id.as_str().strip_prefix("scp_").unwrap();
        assert_eq!(body.len(), 32);
        assert!(body.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn should_accept_backend_assigned_body_of_any_shape() {
        let id: AuthorityId = "ath_4f1d".parse().unwrap();
        assert_eq!(id.as_str(), "ath_4f1d");
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = RoleId::new();
        let parsed: RoleId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_reject_id_with_foreign_prefix() {
        let result = AuthorityId::from_str("rol_123");
        assert!(matches!(
            result,
            Err(IdError::Prefix {
                expected: "ath_",
                ..
            })
        ));
    }

    #[test]
    fn should_reject_id_with_empty_body() {
        let result = ScopeId::from_str("scp_");
        assert!(matches!(result, Err(IdError::EmptyBody { .. })));
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id: ScopeId = "scp_abc".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"scp_abc\"");
    }

    #[test]
    fn should_fail_to_deserialize_id_with_wrong_prefix() {
        let result: Result<RoleId, _> = serde_json::from_str("\"ath_123\"");
        assert!(result.is_err());
    }
}
