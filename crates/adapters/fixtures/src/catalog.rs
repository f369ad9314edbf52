//! In-memory resource catalog.

use tokamak_console_domain::authority::Authority;
use tokamak_console_domain::id::{AuthorityId, RoleId, ScopeId};
use tokamak_console_domain::role::Role;
use tokamak_console_domain::scope::Scope;
use tokamak_console_domain::time;

/// The collections a [`FixtureFetcher`](crate::FixtureFetcher) serves.
///
/// `None` stands for a representation without the collection field, which
/// the views treat differently from an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub authorities: Option<Vec<Authority>>,
    pub roles: Option<Vec<Role>>,
    pub scopes: Option<Vec<Scope>>,
}

impl Catalog {
    /// A small catalog that makes every view show a table.
    #[must_use]
    pub fn demo() -> Self {
        let now = time::now();
        let authority = |name: &str, description: &str| Authority {
            id: AuthorityId::new(),
            name: name.to_string(),
            description: Some(description.to_string()),
            created: Some(now),
            updated: Some(now),
        };
        let role = |name: &str, description: &str| Role {
            id: RoleId::new(),
            name: name.to_string(),
            description: Some(description.to_string()),
            created: Some(now),
            updated: Some(now),
        };
        let scope = |name: &str, description: &str| Scope {
            id: ScopeId::new(),
            name: name.to_string(),
            description: Some(description.to_string()),
            created: Some(now),
            updated: Some(now),
        };

        Self {
            authorities: Some(vec![
                authority("Default", "Authority used by first-party apps"),
                authority("Partners", "Authority for third-party integrations"),
            ]),
            roles: Some(vec![
                role("Owner", "Full control over the account"),
                role("Developer", "Manage apps and scopes"),
                role("Viewer", "Read-only access"),
            ]),
            scopes: Some(vec![
                scope("profile:read", "Read the user's profile"),
                scope("profile:write", "Update the user's profile"),
                scope("billing:read", "Read invoices and payment methods"),
            ]),
        }
    }

    /// Replace every collection with an empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            authorities: Some(Vec::new()),
            roles: Some(Vec::new()),
            scopes: Some(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_populate_every_collection_in_demo() {
        let catalog = Catalog::demo();

        assert_eq!(catalog.authorities.map(|a| a.len()), Some(2));
        assert_eq!(catalog.roles.map(|r| r.len()), Some(3));
        assert_eq!(catalog.scopes.map(|s| s.len()), Some(3));
    }

    #[test]
    fn should_give_demo_items_valid_names() {
        let catalog = Catalog::demo();

        for authority in catalog.authorities.unwrap_or_default() {
            assert!(authority.validate().is_ok());
            assert!(authority.id.as_str().starts_with("ath_"));
        }
    }

    #[test]
    fn should_distinguish_absent_from_empty() {
        assert_eq!(Catalog::default().roles, None);
        assert_eq!(Catalog::empty().roles, Some(vec![]));
    }
}
