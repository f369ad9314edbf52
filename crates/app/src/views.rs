//! List view descriptors: the presentational wiring of each resource.

use tokamak_console_domain::resource::ResourceKind;

use crate::controller::EmptyPolicy;

/// In-app anchor explaining what authorities are.
pub const AUTHORITIES_HELP: &str = "/help#authorities";

/// A link to documentation shown under a view's title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Everything a renderer needs to know about one list page besides its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub kind: ResourceKind,
    pub title: &'static str,
    pub overview: Option<&'static str>,
    pub help: Option<HelpLink>,
    /// Label of the header button shown above a populated table.
    pub create_label: &'static str,
    pub empty_title: &'static str,
    /// Label of the button on the empty-state panel.
    pub empty_action: &'static str,
    pub empty_policy: EmptyPolicy,
}

impl ListView {
    /// OAuth2 app authorities. Empty when absent or zero-length.
    #[must_use]
    pub const fn authorities() -> Self {
        Self {
            kind: ResourceKind::Authorities,
            title: "App Authorities",
            overview: Some("View, create and manage OAuth2 app authorities."),
            help: Some(HelpLink {
                href: AUTHORITIES_HELP,
                label: "Learn more about authorities.",
            }),
            create_label: "+ Create Authority",
            empty_title: "You haven't created any authorities yet",
            empty_action: "Create Authority",
            empty_policy: EmptyPolicy::AbsentOrZero,
        }
    }

    /// Account roles. Only a missing `roles` field counts as empty; a loaded
    /// `[]` renders an empty table.
    #[must_use]
    pub const fn roles() -> Self {
        Self {
            kind: ResourceKind::Roles,
            title: "Account Roles",
            overview: None,
            help: None,
            create_label: "+ Create Role",
            empty_title: "You haven't created any roles yet",
            empty_action: "Create Role",
            empty_policy: EmptyPolicy::AbsentOnly,
        }
    }

    /// OAuth2 scopes. Never shows the empty state.
    #[must_use]
    pub const fn scopes() -> Self {
        Self {
            kind: ResourceKind::Scopes,
            title: "Scopes",
            overview: Some("View, create and manage OAuth2 scopes."),
            help: None,
            create_label: "+ Create Scope",
            empty_title: "You haven't created any scopes yet",
            empty_action: "Create Scope",
            empty_policy: EmptyPolicy::Never,
        }
    }

    /// The default descriptor for `kind`.
    #[must_use]
    pub const fn for_kind(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Authorities => Self::authorities(),
            ResourceKind::Roles => Self::roles(),
            ResourceKind::Scopes => Self::scopes(),
        }
    }

    /// Replace the empty-state policy.
    #[must_use]
    pub const fn with_empty_policy(mut self, policy: EmptyPolicy) -> Self {
        self.empty_policy = policy;
        self
    }
}
