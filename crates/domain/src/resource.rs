//! Resource kinds and the traits shared by every listed resource.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// The three list-backed collections the console shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Authorities,
    Roles,
    Scopes,
}

impl ResourceKind {
    /// Every kind, in navigation order.
    pub const ALL: [Self; 3] = [Self::Authorities, Self::Roles, Self::Scopes];

    /// Name of the collection field inside a list representation
    /// (`{ "authorities": [...] }`). Also used as the URL segment.
    #[must_use]
    pub const fn collection_field(self) -> &'static str {
        match self {
            Self::Authorities => "authorities",
            Self::Roles => "roles",
            Self::Scopes => "scopes",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_field())
    }
}

/// Returned when a string names no known [`ResourceKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource kind: {0}")]
pub struct UnknownResourceKind(pub String);

impl FromStr for ResourceKind {
    type Err = UnknownResourceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.collection_field() == s)
            .ok_or_else(|| UnknownResourceKind(s.to_string()))
    }
}

/// A resource the console can list.
///
/// Implementors name their [`ResourceKind`] and the wire representation of a
/// list of themselves, so generic code (fetchers, controllers, renderers) can
/// work over all three without knowing which one it holds.
pub trait Resource:
    Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Which collection this resource belongs to.
    const KIND: ResourceKind;

    /// Wire representation of a list of this resource.
    type List: ListRepresentation<Self>;

    /// Prefixed identifier as a string.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Optional free-form description.
    fn description(&self) -> Option<&str>;

    /// Last modification time, when the backend reports one.
    fn updated(&self) -> Option<&Timestamp>;
}

/// A `{ "<collection>": [...] }` list body.
///
/// The collection is optional: `null` and a missing field are kept apart from
/// an empty array because some views treat them differently.
pub trait ListRepresentation<R>: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Build the representation from an optional list of items.
    fn from_items(items: Option<Vec<R>>) -> Self;

    /// Take the items out, `None` when the collection field was absent.
    fn into_items(self) -> Option<Vec<R>>;
}

/// Generate a listed resource: the struct, its builder, its
/// `{ "<collection>": [...] }` representation and the [`Resource`] /
/// [`ListRepresentation`] impls.
///
/// Every resource carries the same fields (`id`, `name`, optional
/// `description`, `created`, `updated`); only the identifier type, the kind
/// and the collection field differ.
macro_rules! define_resource {
    (
        $(#[doc = $doc:expr])*
        $name:ident {
            id: $id:ty,
            kind: $kind:ident,
            list: $list:ident { $field:ident },
            builder: $builder:ident $(,)?
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            pub id: $id,
            pub name: String,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub description: Option<String>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub created: Option<$crate::time::Timestamp>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub updated: Option<$crate::time::Timestamp>,
        }

        impl $name {
            #[doc = concat!("Create a builder for constructing a [`", stringify!($name), "`].")]
            #[must_use]
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Check domain invariants.
            ///
            /// # Errors
            ///
            /// Returns [`ConsoleError::Validation`](crate::error::ConsoleError::Validation)
            /// when `name` is empty.
            pub fn validate(&self) -> Result<(), $crate::error::ConsoleError> {
                if self.name.is_empty() {
                    return Err($crate::error::ValidationError::EmptyName.into());
                }
                Ok(())
            }
        }

        impl $crate::resource::Resource for $name {
            const KIND: $crate::resource::ResourceKind = $crate::resource::ResourceKind::$kind;
            type List = $list;

            fn id(&self) -> &str {
                self.id.as_str()
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn description(&self) -> Option<&str> {
                self.description.as_deref()
            }

            fn updated(&self) -> Option<&$crate::time::Timestamp> {
                self.updated.as_ref()
            }
        }

        #[doc = concat!("`{ \"", stringify!($field), "\": [...] }` list body.")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $list {
            #[serde(default)]
            pub $field: Option<Vec<$name>>,
        }

        impl $crate::resource::ListRepresentation<$name> for $list {
            fn from_items($field: Option<Vec<$name>>) -> Self {
                Self { $field }
            }

            fn into_items(self) -> Option<Vec<$name>> {
                self.$field
            }
        }

        #[doc = concat!("Step-by-step builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Default)]
        pub struct $builder {
            id: Option<$id>,
            name: Option<String>,
            description: Option<String>,
            created: Option<$crate::time::Timestamp>,
            updated: Option<$crate::time::Timestamp>,
        }

        impl $builder {
            #[must_use]
            pub fn id(mut self, id: $id) -> Self {
                self.id = Some(id);
                self
            }

            #[must_use]
            pub fn name(mut self, name: impl Into<String>) -> Self {
                self.name = Some(name.into());
                self
            }

            #[must_use]
            pub fn description(mut self, description: impl Into<String>) -> Self {
                self.description = Some(description.into());
                self
            }

            #[must_use]
            pub fn created(mut self, created: $crate::time::Timestamp) -> Self {
                self.created = Some(created);
                self
            }

            #[must_use]
            pub fn updated(mut self, updated: $crate::time::Timestamp) -> Self {
                self.updated = Some(updated);
                self
            }

            #[doc = concat!("Consume the builder, validate, and return a [`", stringify!($name), "`].")]
            ///
            /// # Errors
            ///
            /// Returns [`ConsoleError::Validation`](crate::error::ConsoleError::Validation)
            /// if `name` is missing or empty.
            pub fn build(self) -> Result<$name, $crate::error::ConsoleError> {
                let resource = $name {
                    id: self.id.unwrap_or_default(),
                    name: self.name.unwrap_or_default(),
                    description: self.description,
                    created: self.created,
                    updated: self.updated,
                };
                resource.validate()?;
                Ok(resource)
            }
        }
    };
}

pub(crate) use define_resource;
