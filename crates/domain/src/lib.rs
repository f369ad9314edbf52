//! # tokamak-console-domain
//!
//! Pure domain model for the Tokamak administrative console.
//!
//! ## Responsibilities
//! - Foundational types: prefixed identifiers, error conventions, timestamps
//! - Define the listed **resources**: authorities, roles and scopes
//! - Define the **result envelope** (`{ status, instance, errors }`) that every
//!   backend fetch is reduced to, and the [`ErrorInfo`](envelope::ErrorInfo)
//!   shown to users
//! - Define [`ResourceList`](list::ResourceList), which keeps an absent
//!   collection distinct from an empty one
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod authority;
pub mod envelope;
pub mod list;
pub mod resource;
pub mod role;
pub mod scope;
