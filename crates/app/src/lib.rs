//! # tokamak-console-app
//!
//! Application layer: the list-view load controller and **port definitions**
//! (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement:
//!   - `ResourceFetcher`: fetch one collection, always settling into a
//!     result envelope (driven/outbound)
//!   - `ListRenderer`: turn a render directive into a view
//! - Provide the **load controller**: a per-mount state machine
//!   `NotStarted → Loading → Loaded | Failed` that derives a single render
//!   directive from its state
//! - Describe the three **list views** (authorities, roles, scopes) and their
//!   empty-state policies
//! - Mount controllers through `ConsoleService`
//!
//! ## Dependency rule
//! Depends on `tokamak-console-domain` only (plus `tokio` for tasks and
//! channels). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod controller;
pub mod ports;
pub mod services;
pub mod views;
