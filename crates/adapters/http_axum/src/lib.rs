//! # tokamak-console-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered list pages** (`/authorities`, `/roles`,
//!   `/scopes`) that work with zero JavaScript
//! - Serve the **render directive** of each view as JSON under
//!   `/api/views/{kind}` for programmatic consumers
//! - Mount a list controller per view and map its directive into HTML
//!   through [`render::HtmlRenderer`] and the askama templates
//!
//! ## No-JS loading state
//! A page waits for its controller to settle for a bounded time. When the
//! fetch is slower than that, the loader is rendered with
//! `<meta http-equiv="refresh">` so the browser retries on its own, and the
//! controller is parked in [`pending::PendingViews`] so the retry picks up the
//! same fetch.
//!
//! ## Dependency rule
//! Depends on `tokamak-console-app` (controller, ports, views) and
//! `tokamak-console-domain` (resource types). Never leaks axum types into
//! either.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod pending;
pub mod render;
pub mod router;
pub mod state;
