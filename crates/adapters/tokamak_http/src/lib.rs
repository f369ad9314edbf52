//! # tokamak-console-adapter-tokamak-http
//!
//! Driven adapter that fetches resource collections from the Tokamak HTTP
//! API with [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement [`ResourceFetcher`](tokamak_console_app::ports::ResourceFetcher)
//!   for authorities, roles and scopes
//! - Fold every failure (transport, non-2xx status, undecodable body) into a
//!   rejected envelope so the controller only ever sees an envelope
//!
//! ## Dependency rule
//! Depends on `tokamak-console-app` for the port trait and
//! `tokamak-console-domain` for the wire representations.

pub mod client;
pub mod config;
pub mod error;

pub use client::TokamakClient;
pub use config::TokamakConfig;
pub use error::ClientError;
