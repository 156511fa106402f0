//! Remote sync adapter for the dashboard API
//!
//! Thin request/response mapping between the form controllers' domain
//! objects and the backend's JSON shapes. The [`Api`] trait is the seam the
//! controllers program against; [`HttpApi`] is the reqwest-backed
//! implementation. No retries, no timeouts, no token plumbing — transport
//! policy belongs to the backend collaborator, not this layer.
//!
//! # Core Concepts
//!
//! - [`Api`]: one async method per endpoint, object-safe for mocking
//! - [`ApiError`]: server message preferred over generic fallbacks
//! - [`SessionStore`]: the persisted session slot that gates route access
//! - [`ClientConfig`]: base URL configuration

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod api;
mod config;
mod error;
mod session;
mod types;

pub use api::{Api, HttpApi};
pub use config::ClientConfig;
pub use error::ApiError;
pub use session::{MemorySessionStore, SessionStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
