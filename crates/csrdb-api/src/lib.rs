//! Access-dispatch layer for the CSR data core.
//!
//! [`CsrApi`] emulates a REST-style API surface over the in-memory store so
//! callers can be written against an async contract a real backend would also
//! satisfy. Every call funnels through a single dispatch entry point
//! ([`CsrApi::request`]) that pattern-matches a logical path and verb, awaits
//! the configured latency once, then performs the read-modify-write
//! synchronously and persists the snapshot.
//!
//! # Modules
//!
//! - [`error`]: [`ApiError`] taxonomy
//! - [`route`]: [`Method`] and the path parser
//! - [`latency`]: configurable delay injection hook
//! - [`schema`]: request payloads and presentation views
//! - [`service`]: the [`CsrApi`] service and dispatch
//! - typed wrapper methods (one per logical operation) in `wrappers`

pub mod error;
pub mod latency;
pub mod route;
pub mod schema;
pub mod service;
mod wrappers;

pub use error::ApiError;
pub use latency::Latency;
pub use route::{Method, Resource, Route};
pub use schema::{Ack, ActivityPlanView, LoginRequest, LoginResponse, UserView};
pub use service::CsrApi;
