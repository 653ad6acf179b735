//! Identity-verification gateway library.
//!
//! The crate is laid out as ports and adapters: `domain` owns the request
//! types, error taxonomy, ports and orchestrators; `inbound::http` exposes
//! them over Actix; `outbound` talks to the face-analysis service, the asset
//! store and PostgreSQL.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
