//! HTTP inbound adapter exposing the gateway endpoints.

pub mod error;
pub mod health;
pub mod registration;
pub mod routes;
pub mod state;
pub mod verification;

pub use error::ApiResult;
