//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **recognition**: reqwest client for the face-analysis service
//! - **assets**: reqwest client for the Cloudinary upload API
//! - **persistence**: PostgreSQL-backed user repository using Diesel ORM
//!
//! Adapters translate between wire or row representations and domain types
//! and contain no business logic.

pub mod assets;
mod http_support;
pub mod persistence;
pub mod recognition;
