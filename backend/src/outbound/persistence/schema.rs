//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Registered users and the URL of their reference face image.
    users (id) {
        /// Serial primary key.
        id -> Int4,
        /// Login identity; unique across the table.
        email -> Varchar,
        first_name -> Varchar,
        last_name -> Varchar,
        /// Public URL returned by the asset store at registration.
        regimage_url -> Varchar,
    }
}
