//! Axum extractors for request handling

mod admin;

pub use admin::{AdminToken, ADMIN_TOKEN_HEADER};
