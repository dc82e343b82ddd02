//! # content-api
//!
//! HTTP API server built with Axum, serving the site's content
//! collections, settings, and media upload passthrough.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
