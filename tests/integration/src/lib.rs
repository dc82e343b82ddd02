//! Integration test utilities for the content server
//!
//! This crate provides helpers for running end-to-end tests against
//! the HTTP API with a real backing store.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
