//! Route handlers
//!
//! All HTTP request handlers organized by concern.

pub mod content;
pub mod health;
pub mod media;
pub mod settings;
