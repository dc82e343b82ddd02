//! Test fixtures and data generators
//!
//! Provides reusable request payloads and response envelopes for
//! integration tests.

use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Blog post payload with a unique title
pub fn blog_payload() -> Value {
    let suffix = unique_suffix();
    json!({
        "title": format!("Launch Notes {suffix}"),
        "excerpt": "What shipped this cycle",
        "readTime": "4 min",
        "content": ["First paragraph.", "Second paragraph."],
    })
}

/// Blog post payload saved as a draft
pub fn draft_blog_payload() -> Value {
    let mut payload = blog_payload();
    payload["status"] = json!("draft");
    payload
}

/// Team member payload with a unique name
pub fn team_payload() -> Value {
    let suffix = unique_suffix();
    json!({
        "name": format!("Team Member {suffix}"),
        "role": "Engineer",
        "bio": "Builds things.",
    })
}

/// Review payload with a unique author and explicit sort position
pub fn review_payload(sort_order: i64) -> Value {
    let suffix = unique_suffix();
    json!({
        "name": format!("Client {suffix}"),
        "feedback": "Great to work with.",
        "rating": 5,
        "sortOrder": sort_order,
    })
}

/// Site settings payload
pub fn settings_payload() -> Value {
    let suffix = unique_suffix();
    json!({
        "siteTitle": format!("Studio {suffix}"),
        "tagline": "We make websites",
        "contactEmail": "hello@example.com",
    })
}

/// Envelope returned by create operations
#[derive(Debug, Deserialize)]
pub struct CreatedEnvelope {
    pub message: String,
    pub id: String,
}

/// Envelope returned by failed operations
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
    pub error: String,
}
