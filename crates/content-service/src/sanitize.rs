//! Input sanitization for content payloads.
//!
//! Every write body passes through [`sanitize`] before it reaches the
//! store. The sanitizer is driven entirely by the kind's
//! [`KindSchema`](content_core::KindSchema): unknown keys are dropped,
//! known keys are coerced to their declared shape, and the reserved
//! `status`, `slug`, and `id` keys are pulled out separately so the
//! service can apply its own rules to them.
//!
//! Sanitization never fails. Malformed values degrade to a neutral
//! form (empty string, empty list, the field's default number) and the
//! required-field check in the service decides whether the result is
//! acceptable.

use content_core::{ContentKind, FieldKind, FieldSpec};
use serde_json::{Map, Value};

/// The outcome of sanitizing one request body against a kind's schema.
///
/// `fields` contains only keys that were present in the input, so a
/// partial update touches nothing the caller did not send.
#[derive(Debug, Default, Clone)]
pub struct SanitizedInput {
    /// Allow-listed fields, normalized, keyed by their schema name.
    pub fields: Map<String, Value>,
    /// Normalized status, when the kind is gated and the body carried one.
    pub status: Option<String>,
    /// Explicit slug (trimmed, lowercased), when the kind is slugged and
    /// the body carried a non-empty one.
    pub slug: Option<String>,
    /// Raw item identifier, when the body carried one. Updates require it.
    pub id: Option<String>,
}

impl SanitizedInput {
    /// Whether a field survived sanitization with actual content.
    ///
    /// Empty strings and empty lists count as absent, which is what the
    /// required-field check wants: a required field sent as `"   "` is
    /// as missing as one not sent at all.
    pub fn has_content(&self, name: &str) -> bool {
        match self.fields.get(name) {
            Some(Value::String(text)) => !text.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Number(_)) => true,
            _ => false,
        }
    }
}

/// Sanitizes a raw JSON body against the schema of `kind`.
///
/// A body that is not a JSON object yields an empty result rather than
/// an error; the service's required-field validation rejects it from
/// there.
pub fn sanitize(kind: ContentKind, raw: &Value) -> SanitizedInput {
    let schema = kind.schema();
    let mut input = SanitizedInput::default();

    let Some(body) = raw.as_object() else {
        return input;
    };

    for (key, value) in body {
        if key == "status" && schema.status.is_gated() {
            // Non-string statuses normalize to the visible value, same
            // as any unrecognized string.
            let raw_status = value.as_str().unwrap_or_default();
            input.status = Some(schema.status.normalize(raw_status).to_string());
            continue;
        }

        if key == "slug" && schema.slugged {
            if let Some(text) = value.as_str() {
                let cleaned = text.trim().to_lowercase();
                if !cleaned.is_empty() {
                    input.slug = Some(cleaned);
                }
            }
            continue;
        }

        if key == "id" {
            if let Some(text) = value.as_str() {
                input.id = Some(text.trim().to_string());
            }
            continue;
        }

        let Some(spec) = schema.field(key) else {
            continue;
        };
        input.fields.insert(key.clone(), normalize_value(spec, value));
    }

    input
}

fn normalize_value(spec: &FieldSpec, value: &Value) -> Value {
    match spec.kind {
        FieldKind::Text => {
            let text = value.as_str().map(str::trim).unwrap_or_default();
            Value::String(text.to_string())
        }
        FieldKind::TextList => match value {
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .map(|entry| Value::String(entry.to_string()))
                    .collect(),
            ),
            _ => Value::Array(Vec::new()),
        },
        FieldKind::Int { default, min, max } => {
            let parsed = match value {
                Value::Number(number) => number
                    .as_i64()
                    .or_else(|| number.as_f64().map(|float| float as i64)),
                Value::String(text) => {
                    let trimmed = text.trim();
                    trimmed
                        .parse::<i64>()
                        .ok()
                        .or_else(|| trimmed.parse::<f64>().ok().map(|float| float as i64))
                }
                _ => None,
            };

            let mut number = parsed.unwrap_or(default);
            if let Some(min) = min {
                number = number.max(min);
            }
            if let Some(max) = max {
                number = number.min(max);
            }
            Value::Number(number.into())
        }
    }
}
