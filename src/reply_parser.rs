// Extraction of a coordinate from free-form assistant replies

use regex::Regex;
use serde_json::Value;

/// What an assistant reply yields once parsed: seconds values as the assistant
/// wrote them, not yet rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub location_name: Option<String>,
}

/// Turns assistant text into a coordinate. Returns `None` for anything it
/// cannot make sense of; callers treat that as "no coordinate".
pub trait StructuredReplyParser: Send + Sync {
    fn parse(&self, reply: &str) -> Option<AssistantCoordinate>;
}

/// Takes the span from the first `{` to the last `}` and reads it as JSON.
/// Prose around the object is ignored.
pub struct JsonObjectReplyParser {
    object_span: Regex,
}

impl JsonObjectReplyParser {
    pub fn new() -> Self {
        Self {
            object_span: Regex::new(r"(?s)\{.*\}").expect("valid object span regex"),
        }
    }
}

impl Default for JsonObjectReplyParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuredReplyParser for JsonObjectReplyParser {
    fn parse(&self, reply: &str) -> Option<AssistantCoordinate> {
        let span = self.object_span.find(reply)?;
        let object: Value = match serde_json::from_str(span.as_str()) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "assistant reply contains no parseable JSON object");
                return None;
            }
        };

        let latitude = numeric(object.get("latitude")?)?;
        let longitude = numeric(object.get("longitude")?)?;
        let location_name = object
            .get("location_name")
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(AssistantCoordinate {
            latitude,
            longitude,
            location_name,
        })
    }
}

// JSON numbers, or strings holding a number
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}
