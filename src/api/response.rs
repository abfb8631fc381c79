use crate::error::RagChatError;
use serde_json::{Map, Value};

/// What a tool-call response body turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// `{"content": [{"text": ..., "sources": [...]}, ...]}`
    Answer { text: String, sources: Vec<String> },
    /// `{"error": ...}`, from the server or synthesized from a failed request.
    Error { message: String },
    /// Any other body, shown verbatim.
    Unknown(Value),
}

impl Reply {
    /// Classify a response body. Every shape deviation, however small, ends
    /// up as `Unknown` so the caller can fall back to the raw JSON.
    ///
    /// `sources` is only inspected when `show_sources` is set; otherwise it is
    /// left out of the answer whatever its shape.
    pub fn classify(body: &Value, show_sources: bool) -> Self {
        let Some(object) = body.as_object() else {
            return Reply::Unknown(body.clone());
        };

        if let Some(error) = object.get("error") {
            return Reply::Error {
                message: display_value(error),
            };
        }

        match extract_answer(object, show_sources) {
            Some((text, sources)) => Reply::Answer { text, sources },
            None => Reply::Unknown(body.clone()),
        }
    }

    pub fn from_result(result: &Result<Value, RagChatError>, show_sources: bool) -> Self {
        match result {
            Ok(body) => Reply::classify(body, show_sources),
            Err(e) => Reply::Error {
                message: e.to_string(),
            },
        }
    }
}

/// Pull `text` and `sources` out of the first content element.
fn extract_answer(
    object: &Map<String, Value>,
    show_sources: bool,
) -> Option<(String, Vec<String>)> {
    let first = object
        .get("content")?
        .as_array()?
        .first()?
        .as_object()?;

    let text = match first.get("text") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return None,
    };

    let sources = match first.get("sources").filter(|_| show_sources) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(display_value).collect(),
        Some(_) => return None,
    };

    Some((text, sources))
}

// Strings print bare, everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
