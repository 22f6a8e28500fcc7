use serde_json::Value;

/// Content used when the provider response carries no message text.
///
/// It parses to an empty object, which differs from the unknown action
/// produced for unparsable text.
pub const EMPTY_CONTENT: &str = "{}";

#[derive(Debug, thiserror::Error)]
#[error("message content is {kind}, expected a string")]
pub struct NonTextContent {
    pub kind: &'static str,
}

/// Pull `output.choices[0].message.content` out of a DashScope response,
/// trimmed. Missing links, `null` and blank content yield [`EMPTY_CONTENT`];
/// content of any other non-string type is an error.
pub fn extract_content(envelope: &Value) -> Result<String, NonTextContent> {
    let content = envelope
        .get("output")
        .and_then(|output| output.get("choices"))
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"));

    let text = match content {
        None | Some(Value::Null) => return Ok(EMPTY_CONTENT.to_string()),
        Some(Value::String(text)) => text.trim(),
        Some(other) => {
            return Err(NonTextContent {
                kind: json_kind(other),
            })
        }
    };

    if text.is_empty() {
        Ok(EMPTY_CONTENT.to_string())
    } else {
        Ok(text.to_string())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
