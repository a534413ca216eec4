use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{BartError, Result};
use crate::xml;

/// Echo of the request URL the API wraps around every response.
const WRAPPER_KEY: &str = "uri";

/// Decoded response of a single API call.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Response payload. For most operations this is the contents of one
    /// named element of the response.
    pub data: Value,
    /// Error note the API embedded under `message/error`. The call still
    /// succeeded and `data` holds whatever the API returned alongside it.
    pub advisory: Option<String>,
}

impl Reply {
    /// Decode a raw response body: take the `<root>` element, drop the
    /// wrapper key and lift out any embedded error note.
    pub(crate) fn from_xml(body: &str) -> Result<Self> {
        let decoded = xml::decode(body)?;
        let root = match decoded {
            Value::Object(mut doc) => doc.remove("root"),
            _ => None,
        }
        .ok_or_else(|| BartError::Decode("response has no <root> element".to_string()))?;

        let mut root = match root {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(BartError::Decode(format!(
                    "unexpected <root> content: {other}"
                )));
            }
        };
        root.remove(WRAPPER_KEY);

        let advisory = root
            .get("message")
            .and_then(|m| m.get("error"))
            .and_then(advisory_text);
        if let Some(note) = &advisory {
            warn!(advisory = %note, "BART API returned an error note");
        }

        Ok(Self {
            data: Value::Object(root),
            advisory,
        })
    }

    /// Replace the payload with the element stored under `key`.
    pub(crate) fn into_field(self, key: &str) -> Result<Self> {
        let Self { data, advisory } = self;
        let data = match data {
            Value::Object(mut map) => map.remove(key),
            _ => None,
        }
        .ok_or_else(|| BartError::Decode(format!("response has no <{key}> element")))?;
        Ok(Self { data, advisory })
    }

    pub(crate) fn message(&self, key: &str) -> Option<&Value> {
        self.data.get("message").and_then(|m| m.get(key))
    }
}

fn advisory_text(error: &Value) -> Option<String> {
    let text = match error {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        Value::Object(map) => {
            let part = |k: &str| map.get(k).and_then(Value::as_str).map(str::trim);
            match (part("text"), part("details")) {
                (Some(t), Some(d)) if !d.is_empty() => format!("{t}: {d}"),
                (Some(t), _) => t.to_string(),
                (None, Some(d)) => d.to_string(),
                (None, None) => error.to_string(),
            }
        }
        other => other.to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}
