//! XML to nested mapping decoder.
//!
//! Produces a `serde_json::Value` tree with the usual conventions:
//! attributes become `@name` keys, an element holding only text becomes a
//! string, an empty element becomes `null`, repeated siblings collapse into
//! an array, and text mixed with child elements lands under `#text`.

use quick_xml::{Reader, events::BytesStart, events::Event};
use serde_json::{Map, Value};

use crate::error::{BartError, Result};

struct Frame {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl Frame {
    fn new(name: String, children: Map<String, Value>) -> Self {
        Self {
            name,
            children,
            text: String::new(),
        }
    }

    fn into_value(self) -> Value {
        let text = self.text.trim();
        if self.children.is_empty() {
            if text.is_empty() {
                Value::Null
            } else {
                Value::String(text.to_string())
            }
        } else {
            let mut children = self.children;
            if !text.is_empty() {
                children.insert("#text".to_string(), Value::String(text.to_string()));
            }
            Value::Object(children)
        }
    }
}

fn insert_child(parent: &mut Map<String, Value>, name: String, value: Value) {
    match parent.get_mut(&name) {
        None => {
            parent.insert(name, value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}

fn attributes(start: &BytesStart<'_>) -> Result<Map<String, Value>> {
    let mut out = Map::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| BartError::Decode(e.to_string()))?;
        let key = format!("@{}", String::from_utf8_lossy(attr.key.as_ref()));
        let value = attr
            .unescape_value()
            .map_err(|e| BartError::Decode(e.to_string()))?;
        out.insert(key, Value::String(value.into_owned()));
    }
    Ok(out)
}

/// Decode an XML document into a mapping keyed by the root element's name.
pub(crate) fn decode(body: &str) -> Result<Value> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    // The bottom frame collects the document element.
    let mut stack = vec![Frame::new(String::new(), Map::new())];
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                stack.push(Frame::new(name, attributes(&e)?));
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let value = Frame::new(String::new(), attributes(&e)?).into_value();
                if let Some(parent) = stack.last_mut() {
                    insert_child(&mut parent.children, name, value);
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|e| BartError::Decode(e.to_string()))?;
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                let text = std::str::from_utf8(e.as_ref())
                    .map_err(|e| BartError::Decode(e.to_string()))?;
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(text);
                }
            }
            Ok(Event::End(_)) => {
                if stack.len() < 2 {
                    return Err(BartError::Decode("unbalanced closing tag".to_string()));
                }
                if let Some(frame) = stack.pop() {
                    let name = frame.name.clone();
                    let value = frame.into_value();
                    if let Some(parent) = stack.last_mut() {
                        insert_child(&mut parent.children, name, value);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(BartError::Decode(format!(
                    "malformed XML at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    if stack.len() != 1 {
        return Err(BartError::Decode("unexpected end of document".to_string()));
    }
    let document = stack.remove(0);
    if document.children.is_empty() {
        return Err(BartError::Decode("document has no root element".to_string()));
    }
    Ok(Value::Object(document.children))
}
