//! Reading documents back from JSON text
//!
//! The writer's layout is its own, but everything it produces is valid JSON,
//! so templates are read with `serde_json` and converted into the model.

use super::{AtomRecord, Document, Section, Value, ROOT_KEY};
use crate::error::{InputError, Result};
use nalgebra::Vector3;
use serde_json::{Map, Value as JsonValue};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

impl Document {
    /// Read and convert a template document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading template from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;
        Self::from_json_str(&content, path)
    }

    /// Convert JSON text into a document. `origin` is only used in error
    /// messages.
    pub fn from_json_str(content: &str, origin: impl AsRef<Path>) -> Result<Self> {
        let origin = origin.as_ref();
        let root: JsonValue = serde_json::from_str(content)
            .map_err(|e| InputError::template(origin, e.to_string()))?;

        let sections = root
            .get(ROOT_KEY)
            .and_then(JsonValue::as_array)
            .ok_or_else(|| {
                InputError::template(origin, format!("expected a top-level \"{ROOT_KEY}\" array"))
            })?;

        let sections = sections
            .iter()
            .enumerate()
            .map(|(idx, entry)| match entry {
                JsonValue::Object(map) => section_from_json(map),
                other => Err(InputError::template(
                    origin,
                    format!("entry {idx} of \"{ROOT_KEY}\" is {}, not an object", json_type_name(other)),
                )),
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Template holds {} sections", sections.len());
        Ok(Document::new(sections))
    }
}

fn section_from_json(map: &Map<String, JsonValue>) -> Result<Section> {
    let mut section = Section::new();
    for (key, value) in map {
        section.insert(key.as_str(), value_from_json(value)?);
    }
    Ok(section)
}

fn value_from_json(value: &JsonValue) -> Result<Value> {
    Ok(match value {
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) if !n.is_f64() => Value::Int(i),
            _ => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::Array(items) => {
            Value::Array(items.iter().map(value_from_json).collect::<Result<_>>()?)
        }
        JsonValue::Object(map) => match atom_from_json(map) {
            Some(atom) => Value::Atom(atom),
            None => Value::Section(section_from_json(map)?),
        },
        JsonValue::Null => {
            return Err(InputError::Serialization {
                type_name: json_type_name(value).to_string(),
            })
        }
    })
}

/// Recognise `{"atom": "O", "xyz": [x, y, z]}` with float coordinates.
/// Integer coordinates stay a plain section so they are written back unchanged.
fn atom_from_json(map: &Map<String, JsonValue>) -> Option<AtomRecord> {
    let mut keys = map.keys();
    if map.len() != 2 || keys.next()? != "atom" || keys.next()? != "xyz" {
        return None;
    }
    let symbol = map.get("atom")?.as_str()?;
    let xyz = map.get("xyz")?.as_array()?;
    if xyz.len() != 3 || !xyz.iter().all(JsonValue::is_f64) {
        return None;
    }
    let coords: Vec<f64> = xyz.iter().filter_map(JsonValue::as_f64).collect();
    Some(AtomRecord::new(
        symbol,
        Vector3::new(coords[0], coords[1], coords[2]),
    ))
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
