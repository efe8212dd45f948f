//! In-memory model of a BAGEL input document
//!
//! A document is an ordered list of sections. Each section is an ordered
//! association list of keys and values; order is part of the output contract,
//! so nothing here is backed by a hash map.

mod json;

use crate::error::{InputError, Result};
use nalgebra::Vector3;

/// Key under which sibling sections carry their identity.
pub const TITLE_KEY: &str = "title";
/// Title of the section holding the molecular geometry.
pub const MOLECULE_TITLE: &str = "molecule";
/// Top-level key wrapping the section list.
pub const ROOT_KEY: &str = "bagel";

/// One atom of the geometry: element symbol plus Cartesian position.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub symbol: String,
    pub position: Vector3<f64>,
}

impl AtomRecord {
    pub fn new(symbol: impl Into<String>, position: Vector3<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            position,
        }
    }

    /// The `{"atom": .., "xyz": [..]}` section this record is written as.
    pub fn to_section(&self) -> Section {
        let xyz = self.position.iter().map(|&c| Value::Float(c)).collect();
        Section::new()
            .with("atom", self.symbol.as_str())
            .with("xyz", Value::Array(xyz))
    }
}

/// Closed set of values a section may hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Array(Vec<Value>),
    /// Contiguous integer buffer, written compactly.
    IntArray(Vec<i64>),
    /// Contiguous float buffer, written with 7 significant digits.
    FloatArray(Vec<f64>),
    Section(Section),
    Atom(AtomRecord),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Value::Section(section) => Some(section),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Section> for Value {
    fn from(value: Section) -> Self {
        Value::Section(value)
    }
}

impl From<AtomRecord> for Value {
    fn from(value: AtomRecord) -> Self {
        Value::Atom(value)
    }
}

/// Ordered mapping from keys to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    entries: Vec<(String, Value)>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Section::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`. An existing key keeps its position; a new key
    /// is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// The `title` discriminator, if present and a string.
    pub fn title(&self) -> Option<&str> {
        self.get(TITLE_KEY).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A complete input: the ordered list of sections under the `bagel` key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// First section whose title equals `title`.
    pub fn find_section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title() == Some(title))
    }

    pub fn find_section_mut(&mut self, title: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.title() == Some(title))
    }

    /// The molecule section, or a lookup error when the document has none.
    pub fn molecule_mut(&mut self) -> Result<&mut Section> {
        self.find_section_mut(MOLECULE_TITLE)
            .ok_or_else(|| InputError::Lookup {
                title: MOLECULE_TITLE.to_string(),
            })
    }

    /// The document as a single value: `{"bagel": [sections...]}`.
    pub fn to_value(&self) -> Value {
        let sections = self.sections.iter().cloned().map(Value::Section).collect();
        Value::Section(Section::new().with(ROOT_KEY, Value::Array(sections)))
    }
}
