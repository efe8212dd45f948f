//! Writer for the BAGEL input layout
//!
//! The output parses as JSON, but the layout is not a standard pretty-print
//! and the downstream reader depends on it:
//!
//! - a section with exactly two keys opens on a new line, indented one level
//!   deeper than its key;
//! - `atom` and `xyz` fields are not indented, `atom` is followed by a bare
//!   comma, and a section whose last key is `xyz` closes with ` }` on the
//!   same line;
//! - every other section closes with `}` on its own line at its own depth;
//! - sequences are comma-joined on one line;
//! - lone floats are written as `%12.8f`, float buffers as `%.7g`, integer
//!   buffers comma-joined without spaces.
//!
//! Indentation is two spaces per level.

mod number;

pub use number::{format_fixed, format_general};

use crate::document::{Document, Section, Value};

const INDENT: usize = 2;
const ATOM_KEY: &str = "atom";
const XYZ_KEY: &str = "xyz";

impl Document {
    /// Render the whole document, `{"bagel": [...]}`, in the BAGEL layout.
    pub fn to_bagel_json(&self) -> String {
        to_bagel_json(&self.to_value())
    }
}

/// Render any value as it would appear at the top level.
pub fn to_bagel_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, level: usize) {
    match value {
        Value::Section(section) => write_section(out, section, level),
        Value::Atom(atom) => write_section(out, &atom.to_section(), level),
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Array(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_value(out, item, level + 1);
            }
            out.push(']');
        }
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Float(x) => out.push_str(&format_fixed(*x)),
        Value::IntArray(values) => {
            let joined: Vec<String> = values.iter().map(i64::to_string).collect();
            out.push('[');
            out.push_str(&joined.join(","));
            out.push(']');
        }
        Value::FloatArray(values) => {
            let joined: Vec<String> = values.iter().copied().map(format_general).collect();
            out.push('[');
            out.push_str(&joined.join(","));
            out.push(']');
        }
    }
}

fn write_section(out: &mut String, section: &Section, level: usize) {
    if section.len() == 2 {
        out.push('\n');
        push_indent(out, level + 1);
        out.push('{');
    } else {
        out.push_str("{\n");
    }

    let mut separator = "";
    let mut last_key = None;
    for (key, value) in section.iter() {
        out.push_str(separator);
        separator = if key == ATOM_KEY { "," } else { ",\n" };
        if key != XYZ_KEY && key != ATOM_KEY {
            push_indent(out, level + 1);
        }
        out.push('"');
        out.push_str(key);
        out.push_str("\": ");
        write_value(out, value, level + 1);
        last_key = Some(key);
    }

    if last_key == Some(XYZ_KEY) {
        out.push_str(" }");
    } else {
        out.push('\n');
        push_indent(out, level);
        out.push('}');
    }
}

fn push_indent(out: &mut String, level: usize) {
    out.extend(std::iter::repeat(' ').take(INDENT * level));
}
