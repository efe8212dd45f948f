//! Generation of BAGEL quantum-chemistry input files
//!
//! A [`Document`] is an ordered list of sections rendered by
//! [`Document::to_bagel_json`] in the layout BAGEL expects. Geometry comes
//! from XYZ files ([`geometry::read_xyz`]) and is either placed into the
//! default job ([`app::build_fresh_document`]) or substituted into an
//! existing input ([`template::merge_template`]).

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod io;
pub mod serializer;
pub mod template;

pub use document::{AtomRecord, Document, Section, Value};
pub use error::InputError;
