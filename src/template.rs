//! Substituting a new geometry into an existing document
//!
//! Everything except the molecule section's `angstrom` flag and `geometry`
//! list is passed through untouched, including section and key order.

use crate::document::{AtomRecord, Document, Value};
use crate::error::Result;
use crate::geometry::read_xyz;
use std::path::Path;
use tracing::info;

/// Replace the geometry of the first `title: "molecule"` section.
///
/// Existing `angstrom` / `geometry` keys are overwritten in place; missing
/// ones are appended to the section.
pub fn replace_geometry(document: &mut Document, atoms: Vec<AtomRecord>) -> Result<()> {
    let molecule = document.molecule_mut()?;
    let natoms = atoms.len();
    molecule.insert("angstrom", true);
    molecule.insert(
        "geometry",
        Value::Array(atoms.into_iter().map(Value::Atom).collect()),
    );
    info!("Substituted geometry with {} atoms", natoms);
    Ok(())
}

/// Load `template`, read `xyz` and return the template with the new geometry.
pub fn merge_template(template: impl AsRef<Path>, xyz: impl AsRef<Path>) -> Result<Document> {
    let mut document = Document::load(template)?;
    // fail on a template without a molecule section before touching the xyz file
    document.molecule_mut()?;
    let atoms = read_xyz(xyz)?;
    replace_geometry(&mut document, atoms)?;
    Ok(document)
}
