//! XYZ geometry reading and electron bookkeeping

use crate::document::AtomRecord;
use crate::error::{InputError, Result};
use nalgebra::Vector3;
use periodic_table_on_an_enum::Element;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Lines before the atom block (atom count and comment).
const HEADER_LINES: usize = 2;

/// Read the atoms of an XYZ file in file order.
pub fn read_xyz(path: impl AsRef<Path>) -> Result<Vec<AtomRecord>> {
    let path = path.as_ref();
    info!("Reading geometry from: {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;
    let atoms = parse_xyz(&content, path)?;
    info!("Read {} atoms", atoms.len());
    Ok(atoms)
}

/// Parse XYZ text. The first two lines are skipped; every later line with
/// exactly four whitespace-separated tokens is an atom, all other lines are
/// ignored.
pub fn parse_xyz(content: &str, path: impl AsRef<Path>) -> Result<Vec<AtomRecord>> {
    let mut atoms = Vec::new();

    for (idx, line) in content.lines().enumerate().skip(HEADER_LINES) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[symbol, x, y, z] = tokens.as_slice() else {
            if !tokens.is_empty() {
                debug!("Skipping line {}: {} tokens", idx + 1, tokens.len());
            }
            continue;
        };

        let parse = |token: &str| {
            token.parse::<f64>().map_err(|e| {
                InputError::parse(path.as_ref(), idx + 1, format!("'{token}': {e}"))
            })
        };
        let position = Vector3::new(parse(x)?, parse(y)?, parse(z)?);
        atoms.push(AtomRecord::new(symbol, position));
    }

    Ok(atoms)
}

/// Total electron count of the geometry for a given molecular charge.
pub fn count_electrons(atoms: &[AtomRecord], charge: i32) -> Result<i64> {
    let mut electrons = 0i64;
    for atom in atoms {
        let element = Element::from_symbol(&atom.symbol).ok_or_else(|| {
            InputError::UnknownElement {
                symbol: atom.symbol.clone(),
            }
        })?;
        electrons += element.get_atomic_number() as i64;
    }
    Ok(electrons - i64::from(charge))
}

/// Number of doubly occupied inactive orbitals left once `nact` electrons
/// go into the active space.
pub fn closed_orbitals(electrons: i64, nact: i64) -> Result<i64> {
    if electrons < nact {
        return Err(InputError::Electrons { electrons, nact });
    }
    Ok((electrons - nact) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER: &str = "3\ncomment\nO 0.000000 0.000000 0.000000\nH 0.000000 0.000000 0.960000\nH 0.930000 0.000000 -0.240000\n";

    #[test]
    fn test_parse_water() {
        let atoms = parse_xyz(WATER, "water.xyz").unwrap();
        let symbols: Vec<&str> = atoms.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["O", "H", "H"]);
        assert_eq!(atoms[1].position, Vector3::new(0.0, 0.0, 0.96));
        assert_eq!(atoms[2].position, Vector3::new(0.93, 0.0, -0.24));
    }

    #[test]
    fn test_only_four_token_lines_are_atoms() {
        let text = "4\nC 1 2 3\nC 0.0 0.0 0.0\n\n# comment\nN 1.0 2.0\nO 1.0 2.0 3.0 extra\nS 1.0 1.0 1.0\n";
        let atoms = parse_xyz(text, "mixed.xyz").unwrap();
        let symbols: Vec<&str> = atoms.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["C", "S"]);
    }

    #[test]
    fn test_header_is_skipped_even_if_atom_shaped() {
        let text = "H 0.0 0.0 0.0\nH 0.0 0.0 0.7\nHe 1.0 1.0 1.0\n";
        let atoms = parse_xyz(text, "short.xyz").unwrap();
        assert_eq!(atoms.len(), 1);
        assert_eq!(atoms[0].symbol, "He");
    }

    #[test]
    fn test_bad_coordinate_is_parse_error() {
        let text = "1\n\nO 0.0 abc 0.0\n";
        match parse_xyz(text, "bad.xyz") {
            Err(InputError::Parse { line_number, .. }) => assert_eq!(line_number, 3),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_electron_count_and_closed_orbitals() {
        let atoms = parse_xyz(WATER, "water.xyz").unwrap();
        assert_eq!(count_electrons(&atoms, 0).unwrap(), 10);
        assert_eq!(count_electrons(&atoms, 1).unwrap(), 9);
        assert_eq!(closed_orbitals(10, 8).unwrap(), 1);
        assert_eq!(closed_orbitals(9, 8).unwrap(), 0);
        assert!(matches!(
            closed_orbitals(2, 8),
            Err(InputError::Electrons { electrons: 2, nact: 8 })
        ));
    }

    #[test]
    fn test_unknown_element() {
        let atoms = vec![AtomRecord::new("Xx", Vector3::zeros())];
        assert!(matches!(
            count_electrons(&atoms, 0),
            Err(InputError::UnknownElement { .. })
        ));
    }
}
