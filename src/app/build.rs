use crate::config::JobConfig;
use crate::document::{AtomRecord, Document, Section, Value, MOLECULE_TITLE, TITLE_KEY};
use crate::error::Result;
use crate::geometry::{closed_orbitals, count_electrons};
use crate::template::replace_geometry;
use tracing::info;

/// Build the default job: molecule, load_ref, optimize (with one method
/// section), print, save_ref. Section order is the job order BAGEL runs.
pub fn build_fresh_document(config: &JobConfig, atoms: Vec<AtomRecord>) -> Result<Document> {
    let electrons = count_electrons(&atoms, config.charge())?;
    let nclosed = closed_orbitals(electrons, config.nact())?;
    info!(
        "{} electrons, {} active orbitals, {} closed orbitals",
        electrons,
        config.nact(),
        nclosed
    );

    let mut document = Document::new(vec![
        molecule_section(config),
        load_ref_section(config),
        optimize_section(config, nclosed),
        print_section(config),
        save_ref_section(config),
    ]);
    replace_geometry(&mut document, atoms)?;
    Ok(document)
}

fn molecule_section(config: &JobConfig) -> Section {
    Section::new()
        .with(TITLE_KEY, MOLECULE_TITLE)
        .with("basis", config.basis())
        .with("df_basis", config.df_basis())
        .with("angstrom", true)
        .with("geometry", Value::Array(Vec::new()))
}

fn load_ref_section(config: &JobConfig) -> Section {
    Section::new()
        .with(TITLE_KEY, "load_ref")
        .with("file", config.reference_file())
        .with("continue_geom", config.continue_geom())
}

fn method_section(config: &JobConfig, nclosed: i64) -> Section {
    Section::new()
        .with(TITLE_KEY, config.method())
        .with("nstate", config.nstate())
        .with("nact", config.nact())
        .with("natocc", config.natocc())
        .with("nclosed", nclosed)
        .with("dipoles", config.dipoles())
}

fn optimize_section(config: &JobConfig, nclosed: i64) -> Section {
    Section::new()
        .with(TITLE_KEY, "optimize")
        .with("opttype", config.opttype())
        .with("target", config.target())
        .with("maxstep", config.maxstep())
        .with(
            "method",
            Value::Array(vec![Value::Section(method_section(config, nclosed))]),
        )
}

fn print_section(config: &JobConfig) -> Section {
    Section::new()
        .with(TITLE_KEY, "print")
        .with("file", config.molden_file())
        .with("orbitals", true)
}

fn save_ref_section(config: &JobConfig) -> Section {
    Section::new()
        .with(TITLE_KEY, "save_ref")
        .with("file", config.reference_file())
}
