//! End-to-end tests for both build modes
//!
//! These run the command-line entry point against the sample inputs in
//! `example/` and inspect the written files.

use bagel_input::app::InputApplication;
use bagel_input::config::Args;
use bagel_input::{Document, InputError, Value};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Helper function to get the path to example files
fn example_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("example")
        .join(filename)
}

fn run(args: &[&str]) -> color_eyre::eyre::Result<()> {
    let mut argv = vec!["bagel-input"];
    argv.extend_from_slice(args);
    InputApplication::new(Args::try_parse_from(argv)?).execute()
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

fn geometry_symbols(document: &Document) -> Vec<String> {
    let molecule = document.find_section("molecule").expect("molecule section");
    let Some(Value::Array(geometry)) = molecule.get("geometry") else {
        panic!("geometry must be an array");
    };
    geometry
        .iter()
        .map(|entry| match entry {
            Value::Atom(atom) => atom.symbol.clone(),
            other => panic!("unexpected geometry entry {other:?}"),
        })
        .collect()
}

#[test]
fn test_fresh_build_writes_default_job() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("h2o.json");
    let xyz = example_path("h2o.xyz");

    run(&["fresh", path_str(&xyz), path_str(&output)]).expect("fresh build");

    let text = fs::read_to_string(&output).unwrap();
    let document = Document::from_json_str(&text, &output).unwrap();
    assert_eq!(geometry_symbols(&document), vec!["O", "H", "H"]);

    let titles: Vec<&str> = document.sections.iter().filter_map(|s| s.title()).collect();
    assert_eq!(
        titles,
        vec!["molecule", "load_ref", "optimize", "print", "save_ref"]
    );

    // A second run over the same geometry produces the same bytes.
    let again = temp_dir.path().join("h2o-again.json");
    run(&["fresh", path_str(&xyz), path_str(&again)]).expect("second fresh build");
    assert_eq!(fs::read_to_string(&again).unwrap(), text);
}

#[test]
fn test_fresh_build_with_job_file_and_overrides() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("ethylene.json");

    run(&[
        "--config",
        path_str(&example_path("job.yaml")),
        "fresh",
        path_str(&example_path("ethylene.xyz")),
        path_str(&output),
        "--target",
        "1",
    ])
    .expect("fresh build");

    let document = Document::load(&output).unwrap();
    assert_eq!(geometry_symbols(&document), vec!["C", "C", "H", "H", "H", "H"]);

    let molecule = document.find_section("molecule").unwrap();
    assert_eq!(molecule.get("basis"), Some(&Value::from("cc-pvdz")));

    let optimize = document.find_section("optimize").unwrap();
    assert_eq!(optimize.get("target"), Some(&Value::Int(1)));
    assert_eq!(optimize.get("maxstep"), Some(&Value::Float(0.1)));
    let Some(Value::Array(methods)) = optimize.get("method") else {
        panic!("method must be an array");
    };
    let casscf = methods[0].as_section().unwrap();
    assert_eq!(casscf.get("nstate"), Some(&Value::Int(3)));
    // 16 electrons, 2 active
    assert_eq!(casscf.get("nclosed"), Some(&Value::Int(7)));
}

#[test]
fn test_template_build_replaces_only_geometry() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("water-from-template.json");
    let template_path = example_path("template.json");

    run(&[
        "template",
        path_str(&template_path),
        path_str(&example_path("h2o.xyz")),
        path_str(&output),
    ])
    .expect("template build");

    let template = Document::load(&template_path).unwrap();
    let merged = Document::load(&output).unwrap();

    assert_eq!(geometry_symbols(&merged), vec!["O", "H", "H"]);
    assert_eq!(merged.sections.len(), template.sections.len());
    assert_eq!(merged.sections[1..], template.sections[1..]);

    let molecule = merged.find_section("molecule").unwrap();
    let keys: Vec<&str> = molecule.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["title", "basis", "df_basis", "angstrom", "geometry"]);
    assert_eq!(molecule.get("angstrom"), Some(&Value::Bool(true)));

    // Sections after the molecule are written exactly as the template renders them.
    let rendered_template = template.to_bagel_json();
    let written = fs::read_to_string(&output).unwrap();
    let from_force = |text: &str| text[text.find("\"force\"").unwrap()..].to_string();
    assert_eq!(from_force(&written), from_force(&rendered_template));
}

#[test]
fn test_template_without_molecule_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let template = temp_dir.path().join("no-molecule.json");
    fs::write(
        &template,
        r#"{"bagel": [{"title": "save_ref", "file": "ref"}]}"#,
    )
    .unwrap();
    let output = temp_dir.path().join("out.json");

    let err = run(&[
        "template",
        path_str(&template),
        path_str(&example_path("h2o.xyz")),
        path_str(&output),
    ])
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<InputError>(),
        Some(InputError::Lookup { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn test_bad_geometry_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let xyz = temp_dir.path().join("bad.xyz");
    fs::write(&xyz, "1\n\nO 0.0 0.0 zero\n").unwrap();
    let output = temp_dir.path().join("out.json");

    let err = run(&["fresh", path_str(&xyz), path_str(&output)]).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<InputError>(),
        Some(InputError::Parse { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn test_existing_output_is_overwritten() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("h2o.json");
    fs::write(&output, "stale content that is much longer than nothing at all").unwrap();

    run(&["fresh", path_str(&example_path("h2o.xyz")), path_str(&output)]).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("{\n  \"bagel\": ["));
    assert!(!text.contains("stale"));
}
