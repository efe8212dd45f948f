//! Command-line argument parsing for BAGEL input generation

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Create JSON input files for BAGEL from XYZ geometries
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// YAML file with job parameters for `fresh` builds
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write the log to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log debug messages
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a complete input from the default job sections
    Fresh(FreshArgs),
    /// Copy every section from a template except the molecule geometry
    Template(TemplateArgs),
}

#[derive(ClapArgs, Debug)]
pub struct FreshArgs {
    /// Geometry in XYZ format
    pub geometry: PathBuf,

    /// Output BAGEL input file (overwritten)
    pub output: PathBuf,

    /// Override orbital basis set
    #[arg(long)]
    pub basis: Option<String>,

    /// Override density-fitting basis set
    #[arg(long)]
    pub df_basis: Option<String>,

    /// Override number of active orbitals
    #[arg(long)]
    pub nact: Option<i64>,

    /// Override number of states
    #[arg(long)]
    pub nstate: Option<i64>,

    /// Override state of interest (0 = ground state)
    #[arg(long)]
    pub target: Option<i64>,

    /// Molecular charge (default: 0 for neutral)
    #[arg(long, allow_hyphen_values = true)]
    pub charge: Option<i32>,
}

#[derive(ClapArgs, Debug)]
pub struct TemplateArgs {
    /// Existing BAGEL input whose sections are copied
    pub template: PathBuf,

    /// Geometry in XYZ format replacing the molecule section's geometry
    pub geometry: PathBuf,

    /// Output BAGEL input file (overwritten)
    pub output: PathBuf,
}
