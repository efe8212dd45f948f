//! Configuration management for BAGEL input generation
//!
//! This module holds the job parameters used for a fresh build, their
//! defaults, and the command-line arguments that override them.

mod args;

pub use args::{Args, Command, FreshArgs, TemplateArgs};

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Job parameters for a freshly built input
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct JobConfig {
    pub basis: Option<String>,
    pub df_basis: Option<String>,
    pub method: Option<String>,
    pub opttype: Option<String>,
    pub nstate: Option<i64>,
    /// State of interest: 0 = S0, 1 = S1, ...
    pub target: Option<i64>,
    /// Number of active orbitals
    pub nact: Option<i64>,
    pub maxstep: Option<f64>,
    pub natocc: Option<bool>,
    pub dipoles: Option<bool>,
    pub charge: Option<i32>,
    pub reference_file: Option<String>,
    pub continue_geom: Option<bool>,
    pub molden_file: Option<String>,
}

impl Default for JobConfig {
    fn default() -> Self {
        JobConfig {
            basis: Some("svp".to_string()),
            df_basis: Some("svp-jkfit".to_string()),
            method: Some("casscf".to_string()),
            opttype: Some("energy".to_string()),
            nstate: Some(2),
            target: Some(1),
            nact: Some(8),
            maxstep: Some(0.05),
            natocc: Some(true),
            dipoles: Some(true),
            charge: Some(0),
            reference_file: Some("mo_coeff".to_string()),
            continue_geom: Some(false),
            molden_file: Some("orbitals.molden".to_string()),
        }
    }
}

impl JobConfig {
    /// A config with every field unset, to be filled by `with_defaults`.
    pub fn empty() -> Self {
        JobConfig {
            basis: None,
            df_basis: None,
            method: None,
            opttype: None,
            nstate: None,
            target: None,
            nact: None,
            maxstep: None,
            natocc: None,
            dipoles: None,
            charge: None,
            reference_file: None,
            continue_geom: None,
            molden_file: None,
        }
    }

    /// Read a YAML job file. Missing fields stay unset.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading job configuration from: {}", path.display());
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Unable to read configuration file: {}", path.display()))?;
        serde_yml::from_str::<JobConfig>(&content).wrap_err("Failed to parse configuration file")
    }

    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.basis.is_none() {
            self.basis = defaults.basis;
        }
        if self.df_basis.is_none() {
            self.df_basis = defaults.df_basis;
        }
        if self.method.is_none() {
            self.method = defaults.method;
        }
        if self.opttype.is_none() {
            self.opttype = defaults.opttype;
        }
        if self.nstate.is_none() {
            self.nstate = defaults.nstate;
        }
        if self.target.is_none() {
            self.target = defaults.target;
        }
        if self.nact.is_none() {
            self.nact = defaults.nact;
        }
        if self.maxstep.is_none() {
            self.maxstep = defaults.maxstep;
        }
        if self.natocc.is_none() {
            self.natocc = defaults.natocc;
        }
        if self.dipoles.is_none() {
            self.dipoles = defaults.dipoles;
        }
        if self.charge.is_none() {
            self.charge = defaults.charge;
        }
        if self.reference_file.is_none() {
            self.reference_file = defaults.reference_file;
        }
        if self.continue_geom.is_none() {
            self.continue_geom = defaults.continue_geom;
        }
        if self.molden_file.is_none() {
            self.molden_file = defaults.molden_file;
        }
        self
    }

    /// Command-line flags take precedence over the file.
    pub fn apply_overrides(mut self, args: &FreshArgs) -> Self {
        if let Some(basis) = &args.basis {
            info!("Overriding basis with: {}", basis);
            self.basis = Some(basis.clone());
        }
        if let Some(df_basis) = &args.df_basis {
            info!("Overriding df_basis with: {}", df_basis);
            self.df_basis = Some(df_basis.clone());
        }
        if let Some(nact) = args.nact {
            info!("Overriding nact with: {}", nact);
            self.nact = Some(nact);
        }
        if let Some(nstate) = args.nstate {
            info!("Overriding nstate with: {}", nstate);
            self.nstate = Some(nstate);
        }
        if let Some(target) = args.target {
            info!("Overriding target with: {}", target);
            self.target = Some(target);
        }
        if let Some(charge) = args.charge {
            info!("Overriding charge with: {}", charge);
            self.charge = Some(charge);
        }
        self
    }

    pub fn basis(&self) -> &str {
        self.basis.as_deref().unwrap_or("svp")
    }

    pub fn df_basis(&self) -> &str {
        self.df_basis.as_deref().unwrap_or("svp-jkfit")
    }

    pub fn method(&self) -> &str {
        self.method.as_deref().unwrap_or("casscf")
    }

    pub fn opttype(&self) -> &str {
        self.opttype.as_deref().unwrap_or("energy")
    }

    pub fn nstate(&self) -> i64 {
        self.nstate.unwrap_or(2)
    }

    pub fn target(&self) -> i64 {
        self.target.unwrap_or(1)
    }

    pub fn nact(&self) -> i64 {
        self.nact.unwrap_or(8)
    }

    pub fn maxstep(&self) -> f64 {
        self.maxstep.unwrap_or(0.05)
    }

    pub fn natocc(&self) -> bool {
        self.natocc.unwrap_or(true)
    }

    pub fn dipoles(&self) -> bool {
        self.dipoles.unwrap_or(true)
    }

    pub fn charge(&self) -> i32 {
        self.charge.unwrap_or(0)
    }

    pub fn reference_file(&self) -> &str {
        self.reference_file.as_deref().unwrap_or("mo_coeff")
    }

    pub fn continue_geom(&self) -> bool {
        self.continue_geom.unwrap_or(false)
    }

    pub fn molden_file(&self) -> &str {
        self.molden_file.as_deref().unwrap_or("orbitals.molden")
    }
}

/// Resolve the job configuration for a fresh build: file (if any), then
/// defaults, then command-line overrides.
pub fn load_job_config(config_file: Option<&Path>, args: &FreshArgs) -> Result<JobConfig> {
    let config = match config_file {
        Some(path) => JobConfig::from_yaml_file(path)?,
        None => JobConfig::empty(),
    };
    Ok(config.with_defaults().apply_overrides(args))
}
