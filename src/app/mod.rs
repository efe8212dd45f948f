mod build;

pub use build::build_fresh_document;

use crate::config::{load_job_config, Args, Command, FreshArgs, TemplateArgs};
use crate::document::Document;
use crate::geometry::read_xyz;
use crate::io::{setup_output, write_document};
use crate::template::merge_template;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::path::Path;
use tracing::info;

pub struct InputApplication {
    args: Args,
}

impl InputApplication {
    /// Parse the command line. Missing arguments print usage and exit with a
    /// non-zero status inside clap.
    pub fn from_cli() -> Self {
        Self::new(Args::parse())
    }

    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.log_file.as_deref(), self.args.verbose);
        self.execute()
    }

    /// Build and write the document without touching the global logger.
    pub fn execute(&self) -> Result<()> {
        let (document, output) = match &self.args.command {
            Command::Fresh(fresh) => (
                run_fresh(self.args.config.as_deref(), fresh)?,
                &fresh.output,
            ),
            Command::Template(template) => (run_template(template)?, &template.output),
        };

        write_document(&document, output)
            .wrap_err_with(|| format!("Unable to write BAGEL input: {}", output.display()))
    }
}

fn run_fresh(config_file: Option<&Path>, args: &FreshArgs) -> Result<Document> {
    info!("Building fresh input from defaults");
    let config = load_job_config(config_file, args)?;
    let atoms = read_xyz(&args.geometry)
        .wrap_err_with(|| format!("Unable to read geometry: {}", args.geometry.display()))?;
    let document = build_fresh_document(&config, atoms)?;
    Ok(document)
}

fn run_template(args: &TemplateArgs) -> Result<Document> {
    info!("Building input from template: {}", args.template.display());
    let document = merge_template(&args.template, &args.geometry).wrap_err_with(|| {
        format!(
            "Unable to merge {} into {}",
            args.geometry.display(),
            args.template.display()
        )
    })?;
    Ok(document)
}
