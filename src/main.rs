//! BAGEL input generator command-line interface
//!
//! Builds a BAGEL JSON input from an XYZ geometry, either from the default
//! job sections or from an existing input used as a template.

use bagel_input::app::InputApplication;
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    InputApplication::from_cli().run()
}
