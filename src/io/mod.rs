//! Input/Output operations for BAGEL input generation
//!
//! This module handles logging setup and writing the rendered document.

mod output;

pub use output::{setup_output, write_document};
