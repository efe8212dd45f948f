//! Logging setup and document output

use crate::document::Document;
use crate::error::{InputError, Result};
use std::fs::{self, File};
use std::path::Path;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Setup logging to a file, or to stderr when no file is given
pub fn setup_output(log_file: Option<&Path>, verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    match log_file {
        Some(path) => match File::create(path) {
            Ok(log) => {
                let file_layer = layer()
                    .with_writer(log)
                    .with_target(false)
                    .with_ansi(false)
                    .with_filter(level);
                Registry::default().with(file_layer).init();
                info!("Log will be written to: {}", path.display());
            }
            Err(e) => eprintln!("Could not create log file {}: {}", path.display(), e),
        },
        None => {
            let stderr_layer = layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(true)
                .with_filter(level);
            Registry::default().with(stderr_layer).init();
        }
    }
}

/// Render `document` completely, then write it to `path` in one go,
/// replacing whatever was there.
pub fn write_document(document: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let text = document.to_bagel_json();
    fs::write(path, &text).map_err(|e| InputError::io(path, e))?;
    info!("Wrote {} bytes to: {}", text.len(), path.display());
    Ok(())
}
