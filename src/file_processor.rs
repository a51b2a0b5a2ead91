//! File-level conversion: existence check, read, convert, write

use crate::config::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors surfaced by the file wrapper around the conversion pipeline
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The Markdown source does not exist
    #[error("Missing {}", path.display())]
    SourceMissing { path: PathBuf },

    /// Reading the source or writing the destination failed
    #[error("Failed to process {}: {source}", path.display())]
    ProcessingFailed { path: PathBuf, source: io::Error },
}

impl ConvertError {
    fn processing(path: &Path, source: io::Error) -> Self {
        Self::ProcessingFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read the Markdown source, checking that it exists first
pub fn read_source(source: &Path) -> Result<String, ConvertError> {
    if !source.exists() {
        return Err(ConvertError::SourceMissing {
            path: source.to_path_buf(),
        });
    }
    fs::read_to_string(source).map_err(|e| ConvertError::processing(source, e))
}

/// Write the generated HTML, creating parent directories if configured to
pub fn write_destination(destination: &Path, html: &str, config: &Config) -> Result<(), ConvertError> {
    if config.global.create_dirs
        && let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ConvertError::processing(parent, e))?;
    }
    fs::write(destination, html).map_err(|e| ConvertError::processing(destination, e))
}

/// Convert `source` to HTML and write it to `destination`
pub fn convert_file(source: &Path, destination: &Path, config: &Config) -> Result<(), ConvertError> {
    let markdown = read_source(source)?;
    convert_source(source, &markdown, destination, config)
}

/// Convert already-read Markdown from `source` and write it to `destination`
pub fn convert_source(source: &Path, markdown: &str, destination: &Path, config: &Config) -> Result<(), ConvertError> {
    let html = crate::convert(markdown);
    write_destination(destination, &html, config)?;

    log::info!(
        "Converted {} ({} bytes) to {} ({} bytes)",
        source.display(),
        markdown.len(),
        destination.display(),
        html.len()
    );
    Ok(())
}
