use std::path::Path;

use thiserror::Error;

use crate::display::Display;
use crate::logging;
use crate::model::prices::AppId;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Could not read identifiers file '{path}': {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
}

/// Reads one identifier per line, dropping every line that is not made of decimal digits.
pub async fn read_identifiers(path: &Path) -> Result<Vec<String>, InputError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| InputError::ReadFile {
            path: path.to_display(),
            source,
        })?;
    let identifiers = filter_identifiers(&content);
    logging::debug!(
        "{} identifier(s) loaded from {}",
        identifiers.len(),
        path.to_display()
    );
    Ok(identifiers)
}

pub fn filter_identifiers(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| AppId::parse_line(line).is_some())
        .map(|line| line.trim().to_string())
        .collect()
}
