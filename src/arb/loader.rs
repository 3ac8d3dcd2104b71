//! Reads ARB files from disk.

use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;
use thiserror::Error;

use super::ArbFile;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read ARB file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse ARB file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("ARB file '{}' must contain a JSON object at the top level, found {found}", path.display())]
    NotAnObject { path: PathBuf, found: &'static str },
}

impl LoadError {
    /// Path of the file that failed to load.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::NotAnObject { path, .. } => {
                path
            }
        }
    }
}

/// Load an ARB file.
///
/// # Errors
/// Returns error if the file cannot be read, is not valid JSON,
/// or its top-level value is not an object.
pub fn load_arb_file(path: &Path) -> Result<ArbFile, LoadError> {
    tracing::debug!("Loading ARB file: {:?}", path);

    let content = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
    let text = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let json: Value = serde_json::from_str(text)
        .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })?;

    match json {
        Value::Object(entries) => {
            tracing::debug!("Loaded {} entries from {:?}", entries.len(), path);
            Ok(ArbFile::new(path.to_path_buf(), entries))
        }
        other => Err(LoadError::NotAnObject { path: path.to_path_buf(), found: json_type(&other) }),
    }
}

/// JSON value kind for diagnostics
const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
