use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

use crate::models::Location;

/// Errors that can occur while reading order or courier data
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a JSON array of records from a file
pub fn read_json_file<T, P>(path: P) -> Result<Vec<T>, SourceError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(serde_json::from_str(&contents)?)
}

/// Log a warning for coordinates outside the usual domain
///
/// Distances for such points are still computed, they are just not meaningful.
pub(crate) fn warn_out_of_domain(kind: &str, id: &str, location: &Location) {
    if !location.is_within_domain() {
        tracing::warn!(
            "{} {} has coordinates out of range: lat={}, lon={}",
            kind,
            id,
            location.lat,
            location.lon
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Order;

    #[test]
    fn test_missing_file() {
        let result = read_json_file::<Order, _>("does/not/exist.json");
        assert!(matches!(result, Err(SourceError::Io { .. })));
    }
}
