use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The master seed of the previous run, persisted as a small JSON
/// sidecar so `--replay` can reproduce the run exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSeed {
    pub seed: u64,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("no stored seed at {0}: run once without --replay first")]
    Missing(String),
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("seed file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn load(path: &Path) -> Result<StoredSeed, SeedError> {
    if !path.exists() {
        return Err(SeedError::Missing(path.display().to_string()));
    }
    let text = fs::read_to_string(path).map_err(|source| SeedError::Io {
        context: "reading seed file",
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

pub fn store(path: &Path, seed: u64) -> Result<(), SeedError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| SeedError::Io {
                context: "creating seed file directory",
                source,
            })?;
        }
    }
    let text = serde_json::to_string_pretty(&StoredSeed { seed })?;
    fs::write(path, text).map_err(|source| SeedError::Io {
        context: "writing seed file",
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn stored_seed_round_trips() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("bench").join("seed.json");
        store(&path, 424_242).expect("seed stores");
        assert_eq!(load(&path).expect("seed loads"), StoredSeed { seed: 424_242 });
    }

    #[test]
    fn replaying_without_a_stored_seed_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("seed.json");
        assert!(matches!(load(&path), Err(SeedError::Missing(_))));
    }

    #[test]
    fn garbage_in_the_seed_file_is_reported_as_malformed() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("seed.json");
        fs::write(&path, "not json").expect("write garbage");
        assert!(matches!(load(&path), Err(SeedError::Malformed(_))));
    }
}
