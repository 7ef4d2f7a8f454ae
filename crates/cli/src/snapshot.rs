//! JSON closet snapshot stored on disk.
//!
//! The file holds loosely typed rows exactly as an external store would hand
//! them over. Nothing is validated here; see
//! [`closet_core::domain::normalize_closet`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use closet_core::domain::RawClothingItem;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("closet snapshot `{path}` was not found")]
    NotFound { path: PathBuf },
    #[error("could not read closet snapshot `{path}`: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse closet snapshot `{path}`: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("could not write closet snapshot `{path}`: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("could not serialize closet snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosetSnapshot {
    #[serde(default)]
    pub items: Vec<RawClothingItem>,
}

impl ClosetSnapshot {
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let raw = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SnapshotError::NotFound { path: path.to_path_buf() }
            } else {
                SnapshotError::Read { path: path.to_path_buf(), source }
            }
        })?;

        serde_json::from_str(&raw)
            .map_err(|source| SnapshotError::Parse { path: path.to_path_buf(), source })
    }

    /// Like [`ClosetSnapshot::load`] but a missing file is an empty closet.
    pub fn load_or_default(path: &Path) -> Result<Self, SnapshotError> {
        match Self::load(path) {
            Err(SnapshotError::NotFound { .. }) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let encoded = serde_json::to_string_pretty(self).map_err(SnapshotError::Serialize)?;

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| SnapshotError::Write { path: path.to_path_buf(), source })?;
        }

        fs::write(path, format!("{encoded}\n"))
            .map_err(|source| SnapshotError::Write { path: path.to_path_buf(), source })
    }
}
