use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ladder_types::ParameterSet;

/// Current snapshot file version.
pub const FORMAT_VERSION: u32 = 1;

const FORMAT_NAME: &str = "ladderworks";

/// Project metadata stored alongside the parameter snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub id: Uuid,
    /// Human-readable project name.
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl ProjectMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created: now,
            modified: now,
        }
    }
}

/// The top-level snapshot file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotFile {
    /// Format identifier.
    pub format: String,
    pub version: u32,
    pub project: ProjectMetadata,
    pub params: ParameterSet,
}

/// Serialize a snapshot to a pretty-printed JSON string.
pub fn save_snapshot(project: &ProjectMetadata, params: &ParameterSet) -> String {
    let file = SnapshotFile {
        format: FORMAT_NAME.to_string(),
        version: FORMAT_VERSION,
        project: project.clone(),
        params: params.clone(),
    };
    serde_json::to_string_pretty(&file).expect("ParameterSet serialization should never fail")
}

/// Parse and validate a snapshot file.
pub fn load_snapshot(data: &str) -> Result<SnapshotFile, LoadError> {
    let file: SnapshotFile =
        serde_json::from_str(data).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if file.format != FORMAT_NAME {
        return Err(LoadError::UnknownFormat(file.format));
    }
    if file.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: file.version,
            supported_version: FORMAT_VERSION,
        });
    }
    Ok(file)
}

/// Errors during snapshot loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse file: {0}")]
    ParseError(String),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("file version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },
}
