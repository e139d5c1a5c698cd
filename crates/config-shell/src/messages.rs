use serde::{Deserialize, Serialize};

use ladder_types::GeometryModel;

/// Messages from the control panel to the shell. Serialized as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToShell {
    /// Point-edit a numeric field.
    EditNumber { field: NumericField, value: f64 },
    /// Enable/disable an optional feature.
    EditToggle { toggle: FeatureToggle, enabled: bool },

    // -- Support list --
    AddSupport { height: f64 },
    UpdateSupport { index: usize, height: f64 },
    RemoveSupport { index: usize },

    // -- Export triggers --
    /// Project the current model into a technical drawing document.
    ExportDrawing,
    /// Project the current model into a scene graph.
    ExportScene,

    // -- Persistence --
    SaveSnapshot,
    LoadSnapshot { data: String },
}

/// Numeric fields of the parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NumericField {
    TotalHeight,
    WidthInner,
    Pitch,
    RailWidth,
    RailDepth,
    RungSize,
    WallDistance,
    ExitExtension,
    LandingHeight,
    Offset,
    PlatformDepth,
    TopLandingDepth,
    CageStartHeight,
}

/// Optional features of the parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeatureToggle {
    Exit,
    Handrails,
    Landing,
    TopLanding,
    Cage,
}

/// Responses from the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShellToUi {
    /// An edit was accepted; the geometry was re-resolved in full.
    ModelUpdated { model: GeometryModel },
    /// An edit was rejected; the last valid snapshot stays active.
    EditRejected { message: String },
    /// Serialized `TechnicalDrawing` for a vector-image emitter.
    DrawingDocument { json: String },
    /// Serialized `SceneGraph` for a 3D renderer.
    SceneDocument { json: String },
    /// Serialized snapshot file for persistence.
    SnapshotSaved { data: String },
    Error { message: String },
}
