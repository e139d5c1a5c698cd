use chrono::Utc;
use tracing::debug;

use geometry_resolver::{resolve, InvalidParameter};
use ladder_types::{GeometryModel, ParameterSet};

use crate::messages::{FeatureToggle, NumericField};
use crate::snapshot::ProjectMetadata;

/// The shell's working state: the last valid parameter snapshot and the
/// geometry resolved from it.
///
/// A snapshot is never mutated in place; edits go through [`ShellState`]
/// methods which clone, mutate the clone, and re-resolve. The model is
/// recomputed in full on every accepted edit.
pub struct ShellState {
    pub project: ProjectMetadata,
    params: ParameterSet,
    model: GeometryModel,
}

impl ShellState {
    /// Start from the catalogue configuration.
    pub fn new() -> Self {
        Self::with_params("Untitled", ParameterSet::default())
            .expect("catalogue defaults always resolve")
    }

    pub fn with_params(
        name: impl Into<String>,
        params: ParameterSet,
    ) -> Result<Self, InvalidParameter> {
        let model = resolve(&params)?;
        Ok(Self {
            project: ProjectMetadata::new(name),
            params,
            model,
        })
    }

    /// The active (last valid) parameter snapshot.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// The geometry resolved from the active snapshot.
    pub fn model(&self) -> &GeometryModel {
        &self.model
    }

    pub fn set_number(&mut self, field: NumericField, value: f64) -> Result<(), ShellError> {
        let mut candidate = self.params.clone();
        let slot = match field {
            NumericField::TotalHeight => &mut candidate.total_height,
            NumericField::WidthInner => &mut candidate.width_inner,
            NumericField::Pitch => &mut candidate.pitch,
            NumericField::RailWidth => &mut candidate.rail_width,
            NumericField::RailDepth => &mut candidate.rail_depth,
            NumericField::RungSize => &mut candidate.rung_size,
            NumericField::WallDistance => &mut candidate.wall_distance,
            NumericField::ExitExtension => &mut candidate.exit_extension,
            NumericField::LandingHeight => &mut candidate.landing_height,
            NumericField::Offset => &mut candidate.offset,
            NumericField::PlatformDepth => &mut candidate.platform_depth,
            NumericField::TopLandingDepth => &mut candidate.top_landing_depth,
            NumericField::CageStartHeight => &mut candidate.cage_start_height,
        };
        *slot = value;
        self.commit(candidate)
    }

    pub fn set_toggle(&mut self, toggle: FeatureToggle, enabled: bool) -> Result<(), ShellError> {
        let mut candidate = self.params.clone();
        match toggle {
            FeatureToggle::Exit => candidate.has_exit = enabled,
            FeatureToggle::Handrails => candidate.has_handrails = enabled,
            FeatureToggle::Landing => candidate.has_landing = enabled,
            FeatureToggle::TopLanding => candidate.has_top_landing = enabled,
            FeatureToggle::Cage => candidate.has_cage = enabled,
        }
        self.commit(candidate)
    }

    pub fn add_support(&mut self, height: f64) -> Result<(), ShellError> {
        let mut candidate = self.params.clone();
        candidate.supports.push(height);
        self.commit(candidate)
    }

    pub fn update_support(&mut self, index: usize, height: f64) -> Result<(), ShellError> {
        let mut candidate = self.params.clone();
        let count = candidate.supports.len();
        let slot = candidate
            .supports
            .get_mut(index)
            .ok_or(ShellError::SupportIndexOutOfRange { index, count })?;
        *slot = height;
        self.commit(candidate)
    }

    pub fn remove_support(&mut self, index: usize) -> Result<(), ShellError> {
        let mut candidate = self.params.clone();
        if index >= candidate.supports.len() {
            return Err(ShellError::SupportIndexOutOfRange {
                index,
                count: candidate.supports.len(),
            });
        }
        candidate.supports.remove(index);
        self.commit(candidate)
    }

    /// Replace the whole snapshot (snapshot load).
    pub fn replace_params(&mut self, params: ParameterSet) -> Result<(), ShellError> {
        self.commit(params)
    }

    /// Resolve the candidate; adopt it only on success. A rejected edit
    /// leaves both snapshot and model untouched.
    fn commit(&mut self, candidate: ParameterSet) -> Result<(), ShellError> {
        let model = resolve(&candidate)?;
        self.params = candidate;
        self.model = model;
        self.project.modified = Utc::now();
        debug!(sections = self.model.sections.len(), "snapshot replaced");
        Ok(())
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from the shell layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ShellError {
    #[error("edit rejected: {0}")]
    InvalidEdit(#[from] InvalidParameter),

    #[error("support index {index} out of range (have {count})")]
    SupportIndexOutOfRange { index: usize, count: usize },

    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    #[error("load error: {0}")]
    Load(#[from] crate::snapshot::LoadError),
}
