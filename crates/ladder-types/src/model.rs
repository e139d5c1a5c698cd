use serde::{Deserialize, Serialize};

/// Derived geometry of a configured ladder.
///
/// The resolver's sole output and the single source of truth for both
/// projectors. Recomputed in full on every parameter change, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryModel {
    /// Useful climbing height.
    pub total_height: f64,
    /// Clear width between rails.
    pub width_inner: f64,
    /// Rail cross-section width.
    pub rail_width: f64,
    /// Rail cross-section depth.
    pub rail_depth: f64,
    /// Rung bar cross-section.
    pub rung_size: f64,
    /// Vertical rung spacing.
    pub pitch: f64,
    /// Wall standoff.
    pub wall_distance: f64,
    /// `width_inner + 2 * rail_width`. Identical across every section and
    /// both projectors.
    pub outer_width: f64,
    /// Total horizontal footprint: `outer_width + |offset| + platform_depth`
    /// when a landing is present, else `outer_width`.
    pub horizontal_extent: f64,

    /// Ordered bottom-up. One section without a landing, two with.
    pub sections: Vec<Section>,
    /// Intermediate platform bridging a split.
    pub platform: Option<PlatformSpec>,
    /// Disembarkation deck capping the top.
    pub top_landing: Option<TopLandingSpec>,
    /// Grab extension above the useful height.
    pub exit: Option<ExitSpec>,

    pub bom: BillOfMaterials,
}

impl GeometryModel {
    /// Highest point any rail reaches, in meters. Drives canvas sizing in
    /// the drawing and the wall line in the profile view.
    pub fn max_rail_extent(&self) -> f64 {
        self.sections
            .iter()
            .map(|s| s.start_height + s.rail_length)
            .fold(0.0, f64::max)
    }
}

/// A contiguous run of rails and rungs sharing one lateral offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Absolute height of the section base.
    pub start_height: f64,
    /// Rung-bearing span. Extensions carry no rungs.
    pub nominal_span: f64,
    /// Physical rail length: nominal span plus exit extension (topmost) or
    /// the landing-rail stub (ground section inside a split).
    pub rail_length: f64,
    /// Lateral shift from the ground section's centerline.
    pub lateral_offset: f64,
    pub is_ground: bool,
    pub is_topmost: bool,
    /// Rung heights relative to `start_height`; strictly increasing,
    /// bounded by `nominal_span`.
    pub rungs: Vec<f64>,
    /// Placed bracket heights relative to `start_height`. Each entry stands
    /// for a left/right pair.
    pub brackets: Vec<f64>,
    /// Cage coverage in section-local heights, if any.
    pub cage: Option<CageExtent>,
}

/// Cage coverage over a section, in heights relative to the section base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CageExtent {
    pub start: f64,
    pub end: f64,
}

/// Intermediate platform joining the two sections of a split ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    /// Absolute height of the platform floor.
    pub height: f64,
    /// Lateral offset of the top section the platform bridges to.
    pub lateral_offset: f64,
    pub depth: f64,
}

/// Disembarkation deck at the top of the climb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopLandingSpec {
    /// Absolute height of the deck floor (= useful height).
    pub height: f64,
    /// Lateral position: follows the top section's offset when split.
    pub lateral_offset: f64,
    pub depth: f64,
}

/// Grab extension above the useful climbing height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExitSpec {
    pub extension: f64,
    pub has_handrails: bool,
}

/// Aggregate stock and fitting quantities.
///
/// Profile length counts rails cut as separate physical lengths per section
/// (left + right), extensions included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    /// Total rail stock in meters.
    pub profile_length_m: f64,
    pub rung_count: usize,
    /// `2 * supports.len()`: nominal fittings, whether or not each height
    /// landed on the built structure.
    pub bracket_count: usize,
    /// Platform principal dimension when a landing is present.
    pub platform_depth: Option<f64>,
    /// Deck principal dimension when a top landing is present.
    pub top_landing_depth: Option<f64>,
    pub has_cage: bool,
}
