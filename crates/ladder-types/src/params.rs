use serde::{Deserialize, Serialize};

/// Physical configuration of a wall-mounted vertical ladder.
///
/// All lengths are meters. A value is immutable once handed to the resolver;
/// edits produce a fresh snapshot (see `config-shell`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Overall useful climbing height.
    pub total_height: f64,
    /// Clear width between the rails.
    pub width_inner: f64,
    /// Vertical rung spacing.
    pub pitch: f64,
    /// Rail stock cross-section: width (across the climb).
    pub rail_width: f64,
    /// Rail stock cross-section: depth (toward the wall).
    pub rail_depth: f64,
    /// Rung bar cross-section.
    pub rung_size: f64,
    /// Standoff from the wall to the back of the rails.
    pub wall_distance: f64,
    /// Heights where wall brackets are intended. Unsorted, duplicates
    /// allowed; a height beyond the built structure still counts in the BOM
    /// but places no geometry.
    pub supports: Vec<f64>,

    /// Rails continue past `total_height` as a grab extension.
    pub has_exit: bool,
    /// Length of the grab extension.
    pub exit_extension: f64,
    /// Angled hand supports on the exit extension.
    pub has_handrails: bool,

    /// Split the ladder into two sections joined by a platform.
    pub has_landing: bool,
    /// Absolute height of the split.
    pub landing_height: f64,
    /// Lateral offset of the top section; any sign.
    pub offset: f64,
    /// Depth of the intermediate platform.
    pub platform_depth: f64,

    /// Disembarkation deck with guardrail at the top.
    pub has_top_landing: bool,
    /// Depth of the disembarkation deck.
    pub top_landing_depth: f64,

    /// Safety cage of hoops and stringers around the climb.
    pub has_cage: bool,
    /// Height above the ground section's own base where the cage begins.
    pub cage_start_height: f64,
}

impl Default for ParameterSet {
    /// The catalogue configuration: a 5 m ladder with exit extension,
    /// cage from 2 m, and a 1 m disembarkation deck.
    fn default() -> Self {
        Self {
            total_height: 5.0,
            width_inner: 0.588,
            pitch: 0.300,
            rail_width: 0.024,
            rail_depth: 0.065,
            rung_size: 0.0295,
            wall_distance: 0.200,
            supports: vec![1.5, 4.0],
            has_exit: true,
            exit_extension: 1.150,
            has_handrails: false,
            has_landing: false,
            landing_height: 2.5,
            offset: 0.8,
            platform_depth: 0.8,
            has_top_landing: true,
            top_landing_depth: 1.0,
            has_cage: true,
            cage_start_height: 2.0,
        }
    }
}
