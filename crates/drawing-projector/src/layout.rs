/// Fixed canvas layout convention. One drawing unit = one millimeter.
pub const CANVAS_WIDTH: f64 = 3500.0;

/// Space below the ground baseline (dimension lines, title margins).
pub const GROUND_CLEARANCE: f64 = 1000.0;

/// Space above the tallest rail (title block, view headers).
pub const HEADROOM: f64 = 1000.0;

/// Elevation view horizontal origin.
pub const ELEVATION_ORIGIN_X: f64 = 400.0;

/// Profile view horizontal origin before the signed-offset shift.
pub const PROFILE_ORIGIN_X: f64 = 1500.0;

/// Guardrail height used by platform and deck outlines, mm.
pub const GUARD_RAIL: f64 = 1100.0;

/// Meters to drawing units.
pub fn mm(meters: f64) -> f64 {
    meters * 1000.0
}

/// Vertical mapping for one drawing: physical heights (mm above ground) to
/// canvas y, with the axis flipped so up is decreasing y.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub canvas_height: f64,
}

impl Layout {
    pub fn new(max_rail_extent_mm: f64) -> Self {
        Self {
            canvas_height: max_rail_extent_mm + GROUND_CLEARANCE + HEADROOM,
        }
    }

    /// Canvas y for a physical height in mm.
    pub fn y(&self, height_mm: f64) -> f64 {
        (self.canvas_height - GROUND_CLEARANCE) - height_mm
    }
}
