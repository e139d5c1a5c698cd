//! Safety cage: a stack of partial hoops plus vertical stringer straps.

use std::f64::consts::PI;

use ladder_types::{CageExtent, GeometryModel};

use crate::graph::{MaterialHint, SceneNode, SolidPrimitive};

/// Vertical step between hoops.
pub const HOOP_STEP: f64 = 0.9;

/// Radial clearance of the hoops beyond the rail outer faces.
pub const HOOP_CLEARANCE: f64 = 0.05;

/// Arc sweep of each hoop: open toward the wall, never a full circle.
pub const HOOP_SWEEP: f64 = 1.3 * PI;

/// Forward offset of the hoop centers from the rail plane.
const HOOP_Z: f64 = 0.35;

/// Stringer strap fan: placement angles around the hoop arc.
const STRINGER_ANGLES: [f64; 5] = [-0.6, -0.3, 0.0, 0.3, 0.6];
const STRINGER_RADIUS: f64 = 0.4;

/// Cage for one section, positioned in section-local coordinates.
pub fn cage_group(extent: &CageExtent, model: &GeometryModel) -> SceneNode {
    let mut node = SceneNode::group("cage", [0.0; 3]);

    let mut y = extent.start;
    while y < extent.end {
        node.children.push(
            SceneNode::solid(
                "cage hoop",
                [0.0, y, HOOP_Z],
                SolidPrimitive::Hoop {
                    radius: model.outer_width / 2.0 + HOOP_CLEARANCE,
                    tube_radius: 0.015,
                    sweep: HOOP_SWEEP,
                },
                MaterialHint::CageHoop,
            )
            .rotated([std::f64::consts::FRAC_PI_2, 0.0, 0.0]),
        );
        y += HOOP_STEP;
    }

    let span = extent.end - extent.start;
    let mid = (extent.start + extent.end) / 2.0;
    for angle in STRINGER_ANGLES {
        node.children.push(SceneNode::solid(
            "cage stringer",
            [
                angle.sin() * STRINGER_RADIUS,
                mid,
                angle.cos() * STRINGER_RADIUS + HOOP_Z,
            ],
            SolidPrimitive::Cuboid {
                size: [0.02, span, 0.005],
            },
            MaterialHint::CageStringer,
        ));
    }

    node
}
