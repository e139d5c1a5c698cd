//! The intermediate platform and the top disembarkation deck.

use ladder_types::{GeometryModel, PlatformSpec, TopLandingSpec};

use crate::graph::{MaterialHint, SceneNode, SolidPrimitive};
use crate::GUARD_HEIGHT;

const FLOOR_THICKNESS: f64 = 0.05;
const TOE_BOARD_HEIGHT: f64 = 0.2;

/// Intermediate platform bridging the split.
///
/// Spans exactly from the ground section's outer edge to the offset
/// section's outer edge, on whichever side the offset points.
pub fn platform_group(platform: &PlatformSpec, model: &GeometryModel) -> SceneNode {
    let dir = if platform.lateral_offset < 0.0 { -1.0 } else { 1.0 };
    let near_x = dir * model.outer_width / 2.0;
    let far_x = platform.lateral_offset + dir * model.outer_width / 2.0;
    let length = (far_x - near_x).abs();
    let center_x = (near_x + far_x) / 2.0;

    let depth = platform.depth;
    let back_z = -model.rail_depth / 2.0;
    let center_z = back_z + depth / 2.0;

    let mut node = SceneNode::group("platform", [0.0, platform.height, 0.0]);

    node.children.push(SceneNode::solid(
        "platform floor",
        [center_x, -FLOOR_THICKNESS / 2.0, center_z],
        SolidPrimitive::Cuboid {
            size: [length, FLOOR_THICKNESS, depth],
        },
        MaterialHint::PlatformFloor,
    ));

    // Toe boards along both depth edges and the far end.
    for z in [back_z + depth - 0.01, back_z + 0.01] {
        node.children.push(SceneNode::solid(
            "toe board",
            [center_x, TOE_BOARD_HEIGHT / 2.0, z],
            SolidPrimitive::Cuboid {
                size: [length, TOE_BOARD_HEIGHT, 0.02],
            },
            MaterialHint::ToeBoard,
        ));
    }
    node.children.push(SceneNode::solid(
        "toe board end",
        [far_x - dir * 0.01, TOE_BOARD_HEIGHT / 2.0, center_z],
        SolidPrimitive::Cuboid {
            size: [0.02, TOE_BOARD_HEIGHT, depth],
        },
        MaterialHint::ToeBoard,
    ));

    // Guard assemblies along both depth edges, plus rails across the far end.
    for z in [back_z + depth - 0.02, back_z + 0.02] {
        node.children.push(guard_run([center_x, 0.0, z], length));
    }
    node.children
        .push(end_guard([far_x - dir * 0.02, 0.0, center_z], depth));

    node
}

/// Posts at both ends, a top rail, and a mid rail along the x axis.
fn guard_run(translation: [f64; 3], length: f64) -> SceneNode {
    let mut node = SceneNode::group("platform guard", translation);
    for end in [-1.0, 1.0] {
        node.children.push(SceneNode::solid(
            "guard post",
            [end * (length / 2.0 - 0.02), GUARD_HEIGHT / 2.0, 0.0],
            SolidPrimitive::Cuboid {
                size: [0.04, GUARD_HEIGHT, 0.04],
            },
            MaterialHint::GuardRail,
        ));
    }
    node.children.push(SceneNode::solid(
        "guard top rail",
        [0.0, GUARD_HEIGHT, 0.0],
        SolidPrimitive::Cuboid {
            size: [length, 0.04, 0.04],
        },
        MaterialHint::GuardRail,
    ));
    node.children.push(SceneNode::solid(
        "guard mid rail",
        [0.0, GUARD_HEIGHT / 2.0, 0.0],
        SolidPrimitive::Cuboid {
            size: [length, 0.02, 0.02],
        },
        MaterialHint::GuardRail,
    ));
    node
}

/// Top and mid rails across the platform's open far end.
fn end_guard(translation: [f64; 3], depth: f64) -> SceneNode {
    let mut node = SceneNode::group("platform end guard", translation);
    node.children.push(SceneNode::solid(
        "guard top rail",
        [0.0, GUARD_HEIGHT, 0.0],
        SolidPrimitive::Cuboid {
            size: [0.04, 0.04, depth],
        },
        MaterialHint::GuardRail,
    ));
    node.children.push(SceneNode::solid(
        "guard mid rail",
        [0.0, GUARD_HEIGHT / 2.0, 0.0],
        SolidPrimitive::Cuboid {
            size: [0.02, 0.02, depth],
        },
        MaterialHint::GuardRail,
    ));
    node
}

/// Disembarkation deck with mesh side guards and crossed braces.
pub fn top_landing_group(top: &TopLandingSpec, model: &GeometryModel) -> SceneNode {
    let depth = top.depth;
    let mut node = SceneNode::group("top landing", [top.lateral_offset, top.height, 0.0]);

    node.children.push(SceneNode::solid(
        "deck floor",
        [0.0, 0.0, -depth / 2.0],
        SolidPrimitive::Cuboid {
            size: [model.width_inner + 0.1, FLOOR_THICKNESS, depth],
        },
        MaterialHint::PlatformFloor,
    ));

    let diagonal = (depth * depth + GUARD_HEIGHT * GUARD_HEIGHT).sqrt();
    let angle = (GUARD_HEIGHT / depth).atan();

    for side in [-1.0, 1.0] {
        let mut guard = SceneNode::group(
            if side < 0.0 { "deck guard left" } else { "deck guard right" },
            [side * (model.width_inner / 2.0 + 0.05), 0.0, -depth / 2.0],
        );
        guard.children.push(SceneNode::solid(
            "guard mesh",
            [0.0, GUARD_HEIGHT / 2.0, 0.0],
            SolidPrimitive::Cuboid {
                size: [0.04, GUARD_HEIGHT, depth],
            },
            MaterialHint::GuardMesh,
        ));
        guard.children.push(SceneNode::solid(
            "guard top rail",
            [0.0, GUARD_HEIGHT, 0.0],
            SolidPrimitive::Cuboid {
                size: [0.04, 0.04, depth],
            },
            MaterialHint::GuardRail,
        ));
        for sign in [1.0, -1.0] {
            guard.children.push(
                SceneNode::solid(
                    "guard brace",
                    [0.0, GUARD_HEIGHT / 2.0, 0.0],
                    SolidPrimitive::Cuboid {
                        size: [0.02, 0.02, diagonal],
                    },
                    MaterialHint::GuardRail,
                )
                .rotated([sign * angle, 0.0, 0.0]),
            );
        }
        node.children.push(guard);
    }

    node
}
