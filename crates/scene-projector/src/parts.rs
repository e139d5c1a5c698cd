//! Rails, rungs, wall brackets, and exit handrails.

use ladder_types::{GeometryModel, Section};

use crate::graph::{MaterialHint, SceneNode, SolidPrimitive};

pub fn rail(side: f64, section: &Section, model: &GeometryModel) -> SceneNode {
    let x = side * (model.width_inner / 2.0 + model.rail_width / 2.0);
    SceneNode::solid(
        if side < 0.0 { "rail left" } else { "rail right" },
        [x, section.rail_length / 2.0, 0.0],
        SolidPrimitive::Cuboid {
            size: [model.rail_width, section.rail_length, model.rail_depth],
        },
        MaterialHint::RailSteel,
    )
}

pub fn rung(height: f64, model: &GeometryModel) -> SceneNode {
    SceneNode::solid(
        "rung",
        [0.0, height, 0.0],
        SolidPrimitive::Cuboid {
            size: [model.width_inner, model.rung_size, model.rung_size],
        },
        MaterialHint::RungAlloy,
    )
}

/// Three-part bracket assembly: arm to the wall, wall plate, rail clamp.
pub fn wall_bracket(side: f64, height: f64, model: &GeometryModel) -> SceneNode {
    let wall = model.wall_distance;
    let x = side * (model.width_inner / 2.0 + model.rail_width / 2.0);
    let mut node = SceneNode::group(
        if side < 0.0 { "bracket left" } else { "bracket right" },
        [x, height, -wall / 2.0],
    );
    node.children.push(SceneNode::solid(
        "bracket arm",
        [0.0, 0.0, 0.0],
        SolidPrimitive::Cuboid {
            size: [0.04, 0.04, wall],
        },
        MaterialHint::BracketSteel,
    ));
    node.children.push(SceneNode::solid(
        "wall plate",
        [0.0, 0.0, -wall / 2.0 + 0.005],
        SolidPrimitive::Cuboid {
            size: [0.1, 0.15, 0.01],
        },
        MaterialHint::WallPlate,
    ));
    node.children.push(SceneNode::solid(
        "rail clamp",
        [0.0, 0.0, wall / 2.0 - 0.01],
        SolidPrimitive::Cuboid {
            size: [0.05, 0.06, 0.05],
        },
        MaterialHint::BracketSteel,
    ));
    node
}

/// Angled grab post above the exit extension.
pub fn exit_handrail(side: f64, rail_length: f64, model: &GeometryModel) -> SceneNode {
    let mut node = SceneNode::group(
        if side < 0.0 { "handrail left" } else { "handrail right" },
        [side * (model.width_inner / 2.0 + 0.02), rail_length, 0.0],
    );
    node.children.push(SceneNode::solid(
        "handrail post",
        [0.0, 0.5, 0.0],
        SolidPrimitive::Cuboid {
            size: [0.04, 1.0, 0.04],
        },
        MaterialHint::Handrail,
    ));
    node.children.push(
        SceneNode::solid(
            "handrail bend",
            [0.0, 1.0, -0.2],
            SolidPrimitive::Cuboid {
                size: [0.04, 0.6, 0.04],
            },
            MaterialHint::Handrail,
        )
        .rotated([std::f64::consts::FRAC_PI_4, 0.0, 0.0]),
    );
    node
}
