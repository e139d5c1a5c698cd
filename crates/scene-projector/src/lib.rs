//! 3D structural projector.
//!
//! Projects a [`GeometryModel`](ladder_types::GeometryModel) into a
//! [`SceneGraph`] of labeled solid primitives. Every placement is a direct
//! consumer of the model's sections, rungs, brackets, and cage extents;
//! no geometry is derived here beyond fixed assembly offsets.

pub mod annotations;
pub mod cage;
pub mod decks;
pub mod graph;
pub mod parts;

use tracing::debug;

use ladder_types::{GeometryModel, Section};

pub use graph::*;

/// Guardrail height shared by the platform and deck assemblies, meters.
pub const GUARD_HEIGHT: f64 = 1.1;

/// Project the geometry model into a scene graph.
pub fn project(model: &GeometryModel) -> SceneGraph {
    let mut nodes: Vec<SceneNode> = model
        .sections
        .iter()
        .enumerate()
        .map(|(i, s)| section_node(i, s, model))
        .collect();

    if let Some(platform) = &model.platform {
        nodes.push(decks::platform_group(platform, model));
    }
    if let Some(top) = &model.top_landing {
        nodes.push(decks::top_landing_group(top, model));
    }

    let graph = SceneGraph {
        nodes,
        annotations: annotations::canonical(model),
    };
    debug!(
        nodes = graph.nodes.len(),
        solids = graph.nodes.iter().map(SceneNode::solid_count).sum::<usize>(),
        "projected scene graph"
    );
    graph
}

/// One ladder section: rails, rungs, brackets, cage, exit handrails.
fn section_node(index: usize, section: &Section, model: &GeometryModel) -> SceneNode {
    let mut node = SceneNode::group(
        format!("section {index}"),
        [section.lateral_offset, section.start_height, 0.0],
    );

    for side in [-1.0, 1.0] {
        node.children.push(parts::rail(side, section, model));
    }
    for &rung in &section.rungs {
        node.children.push(parts::rung(rung, model));
    }
    for &bracket in &section.brackets {
        for side in [-1.0, 1.0] {
            node.children.push(parts::wall_bracket(side, bracket, model));
        }
    }
    if let Some(extent) = &section.cage {
        node.children.push(cage::cage_group(extent, model));
    }
    let wants_handrails = model.exit.is_some_and(|e| e.has_handrails);
    if section.is_topmost && wants_handrails {
        for side in [-1.0, 1.0] {
            node.children
                .push(parts::exit_handrail(side, section.rail_length, model));
        }
    }

    node
}
