//! Cross-projector consistency: both projections must agree with the model
//! (and therefore with each other) on every shared quantity.

use drawing_projector::TechnicalDrawing;
use geometry_resolver::resolve;
use ladder_types::{GeometryModel, ParameterSet};
use scene_projector::{SceneGraph, SceneNode, SolidPrimitive};
use test_harness::{assert_close, assert_close_eps, fixtures};

fn fixture_set() -> Vec<ParameterSet> {
    vec![
        ParameterSet::default(),
        fixtures::scenario_a(),
        fixtures::scenario_b(),
        fixtures::scenario_c(),
        fixtures::fully_featured(),
    ]
}

fn rail_solids<'a>(node: &'a SceneNode, out: &mut Vec<&'a SceneNode>) {
    if matches!(node.label.as_str(), "rail left" | "rail right") && node.primitive.is_some() {
        out.push(node);
    }
    for child in &node.children {
        rail_solids(child, out);
    }
}

/// Outer width as the drawing states it: the WIDTH call-out span, mm.
fn drawing_outer_width_mm(drawing: &TechnicalDrawing) -> f64 {
    let dim = drawing
        .elevation
        .dimensions
        .iter()
        .find(|d| d.label.starts_with("WIDTH"))
        .expect("elevation carries a width call-out");
    dim.to - dim.from
}

/// Outer width as the scene realizes it: across the outer rail faces.
fn scene_outer_width(scene: &SceneGraph) -> f64 {
    let mut rails = Vec::new();
    for node in &scene.nodes {
        rail_solids(node, &mut rails);
    }
    let rail = rails.first().expect("scene contains rails");
    let Some(SolidPrimitive::Cuboid { size }) = rail.primitive else {
        panic!("rails are cuboids");
    };
    2.0 * (rail.translation[0].abs() + size[0] / 2.0)
}

/// Total rail stock as the scene realizes it: sum of rail solid heights.
fn scene_profile_length(scene: &SceneGraph) -> f64 {
    let mut rails = Vec::new();
    for node in &scene.nodes {
        rail_solids(node, &mut rails);
    }
    rails
        .iter()
        .map(|r| match r.primitive {
            Some(SolidPrimitive::Cuboid { size }) => size[1],
            _ => 0.0,
        })
        .sum()
}

fn count_scene_rungs(scene: &SceneGraph) -> usize {
    fn walk(node: &SceneNode, count: &mut usize) {
        if node.label == "rung" {
            *count += 1;
        }
        for child in &node.children {
            walk(child, count);
        }
    }
    let mut count = 0;
    for node in &scene.nodes {
        walk(node, &mut count);
    }
    count
}

fn count_drawing_rungs(drawing: &TechnicalDrawing) -> usize {
    drawing
        .elevation
        .primitives
        .iter()
        .filter(|p| {
            matches!(
                p,
                drawing_projector::Primitive::Line {
                    class: drawing_projector::LineClass::Rung,
                    ..
                }
            )
        })
        .count()
}

// ── Invariants over every fixture ──────────────────────────────────────────

#[test]
fn outer_width_identical_in_both_projections() {
    for params in fixture_set() {
        let model = resolve(&params).unwrap();
        let drawing = drawing_projector::project(&model);
        let scene = scene_projector::project(&model);

        let expected = params.width_inner + 2.0 * params.rail_width;
        assert_close(model.outer_width, expected);
        assert_close_eps(drawing_outer_width_mm(&drawing), expected * 1000.0, 1e-6);
        assert_close(scene_outer_width(&scene), expected);
    }
}

#[test]
fn rung_counts_agree_everywhere() {
    for params in fixture_set() {
        let model = resolve(&params).unwrap();
        let drawing = drawing_projector::project(&model);
        let scene = scene_projector::project(&model);

        assert_eq!(count_drawing_rungs(&drawing), model.bom.rung_count);
        assert_eq!(count_scene_rungs(&scene), model.bom.rung_count);
    }
}

#[test]
fn scene_rail_stock_matches_bom() {
    for params in fixture_set() {
        let model = resolve(&params).unwrap();
        let scene = scene_projector::project(&model);
        assert_close(scene_profile_length(&scene), model.bom.profile_length_m);
    }
}

#[test]
fn placed_brackets_never_exceed_declared_count() {
    for params in fixture_set() {
        let model = resolve(&params).unwrap();
        let placed: usize = model.sections.iter().map(|s| 2 * s.brackets.len()).sum();
        assert!(placed <= model.bom.bracket_count);
    }
}

// ── Determinism across the full pipeline ───────────────────────────────────

#[test]
fn projections_are_deterministic_per_model() {
    for params in fixture_set() {
        let model: GeometryModel = resolve(&params).unwrap();

        let d1 = serde_json::to_vec(&drawing_projector::project(&model)).unwrap();
        let d2 = serde_json::to_vec(&drawing_projector::project(&model)).unwrap();
        assert_eq!(d1, d2);

        let s1 = serde_json::to_vec(&scene_projector::project(&model)).unwrap();
        let s2 = serde_json::to_vec(&scene_projector::project(&model)).unwrap();
        assert_eq!(s1, s2);
    }
}

#[test]
fn shell_exports_match_direct_projection() {
    let params = fixtures::scenario_c();
    let mut state = config_shell::ShellState::with_params("fixture", params.clone()).unwrap();

    let config_shell::ShellToUi::DrawingDocument { json } =
        config_shell::dispatch(&mut state, config_shell::UiToShell::ExportDrawing)
    else {
        panic!("expected drawing document");
    };
    let exported: TechnicalDrawing = serde_json::from_str(&json).unwrap();

    let model = resolve(&params).unwrap();
    let direct = drawing_projector::project(&model);
    assert_eq!(
        serde_json::to_string(&exported).unwrap(),
        serde_json::to_string(&direct).unwrap()
    );
}
