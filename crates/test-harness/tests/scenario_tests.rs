//! End-to-end scenarios: parameter set through resolver into both
//! projections.

use geometry_resolver::resolve;
use test_harness::{assert_close, fixtures};

#[test]
fn scenario_a_straight_ladder() {
    let model = resolve(&fixtures::scenario_a()).unwrap();

    assert_eq!(model.sections.len(), 1);
    let section = &model.sections[0];
    assert_close(section.rail_length, 6.15);
    assert_eq!(section.rungs.len(), 17);
    assert_close(model.outer_width, 0.588 + 2.0 * 0.024);
}

#[test]
fn scenario_b_split_with_platform() {
    let model = resolve(&fixtures::scenario_b()).unwrap();

    assert_eq!(model.sections.len(), 2);
    let bottom = &model.sections[0];
    let top = &model.sections[1];

    assert_close(bottom.start_height, 0.0);
    assert_close(bottom.nominal_span, 2.5);
    assert_close(bottom.lateral_offset, 0.0);
    assert_close(top.start_height, 2.5);
    assert_close(top.nominal_span, 2.5);
    assert_close(top.lateral_offset, 0.8);

    // The platform bridges the two sections.
    let platform = model.platform.expect("split produces a platform");
    assert_close(platform.height, 2.5);
    assert_close(platform.lateral_offset, 0.8);

    let scene = scene_projector::project(&model);
    assert!(scene.nodes.iter().any(|n| n.label == "platform"));
}

#[test]
fn scenario_c_bracket_split() {
    let model = resolve(&fixtures::scenario_c()).unwrap();

    assert_eq!(model.sections[0].brackets, vec![1.5]);
    assert_eq!(model.sections[1].brackets, vec![1.5]);
    assert_eq!(model.bom.bracket_count, 4);
}

#[test]
fn fully_featured_resolves_and_projects() {
    let model = resolve(&fixtures::fully_featured()).unwrap();

    assert!(model.platform.is_some());
    assert!(model.top_landing.is_some());
    assert!(model.exit.is_some());
    assert!(model.sections.iter().any(|s| s.cage.is_some()));

    // Both projections succeed on the full feature set.
    let drawing = drawing_projector::project(&model);
    assert_eq!(drawing.bom_panel.lines.len(), 6);
    let scene = scene_projector::project(&model);
    assert!(!scene.nodes.is_empty());
}
