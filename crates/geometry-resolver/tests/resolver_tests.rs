use geometry_resolver::{resolve, InvalidParameter, LANDING_STUB};
use ladder_types::ParameterSet;

/// Scenario A base: 5 m ladder, 0.588 m clear width, 0.3 m pitch, exit
/// extension 1.15 m, no landing.
fn straight_ladder() -> ParameterSet {
    ParameterSet {
        total_height: 5.0,
        width_inner: 0.588,
        pitch: 0.300,
        has_exit: true,
        exit_extension: 1.15,
        has_landing: false,
        supports: Vec::new(),
        ..ParameterSet::default()
    }
}

/// Scenario B: scenario A split at 2.5 m with a 0.8 m lateral offset.
fn split_ladder() -> ParameterSet {
    ParameterSet {
        has_landing: true,
        landing_height: 2.5,
        offset: 0.8,
        ..straight_ladder()
    }
}

// ── Validation ─────────────────────────────────────────────────────────────

#[test]
fn rejects_non_positive_height() {
    let params = ParameterSet {
        total_height: 0.0,
        ..ParameterSet::default()
    };
    assert!(matches!(
        resolve(&params),
        Err(InvalidParameter::NonPositiveDimension { name: "total_height", .. })
    ));
}

#[test]
fn rejects_non_positive_pitch() {
    let params = ParameterSet {
        pitch: -0.1,
        ..ParameterSet::default()
    };
    assert!(matches!(
        resolve(&params),
        Err(InvalidParameter::NonPositiveDimension { name: "pitch", .. })
    ));
}

#[test]
fn rejects_landing_above_total_height() {
    let params = ParameterSet {
        has_landing: true,
        landing_height: 6.0,
        ..straight_ladder()
    };
    assert!(matches!(
        resolve(&params),
        Err(InvalidParameter::LandingHeightOutOfRange { .. })
    ));
}

#[test]
fn rejects_zero_landing_height() {
    let params = ParameterSet {
        has_landing: true,
        landing_height: 0.0,
        ..straight_ladder()
    };
    assert!(resolve(&params).is_err());
}

#[test]
fn landing_height_equal_to_total_is_accepted() {
    let params = ParameterSet {
        has_landing: true,
        landing_height: 5.0,
        ..straight_ladder()
    };
    let model = resolve(&params).unwrap();
    assert_eq!(model.sections.len(), 2);
    assert_eq!(model.sections[1].nominal_span, 0.0);
    assert!(model.sections[1].rungs.is_empty());
}

#[test]
fn landing_toggle_off_skips_landing_validation() {
    // A stale landing_height outside range must not reject the edit while
    // the feature is disabled.
    let params = ParameterSet {
        has_landing: false,
        landing_height: -3.0,
        ..ParameterSet::default()
    };
    assert!(resolve(&params).is_ok());
}

// ── Sections ───────────────────────────────────────────────────────────────

#[test]
fn scenario_a_single_section() {
    let model = resolve(&straight_ladder()).unwrap();

    assert_eq!(model.sections.len(), 1);
    let s = &model.sections[0];
    assert!(s.is_ground && s.is_topmost);
    assert_eq!(s.start_height, 0.0);
    assert_eq!(s.nominal_span, 5.0);
    assert!((s.rail_length - 6.15).abs() < 1e-9);
    assert_eq!(s.rungs.len(), 17);
    assert!((model.outer_width - 0.636).abs() < 1e-9);
}

#[test]
fn scenario_b_split_sections() {
    let model = resolve(&split_ladder()).unwrap();

    assert_eq!(model.sections.len(), 2);
    let bottom = &model.sections[0];
    let top = &model.sections[1];

    assert!(bottom.is_ground && !bottom.is_topmost);
    assert_eq!(bottom.start_height, 0.0);
    assert_eq!(bottom.nominal_span, 2.5);
    assert!((bottom.rail_length - (2.5 + LANDING_STUB)).abs() < 1e-9);
    assert_eq!(bottom.lateral_offset, 0.0);

    assert!(top.is_topmost && !top.is_ground);
    assert_eq!(top.start_height, 2.5);
    assert_eq!(top.nominal_span, 2.5);
    assert!((top.rail_length - (2.5 + 1.15)).abs() < 1e-9);
    assert_eq!(top.lateral_offset, 0.8);

    let platform = model.platform.unwrap();
    assert_eq!(platform.height, 2.5);
    assert_eq!(platform.lateral_offset, 0.8);
}

#[test]
fn split_rung_phase_restarts_per_section() {
    let model = resolve(&split_ladder()).unwrap();
    for section in &model.sections {
        assert!((section.rungs[0] - 0.15).abs() < 1e-12);
        assert!(section.rungs.iter().all(|&r| r < section.nominal_span));
    }
}

#[test]
fn exit_extension_carries_no_rungs() {
    let model = resolve(&straight_ladder()).unwrap();
    let s = &model.sections[0];
    assert!(s.rungs.iter().all(|&r| r < s.nominal_span));
}

// ── Brackets ───────────────────────────────────────────────────────────────

#[test]
fn scenario_c_bracket_assignment() {
    let params = ParameterSet {
        supports: vec![1.5, 4.0],
        ..split_ladder()
    };
    let model = resolve(&params).unwrap();

    assert_eq!(model.sections[0].brackets, vec![1.5]);
    assert_eq!(model.sections[1].brackets, vec![1.5]);
    assert_eq!(model.bom.bracket_count, 4);
}

#[test]
fn support_in_stub_overlap_is_assigned_once() {
    // 2.8 sits inside both the bottom stub range [0, 3.6] and the top
    // section range [2.5, 6.15]; lower section wins.
    let params = ParameterSet {
        supports: vec![2.8],
        ..split_ladder()
    };
    let model = resolve(&params).unwrap();
    assert_eq!(model.sections[0].brackets.len(), 1);
    assert!(model.sections[1].brackets.is_empty());
}

// ── Cage ───────────────────────────────────────────────────────────────────

#[test]
fn ground_cage_uses_configured_start() {
    let params = ParameterSet {
        has_cage: true,
        cage_start_height: 2.0,
        ..straight_ladder()
    };
    let model = resolve(&params).unwrap();
    let cage = model.sections[0].cage.unwrap();
    assert_eq!(cage.start, 2.0);
    assert!((cage.end - 6.15).abs() < 1e-9);
}

#[test]
fn split_top_cage_starts_at_its_own_base() {
    let params = ParameterSet {
        has_cage: true,
        cage_start_height: 2.0,
        ..split_ladder()
    };
    let model = resolve(&params).unwrap();
    assert_eq!(model.sections[0].cage.unwrap().start, 2.0);
    assert_eq!(model.sections[1].cage.unwrap().start, 0.0);
}

#[test]
fn cage_absent_when_start_beyond_rails() {
    let params = ParameterSet {
        has_cage: true,
        cage_start_height: 10.0,
        ..straight_ladder()
    };
    let model = resolve(&params).unwrap();
    assert!(model.sections[0].cage.is_none());
}

// ── Determinism ────────────────────────────────────────────────────────────

#[test]
fn resolve_is_deterministic() {
    let params = ParameterSet {
        supports: vec![4.0, 1.5, 1.5],
        ..split_ladder()
    };
    let a = resolve(&params).unwrap();
    let b = resolve(&params).unwrap();
    assert_eq!(
        serde_json::to_vec(&a).unwrap(),
        serde_json::to_vec(&b).unwrap()
    );
}

#[test]
fn horizontal_extent_rule() {
    let model = resolve(&straight_ladder()).unwrap();
    assert_eq!(model.horizontal_extent, model.outer_width);

    let negative_offset = ParameterSet {
        offset: -0.8,
        platform_depth: 0.8,
        ..split_ladder()
    };
    let model = resolve(&negative_offset).unwrap();
    assert!((model.horizontal_extent - (model.outer_width + 0.8 + 0.8)).abs() < 1e-9);
}
