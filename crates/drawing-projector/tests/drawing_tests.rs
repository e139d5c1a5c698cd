use drawing_projector::{project, Axis, LineClass, Primitive, RectClass};
use geometry_resolver::resolve;
use ladder_types::{GeometryModel, ParameterSet};

fn straight() -> GeometryModel {
    resolve(&ParameterSet::default()).unwrap()
}

fn split(offset: f64) -> GeometryModel {
    let params = ParameterSet {
        has_landing: true,
        landing_height: 2.5,
        offset,
        supports: vec![1.5, 4.0],
        ..ParameterSet::default()
    };
    resolve(&params).unwrap()
}

fn count_rects(primitives: &[Primitive], class: RectClass) -> usize {
    primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Rect { class: c, .. } if *c == class))
        .count()
}

fn count_lines(primitives: &[Primitive], class: LineClass) -> usize {
    primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Line { class: c, .. } if *c == class))
        .count()
}

// ── Elevation ──────────────────────────────────────────────────────────────

#[test]
fn elevation_rung_lines_match_model() {
    let model = straight();
    let drawing = project(&model);
    assert_eq!(
        count_lines(&drawing.elevation.primitives, LineClass::Rung),
        model.bom.rung_count
    );
}

#[test]
fn split_elevation_draws_stub_dashed() {
    let model = split(0.8);
    let drawing = project(&model);

    let dashed: Vec<_> = drawing
        .elevation
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Rect { dashed: true, .. }))
        .collect();
    // One stub rect per rail of the ground section.
    assert_eq!(dashed.len(), 2);

    // Two solid rail rects per section.
    let solid_rails = drawing
        .elevation
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Rect { class: RectClass::Profile, dashed: false, .. }))
        .count();
    assert_eq!(solid_rails, 4);
}

#[test]
fn negative_offset_grows_cut_line_leftward() {
    let model = split(-0.8);
    let drawing = project(&model);

    let cut = drawing
        .elevation
        .primitives
        .iter()
        .find_map(|p| match p {
            Primitive::Rect {
                x,
                width,
                class: RectClass::CutFloor,
                ..
            } => Some((*x, *width)),
            _ => None,
        })
        .expect("platform cut line");
    assert_eq!(cut.0, -800.0);
    let outer_mm = model.outer_width * 1000.0;
    assert!((cut.1 - (800.0 + outer_mm)).abs() < 1e-9);
}

#[test]
fn elevation_dimensions_cover_heights() {
    let model = split(0.8);
    let drawing = project(&model);
    let labels: Vec<&str> = drawing
        .elevation
        .dimensions
        .iter()
        .map(|d| d.label.as_str())
        .collect();
    assert!(labels.iter().any(|l| l.starts_with("WIDTH 636")));
    assert!(labels.iter().any(|l| l.starts_with("USEFUL H = 5000")));
    assert!(labels.iter().any(|l| l.starts_with("EXIT +1150")));
    assert!(labels.iter().any(|l| l.starts_with("CUT H = 2500")));
}

#[test]
fn vertical_dimension_axis_is_tagged() {
    let drawing = project(&straight());
    let useful = drawing
        .elevation
        .dimensions
        .iter()
        .find(|d| d.label.starts_with("USEFUL"))
        .unwrap();
    assert_eq!(useful.axis, Axis::Vertical);
    // Flipped axis: the top of the span has smaller canvas y.
    assert!(useful.to < useful.from);
}

// ── Profile ────────────────────────────────────────────────────────────────

#[test]
fn profile_draws_only_placed_brackets() {
    let params = ParameterSet {
        supports: vec![1.5, 4.0, 99.0],
        ..ParameterSet::default()
    };
    let model = resolve(&params).unwrap();
    let drawing = project(&model);
    assert_eq!(count_rects(&drawing.profile.primitives, RectClass::Bracket), 2);
}

#[test]
fn profile_view_shifts_right_for_offset() {
    let base = project(&straight()).profile.origin_x;
    let shifted = project(&split(-0.8)).profile.origin_x;
    assert_eq!(shifted, base + 800.0);
}

#[test]
fn profile_rung_marks_match_model() {
    let model = split(0.8);
    let drawing = project(&model);
    assert_eq!(
        count_rects(&drawing.profile.primitives, RectClass::RungMark),
        model.bom.rung_count
    );
}

// ── BOM panel ──────────────────────────────────────────────────────────────

#[test]
fn bom_panel_enumerates_quantities() {
    let model = split(0.8);
    let drawing = project(&model);
    let lines = &drawing.bom_panel.lines;

    assert_eq!(lines[0].label, "PROFILE 65x24 mm");
    assert_eq!(
        lines[0].value,
        format!("{:.2} m", model.bom.profile_length_m)
    );
    assert_eq!(lines[1].value, format!("{} pcs", model.bom.rung_count));
    assert_eq!(lines[2].value, "4 pcs");
    assert!(lines.iter().any(|l| l.label == "INTERMEDIATE PLATFORM"));
    assert!(lines.iter().any(|l| l.label == "SAFETY CAGE"));
}

#[test]
fn bom_panel_skips_absent_options() {
    let params = ParameterSet {
        has_landing: false,
        has_top_landing: false,
        has_cage: false,
        ..ParameterSet::default()
    };
    let drawing = project(&resolve(&params).unwrap());
    assert_eq!(drawing.bom_panel.lines.len(), 3);
}

// ── Document ───────────────────────────────────────────────────────────────

#[test]
fn drawing_is_deterministic_and_serializable() {
    let model = split(0.8);
    let a = serde_json::to_vec(&project(&model)).unwrap();
    let b = serde_json::to_vec(&project(&model)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn title_reference_is_deterministic() {
    let drawing = project(&straight());
    assert_eq!(drawing.title_block.reference, "REF VL-5000 | USEFUL H = 5 m");
}
