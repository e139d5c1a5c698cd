//! Side view: wall face, bracket call-outs, rail depth, rung depth marks,
//! and the platform / disembarkation-deck outlines with their depth cues.

use ladder_types::GeometryModel;

use crate::document::{
    Axis, DimensionCallout, LineClass, Primitive, RectClass, TextAnchor, TextClass, ViewGroup,
};
use crate::layout::{mm, Layout, GUARD_RAIL, PROFILE_ORIGIN_X};

pub fn view(model: &GeometryModel, layout: &Layout) -> ViewGroup {
    let wall = mm(model.wall_distance);
    let rail_d = mm(model.rail_depth);
    let extent = mm(model.max_rail_extent());
    let mut primitives = Vec::new();
    let mut dimensions = Vec::new();

    primitives.push(Primitive::Text {
        x: wall,
        y: layout.y(mm(model.total_height) + 800.0),
        content: "PROFILE".to_string(),
        class: TextClass::Header,
        anchor: TextAnchor::Middle,
    });

    // Wall face.
    primitives.push(Primitive::Line {
        x1: 0.0,
        y1: layout.y(-100.0),
        x2: 0.0,
        y2: layout.y(extent + 500.0),
        class: LineClass::Wall,
    });

    brackets(model, layout, &mut primitives);

    // Rail depth: the side view shows one continuous run to the highest
    // rail point regardless of the split.
    primitives.push(Primitive::Rect {
        x: wall,
        y: layout.y(extent),
        width: rail_d,
        height: extent,
        class: RectClass::Profile,
        dashed: false,
    });

    rung_marks(model, layout, &mut primitives);
    platform(model, layout, &mut primitives, &mut dimensions);
    top_landing(model, layout, &mut primitives, &mut dimensions);

    dimensions.push(DimensionCallout {
        axis: Axis::Horizontal,
        offset: layout.y(-200.0),
        from: 0.0,
        to: wall,
        label: format!("WALL {wall:.0}"),
    });

    ViewGroup {
        label: "PROFILE".to_string(),
        origin_x: PROFILE_ORIGIN_X + offset_shift(model),
        primitives,
        dimensions,
    }
}

/// A negative lateral offset grows the elevation leftward; the profile view
/// shifts right by the same amount so the two never collide.
fn offset_shift(model: &GeometryModel) -> f64 {
    model
        .platform
        .map(|p| mm(p.lateral_offset).abs())
        .unwrap_or(0.0)
}

/// Placed brackets only, consumed from the model's per-section lists; a
/// support height beyond the structure never reaches the drawing.
fn brackets(model: &GeometryModel, layout: &Layout, out: &mut Vec<Primitive>) {
    let wall = mm(model.wall_distance);
    for section in &model.sections {
        for &rel in &section.brackets {
            let abs = mm(section.start_height + rel);
            out.push(Primitive::Rect {
                x: 0.0,
                y: layout.y(abs + 40.0),
                width: wall,
                height: 80.0,
                class: RectClass::Bracket,
                dashed: false,
            });
            out.push(Primitive::Text {
                x: -20.0,
                y: layout.y(abs),
                content: format!("SUPPORT +{abs:.0}"),
                class: TextClass::Dim,
                anchor: TextAnchor::End,
            });
        }
    }
}

fn rung_marks(model: &GeometryModel, layout: &Layout, out: &mut Vec<Primitive>) {
    let wall = mm(model.wall_distance);
    let rail_d = mm(model.rail_depth);
    for section in &model.sections {
        for &rung in &section.rungs {
            out.push(Primitive::Rect {
                x: wall + 10.0,
                y: layout.y(mm(section.start_height + rung)) + rail_d / 4.0,
                width: rail_d - 20.0,
                height: 15.0,
                class: RectClass::RungMark,
                dashed: false,
            });
        }
    }
}

fn platform(
    model: &GeometryModel,
    layout: &Layout,
    out: &mut Vec<Primitive>,
    dims: &mut Vec<DimensionCallout>,
) {
    let Some(p) = &model.platform else { return };
    let wall = mm(model.wall_distance);
    let depth = mm(p.depth);
    let h = mm(p.height);

    out.push(Primitive::Rect {
        x: wall,
        y: layout.y(h),
        width: depth,
        height: 60.0,
        class: RectClass::PlatformFloor,
        dashed: false,
    });
    // Guard post at the open edge, then crossed depth cues.
    out.push(Primitive::Line {
        x1: wall + depth,
        y1: layout.y(h),
        x2: wall + depth,
        y2: layout.y(h + GUARD_RAIL),
        class: LineClass::Outline,
    });
    out.push(Primitive::Line {
        x1: wall,
        y1: layout.y(h),
        x2: wall + depth,
        y2: layout.y(h + GUARD_RAIL),
        class: LineClass::Thin,
    });
    out.push(Primitive::Line {
        x1: wall,
        y1: layout.y(h + GUARD_RAIL),
        x2: wall + depth,
        y2: layout.y(h),
        class: LineClass::Thin,
    });

    dims.push(DimensionCallout {
        axis: Axis::Horizontal,
        offset: layout.y(h - 100.0),
        from: wall,
        to: wall + depth,
        label: format!("L={depth:.0}"),
    });
}

fn top_landing(
    model: &GeometryModel,
    layout: &Layout,
    out: &mut Vec<Primitive>,
    dims: &mut Vec<DimensionCallout>,
) {
    let Some(t) = &model.top_landing else { return };
    let wall = mm(model.wall_distance);
    let depth = mm(t.depth);
    let h = mm(t.height);

    out.push(Primitive::Rect {
        x: wall,
        y: layout.y(h),
        width: depth,
        height: 60.0,
        class: RectClass::DeckFloor,
        dashed: false,
    });
    // Guard post, top rail, mid rail.
    out.push(Primitive::Rect {
        x: wall + depth,
        y: layout.y(h + GUARD_RAIL),
        width: 40.0,
        height: GUARD_RAIL,
        class: RectClass::Profile,
        dashed: false,
    });
    out.push(Primitive::Rect {
        x: wall,
        y: layout.y(h + GUARD_RAIL),
        width: depth,
        height: 40.0,
        class: RectClass::Outline,
        dashed: false,
    });
    out.push(Primitive::Rect {
        x: wall,
        y: layout.y(h + GUARD_RAIL / 2.0),
        width: depth,
        height: 20.0,
        class: RectClass::Thin,
        dashed: false,
    });
    out.push(Primitive::Line {
        x1: wall,
        y1: layout.y(h),
        x2: wall + depth,
        y2: layout.y(h + GUARD_RAIL),
        class: LineClass::Thin,
    });
    out.push(Primitive::Line {
        x1: wall,
        y1: layout.y(h + GUARD_RAIL),
        x2: wall + depth,
        y2: layout.y(h),
        class: LineClass::Thin,
    });

    dims.push(DimensionCallout {
        axis: Axis::Horizontal,
        offset: layout.y(h - 200.0),
        from: wall,
        to: wall + depth,
        label: format!("DECK L={depth:.0}"),
    });
    dims.push(DimensionCallout {
        axis: Axis::Vertical,
        offset: wall + depth + 100.0,
        from: layout.y(h),
        to: layout.y(h + GUARD_RAIL),
        label: format!("{GUARD_RAIL:.0}"),
    });
}
