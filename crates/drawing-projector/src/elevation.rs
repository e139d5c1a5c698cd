//! Front elevation: rails, rungs, the landing cut line, and the principal
//! height/width call-outs.

use ladder_types::{GeometryModel, Section};

use crate::document::{
    Axis, DimensionCallout, LineClass, Primitive, RectClass, TextAnchor, TextClass, ViewGroup,
};
use crate::layout::{mm, Layout, ELEVATION_ORIGIN_X};

pub fn view(model: &GeometryModel, layout: &Layout) -> ViewGroup {
    let outer = mm(model.outer_width);
    let mut primitives = Vec::new();

    primitives.push(Primitive::Text {
        x: outer / 2.0,
        y: layout.y(mm(model.total_height) + 800.0),
        content: "ELEVATION".to_string(),
        class: TextClass::Header,
        anchor: TextAnchor::Middle,
    });

    for section in &model.sections {
        rails(section, model, layout, &mut primitives);
        rungs(section, model, layout, &mut primitives);
    }

    if let Some(platform) = &model.platform {
        let off = mm(platform.lateral_offset);
        primitives.push(Primitive::Rect {
            x: off.min(0.0),
            y: layout.y(mm(platform.height)),
            width: off.abs() + outer,
            height: 50.0,
            class: RectClass::CutFloor,
            dashed: false,
        });
    }

    ViewGroup {
        label: "ELEVATION".to_string(),
        origin_x: ELEVATION_ORIGIN_X,
        primitives,
        dimensions: dimensions(model, layout),
    }
}

/// Left/right rail stock. The landing stub on a split's ground section is
/// drawn dashed above the cut; the exit extension stays solid.
fn rails(section: &Section, model: &GeometryModel, layout: &Layout, out: &mut Vec<Primitive>) {
    let off = mm(section.lateral_offset);
    let rail_w = mm(model.rail_width);
    let outer = mm(model.outer_width);

    let has_stub = !section.is_topmost && section.rail_length > section.nominal_span;
    let solid_len = if has_stub {
        mm(section.nominal_span)
    } else {
        mm(section.rail_length)
    };
    let base = mm(section.start_height);

    for x in [off, off + outer - rail_w] {
        out.push(Primitive::Rect {
            x,
            y: layout.y(base + solid_len),
            width: rail_w,
            height: solid_len,
            class: RectClass::Profile,
            dashed: false,
        });
        if has_stub {
            let stub = mm(section.rail_length - section.nominal_span);
            out.push(Primitive::Rect {
                x,
                y: layout.y(base + solid_len + stub),
                width: rail_w,
                height: stub,
                class: RectClass::Profile,
                dashed: true,
            });
        }
    }
}

fn rungs(section: &Section, model: &GeometryModel, layout: &Layout, out: &mut Vec<Primitive>) {
    let off = mm(section.lateral_offset);
    let rail_w = mm(model.rail_width);
    let outer = mm(model.outer_width);

    for &rung in &section.rungs {
        let y = layout.y(mm(section.start_height + rung));
        out.push(Primitive::Line {
            x1: off + rail_w,
            y1: y,
            x2: off + outer - rail_w,
            y2: y,
            class: LineClass::Rung,
        });
    }
}

fn dimensions(model: &GeometryModel, layout: &Layout) -> Vec<DimensionCallout> {
    let outer = mm(model.outer_width);
    let total = mm(model.total_height);
    let mut dims = vec![
        DimensionCallout {
            axis: Axis::Horizontal,
            offset: layout.y(-200.0),
            from: 0.0,
            to: outer,
            label: format!("WIDTH {outer:.0}"),
        },
        DimensionCallout {
            axis: Axis::Vertical,
            offset: -150.0,
            from: layout.y(0.0),
            to: layout.y(total),
            label: format!("USEFUL H = {total:.0}"),
        },
    ];

    if let Some(exit) = &model.exit {
        dims.push(DimensionCallout {
            axis: Axis::Vertical,
            offset: -150.0,
            from: layout.y(total),
            to: layout.y(total + mm(exit.extension)),
            label: format!("EXIT +{:.0}", mm(exit.extension)),
        });
    }

    if let Some(platform) = &model.platform {
        dims.push(DimensionCallout {
            axis: Axis::Vertical,
            offset: -250.0,
            from: layout.y(0.0),
            to: layout.y(mm(platform.height)),
            label: format!("CUT H = {:.0}", mm(platform.height)),
        });
    }

    dims
}
