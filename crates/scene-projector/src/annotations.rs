//! Canonical positions of the 3D dimension call-outs.
//!
//! These are the undragged positions; interactive repositioning is a
//! presentation concern and never feeds back into the model.

use ladder_types::GeometryModel;

use crate::graph::{AnnotationEmphasis, DimensionAnnotation};

pub fn canonical(model: &GeometryModel) -> Vec<DimensionAnnotation> {
    let outer = model.outer_width;
    let total = model.total_height;
    let exit = model.exit.map(|e| e.extension).unwrap_or(0.0);
    let rail_top = total + exit;

    let x_right = outer / 2.0 + 0.8;
    let x_left = -outer / 2.0 - 0.3;
    let y_below = -0.3;
    let z_front = model.rail_depth / 2.0 + 0.3;

    let mut out = vec![
        annotation(
            format!("Useful H: {total:.2} m"),
            [x_right, 0.0, 0.0],
            [x_right, total, 0.0],
            AnnotationEmphasis::Primary,
        ),
        annotation(
            format!("Total width: {outer:.3} m"),
            [-outer / 2.0, y_below, 0.0],
            [outer / 2.0, y_below, 0.0],
            AnnotationEmphasis::Primary,
        ),
        annotation(
            format!("Clear width: {:.3} m", model.width_inner),
            [-model.width_inner / 2.0, y_below + 0.15, 0.0],
            [model.width_inner / 2.0, y_below + 0.15, 0.0],
            AnnotationEmphasis::Detail,
        ),
        annotation(
            format!("Pitch: {:.3} m", model.pitch),
            [0.0, 0.15, 0.0],
            [0.0, 0.15 + model.pitch, 0.0],
            AnnotationEmphasis::Detail,
        ),
        annotation(
            format!("Wall: {:.2} m", model.wall_distance),
            [outer / 2.0 + 0.1, total / 2.0, 0.0],
            [outer / 2.0 + 0.1, total / 2.0, -model.wall_distance],
            AnnotationEmphasis::Primary,
        ),
        annotation(
            format!("Rail: {:.3} m", model.rail_depth),
            [outer / 2.0 + 0.1, total / 2.0 + 0.3, -model.rail_depth / 2.0],
            [outer / 2.0 + 0.1, total / 2.0 + 0.3, model.rail_depth / 2.0],
            AnnotationEmphasis::Detail,
        ),
    ];

    if model.exit.is_some() {
        out.push(annotation(
            format!("Exit: +{exit:.2} m"),
            [x_right, total, 0.0],
            [x_right, rail_top, 0.0],
            AnnotationEmphasis::Primary,
        ));
    }

    if let Some(platform) = &model.platform {
        let h = platform.height;
        let off = platform.lateral_offset;
        out.push(annotation(
            format!("Cut: {h:.2} m"),
            [x_left, 0.0, 0.0],
            [x_left, h, 0.0],
            AnnotationEmphasis::Primary,
        ));
        out.push(annotation(
            format!("Platform depth: {:.2} m", platform.depth),
            [off / 2.0 + outer / 2.0 + 0.1, h, -model.rail_depth / 2.0],
            [
                off / 2.0 + outer / 2.0 + 0.1,
                h,
                -model.rail_depth / 2.0 + platform.depth,
            ],
            AnnotationEmphasis::Primary,
        ));
        out.push(annotation(
            format!("Offset: {off:.2} m"),
            [0.0, h - 0.2, z_front],
            [off, h - 0.2, z_front],
            AnnotationEmphasis::Primary,
        ));
    }

    if let Some(top) = &model.top_landing {
        out.push(annotation(
            format!("Deck: {:.2} m", top.depth),
            [
                top.lateral_offset + outer / 2.0 + 0.1,
                top.height,
                -model.rail_depth / 2.0,
            ],
            [
                top.lateral_offset + outer / 2.0 + 0.1,
                top.height,
                -model.rail_depth / 2.0 + top.depth,
            ],
            AnnotationEmphasis::Primary,
        ));
    }

    out
}

fn annotation(
    label: String,
    start: [f64; 3],
    end: [f64; 3],
    emphasis: AnnotationEmphasis,
) -> DimensionAnnotation {
    DimensionAnnotation {
        label,
        start,
        end,
        emphasis,
    }
}
