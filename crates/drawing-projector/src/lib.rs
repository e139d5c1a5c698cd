//! 2D fabrication-drawing projector.
//!
//! Projects a [`GeometryModel`](ladder_types::GeometryModel) into a
//! [`TechnicalDrawing`]: title block, front elevation, side profile, and a
//! bill-of-materials panel, with dimension call-outs. Every coordinate is
//! derived from the model plus the fixed canvas convention in [`layout`];
//! nothing geometric is recomputed here. Emitting an actual SVG file from
//! the document is a collaborator concern (see the `plan-render` binary).

pub mod document;
pub mod elevation;
pub mod layout;
pub mod panel;
pub mod profile;

use tracing::debug;

use ladder_types::GeometryModel;

pub use document::*;
use layout::{mm, Layout, CANVAS_WIDTH};

/// Project the geometry model into a structured technical drawing.
pub fn project(model: &GeometryModel) -> TechnicalDrawing {
    let layout = Layout::new(mm(model.max_rail_extent()));

    let drawing = TechnicalDrawing {
        canvas_width: CANVAS_WIDTH,
        canvas_height: layout.canvas_height,
        title_block: title_block(model),
        base: ground_line(&layout),
        elevation: elevation::view(model, &layout),
        profile: profile::view(model, &layout),
        bom_panel: panel::bom_panel(model, &layout),
    };
    debug!(
        canvas_height = drawing.canvas_height,
        elevation_primitives = drawing.elevation.primitives.len(),
        profile_primitives = drawing.profile.primitives.len(),
        "projected technical drawing"
    );
    drawing
}

fn title_block(model: &GeometryModel) -> TitleBlock {
    TitleBlock {
        x: 50.0,
        y: 50.0,
        width: CANVAS_WIDTH - 100.0,
        height: 250.0,
        title: "FABRICATION DRAWING".to_string(),
        reference: format!(
            "REF VL-{:.0} | USEFUL H = {} m",
            mm(model.total_height),
            model.total_height
        ),
    }
}

fn ground_line(layout: &Layout) -> Vec<Primitive> {
    vec![
        Primitive::Line {
            x1: 50.0,
            y1: layout.y(0.0),
            x2: CANVAS_WIDTH - 50.0,
            y2: layout.y(0.0),
            class: LineClass::Thick,
        },
        Primitive::Text {
            x: CANVAS_WIDTH - 400.0,
            y: layout.y(0.0) + 60.0,
            content: "LEVEL ±0.00".to_string(),
            class: TextClass::Dim,
            anchor: TextAnchor::Start,
        },
    ]
}
