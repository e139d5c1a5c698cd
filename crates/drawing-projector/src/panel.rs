//! Bill-of-materials panel: the BOM quantities as numbered line items.

use ladder_types::GeometryModel;

use crate::document::{BomLine, BomPanel};
use crate::layout::{mm, Layout, CANVAS_WIDTH};

const PANEL_WIDTH: f64 = 1000.0;
const PANEL_HEIGHT: f64 = 500.0;

pub fn bom_panel(model: &GeometryModel, layout: &Layout) -> BomPanel {
    let bom = &model.bom;
    let mut lines = vec![
        BomLine {
            index: 1,
            label: format!(
                "PROFILE {:.0}x{:.0} mm",
                mm(model.rail_depth),
                mm(model.rail_width)
            ),
            value: format!("{:.2} m", bom.profile_length_m),
        },
        BomLine {
            index: 2,
            label: "RUNGS".to_string(),
            value: format!("{} pcs", bom.rung_count),
        },
        BomLine {
            index: 3,
            label: "WALL BRACKETS".to_string(),
            value: format!("{} pcs", bom.bracket_count),
        },
    ];

    if let Some(depth) = bom.platform_depth {
        lines.push(BomLine {
            index: 4,
            label: "INTERMEDIATE PLATFORM".to_string(),
            value: format!("1 pc ({:.0} mm)", mm(depth)),
        });
    }
    if let Some(depth) = bom.top_landing_depth {
        lines.push(BomLine {
            index: 5,
            label: "TOP LANDING KIT".to_string(),
            value: format!("1 pc ({:.0} mm)", mm(depth)),
        });
    }
    if bom.has_cage {
        lines.push(BomLine {
            index: 6,
            label: "SAFETY CAGE".to_string(),
            value: "INSTALLED".to_string(),
        });
    }

    BomPanel {
        x: CANVAS_WIDTH - PANEL_WIDTH - 100.0,
        y: layout.canvas_height - PANEL_HEIGHT - 100.0,
        width: PANEL_WIDTH,
        height: PANEL_HEIGHT,
        title: "BILL OF MATERIALS (BOM)".to_string(),
        lines,
    }
}
