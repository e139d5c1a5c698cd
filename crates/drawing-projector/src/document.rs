use serde::{Deserialize, Serialize};

/// A structured technical drawing: everything a vector-image emitter needs,
/// nothing it has to derive. All coordinates are millimeter canvas units
/// with the vertical axis already flipped (physical up = decreasing y).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalDrawing {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub title_block: TitleBlock,
    /// Canvas-global backdrop: ground line and its level label.
    pub base: Vec<Primitive>,
    /// Front elevation: rails, rungs, landing cut line.
    pub elevation: ViewGroup,
    /// Side view: wall distance, rail depth, platforms, bracket call-outs.
    pub profile: ViewGroup,
    pub bom_panel: BomPanel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleBlock {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub title: String,
    /// Deterministic drawing reference derived from the model.
    pub reference: String,
}

/// A named view. Primitives are canvas coordinates except for the x axis,
/// which is local to `origin_x` (views shift horizontally as one block).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewGroup {
    pub label: String,
    pub origin_x: f64,
    pub primitives: Vec<Primitive>,
    pub dimensions: Vec<DimensionCallout>,
}

/// Drawing primitives, tagged by purpose so an emitter can map each class
/// to stroke/fill/width without consulting the geometry again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Primitive {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        class: LineClass,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        class: RectClass,
        dashed: bool,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        class: TextClass,
        anchor: TextAnchor,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LineClass {
    /// Heavy structural stroke (ground line).
    Thick,
    /// Light construction stroke (depth cues, guard mid-rails).
    Thin,
    /// Standard outline stroke.
    Outline,
    /// Round-capped rung stroke.
    Rung,
    /// The wall face in the profile view.
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RectClass {
    /// Rail stock: outlined, white-filled.
    Profile,
    /// Platform cut line across the elevation.
    CutFloor,
    /// Intermediate platform floor in the profile view.
    PlatformFloor,
    /// Disembarkation deck floor.
    DeckFloor,
    /// Wall bracket body.
    Bracket,
    /// Solid rung depth mark.
    RungMark,
    /// Thin outlined rect (guard rails).
    Thin,
    /// Plain outlined rect.
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TextClass {
    Title,
    Header,
    Dim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A paired arrow-terminated dimension line with tick ends. The numeric
/// label sits centered on the segment; emitters rotate vertical labels 90°.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionCallout {
    pub axis: Axis,
    /// Position across the measured axis: x for vertical call-outs, y for
    /// horizontal ones.
    pub offset: f64,
    /// Segment start along the measured axis, canvas coordinates.
    pub from: f64,
    /// Segment end along the measured axis, canvas coordinates.
    pub to: f64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomPanel {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub lines: Vec<BomLine>,
}

/// One numbered bill-of-materials line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomLine {
    pub index: u32,
    pub label: String,
    pub value: String,
}
