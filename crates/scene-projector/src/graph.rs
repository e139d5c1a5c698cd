use serde::{Deserialize, Serialize};

/// A 3D structural representation: labeled solid primitives positioned
/// directly from the geometry model, in meters. Sufficient for any renderer
/// to display without further geometric computation.
///
/// Coordinates: x across the climb (ground section centered on 0), y up
/// from ground level, z out of the wall toward the climber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneGraph {
    pub nodes: Vec<SceneNode>,
    /// Canonical (undragged) positions of the 3D dimension call-outs.
    pub annotations: Vec<DimensionAnnotation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneNode {
    pub label: String,
    pub translation: [f64; 3],
    /// Euler XYZ rotation in radians.
    pub rotation: [f64; 3],
    pub primitive: Option<SolidPrimitive>,
    pub material: Option<MaterialHint>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// A pure grouping node: no solid of its own.
    pub fn group(label: impl Into<String>, translation: [f64; 3]) -> Self {
        Self {
            label: label.into(),
            translation,
            rotation: [0.0; 3],
            primitive: None,
            material: None,
            children: Vec::new(),
        }
    }

    /// A leaf solid at the given position.
    pub fn solid(
        label: impl Into<String>,
        translation: [f64; 3],
        primitive: SolidPrimitive,
        material: MaterialHint,
    ) -> Self {
        Self {
            label: label.into(),
            translation,
            rotation: [0.0; 3],
            primitive: Some(primitive),
            material: Some(material),
            children: Vec::new(),
        }
    }

    pub fn rotated(mut self, rotation: [f64; 3]) -> Self {
        self.rotation = rotation;
        self
    }

    /// Count solids in this subtree.
    pub fn solid_count(&self) -> usize {
        usize::from(self.primitive.is_some())
            + self.children.iter().map(SceneNode::solid_count).sum::<usize>()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SolidPrimitive {
    /// Axis-aligned rectangular prism centered on its node, full extents.
    Cuboid { size: [f64; 3] },
    /// Partial circular hoop in the node's local XY plane: `sweep` radians
    /// of arc, never a full circle.
    Hoop {
        radius: f64,
        tube_radius: f64,
        sweep: f64,
    },
}

/// Rendering hint only; carries no geometric meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MaterialHint {
    RailSteel,
    RungAlloy,
    BracketSteel,
    WallPlate,
    PlatformFloor,
    ToeBoard,
    GuardRail,
    GuardMesh,
    CageHoop,
    CageStringer,
    Handrail,
}

/// A dimension call-out in scene space: tick-terminated line from `start`
/// to `end` with the label at the midpoint. Positions are the canonical
/// (undragged) ones; on-screen repositioning is a presentation concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionAnnotation {
    pub label: String,
    pub start: [f64; 3],
    pub end: [f64; 3],
    pub emphasis: AnnotationEmphasis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnnotationEmphasis {
    /// Principal dimensions: heights, widths, wall standoff.
    Primary,
    /// Secondary detail: pitch, clear width, rail depth.
    Detail,
}
