//! SVG emission for the technical drawing document.
//!
//! Pure string assembly: every coordinate comes from the document, nothing
//! geometric is computed here beyond arrow/tick decoration of dimension
//! call-outs.

use drawing_projector::{
    Axis, BomPanel, DimensionCallout, LineClass, Primitive, RectClass, TechnicalDrawing,
    TextAnchor, TextClass, TitleBlock, ViewGroup,
};

const CSS: &str = r#"
    <style>
      text { font-family: 'Consolas', 'Courier New', monospace; fill: #000; }
      .title { font-size: 80px; font-weight: bold; }
      .header { font-size: 40px; font-weight: bold; }
      .dim-text { font-size: 30px; fill: #444; }
      .outline { stroke: #000; stroke-width: 3; fill: none; }
      .thick { stroke: #000; stroke-width: 6; fill: none; }
      .thin { stroke: #000; stroke-width: 1; fill: none; }
      .wall { stroke: #999; stroke-width: 6; fill: none; }
      .profile { fill: #fff; stroke: #000; stroke-width: 3; }
      .cut-floor { fill: #eee; stroke: #000; stroke-width: 3; }
      .plat-floor { fill: #ccc; stroke: #000; stroke-width: 3; }
      .deck-floor { fill: #bbb; stroke: #000; stroke-width: 3; }
      .bracket { fill: #555; stroke: #000; stroke-width: 1; }
      .rung-mark { fill: #000; }
      .rung { stroke: #000; stroke-width: 8; stroke-linecap: round; }
      .dim-line { stroke: #000; stroke-width: 2; }
      .bom-box { fill: none; stroke: #000; stroke-width: 3; }
      .bom-line { stroke: #000; stroke-width: 2; }
      .bom-text { font-size: 35px; }
      .bom-header { font-size: 35px; font-weight: bold; }
    </style>
"#;

const DEFS: &str = r##"
    <defs>
      <marker id="arrow" markerWidth="12" markerHeight="12" refX="10" refY="6" orient="auto">
        <path d="M2,2 L10,6 L2,10 L2,2" fill="#000" />
      </marker>
    </defs>
"##;

pub fn drawing_to_svg(drawing: &TechnicalDrawing) -> String {
    let mut svg = format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n{CSS}{DEFS}",
        w = drawing.canvas_width,
        h = drawing.canvas_height,
    );

    title_block(&mut svg, &drawing.title_block);
    for primitive in &drawing.base {
        push_primitive(&mut svg, primitive);
    }
    view_group(&mut svg, &drawing.elevation);
    view_group(&mut svg, &drawing.profile);
    bom_panel(&mut svg, &drawing.bom_panel);

    svg.push_str("</svg>\n");
    svg
}

fn title_block(svg: &mut String, block: &TitleBlock) {
    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"#000\" stroke-width=\"5\" />\n",
        block.x, block.y, block.width, block.height
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" class=\"title\">{}</text>\n",
        block.x + 50.0,
        block.y + 100.0,
        block.title
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" class=\"dim-text\">{}</text>\n",
        block.x + 50.0,
        block.y + 170.0,
        block.reference
    ));
}

fn view_group(svg: &mut String, view: &ViewGroup) {
    svg.push_str(&format!(
        "  <g transform=\"translate({}, 0)\">\n",
        view.origin_x
    ));
    for primitive in &view.primitives {
        push_primitive(svg, primitive);
    }
    for dim in &view.dimensions {
        push_dimension(svg, dim);
    }
    svg.push_str("  </g>\n");
}

fn push_primitive(svg: &mut String, primitive: &Primitive) {
    match primitive {
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            class,
        } => {
            svg.push_str(&format!(
                "    <line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" class=\"{}\" />\n",
                line_class(*class)
            ));
        }
        Primitive::Rect {
            x,
            y,
            width,
            height,
            class,
            dashed,
        } => {
            let dash = if *dashed {
                " stroke-dasharray=\"10,5\""
            } else {
                ""
            };
            svg.push_str(&format!(
                "    <rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{width:.1}\" height=\"{height:.1}\" class=\"{}\"{dash} />\n",
                rect_class(*class)
            ));
        }
        Primitive::Text {
            x,
            y,
            content,
            class,
            anchor,
        } => {
            svg.push_str(&format!(
                "    <text x=\"{x:.1}\" y=\"{y:.1}\" class=\"{}\" text-anchor=\"{}\">{content}</text>\n",
                text_class(*class),
                text_anchor(*anchor)
            ));
        }
    }
}

/// Arrow-terminated dimension line with tick ends; vertical labels rotate
/// 90° so they read along the measured span.
fn push_dimension(svg: &mut String, dim: &DimensionCallout) {
    match dim.axis {
        Axis::Vertical => {
            let x = dim.offset;
            let (y1, y2) = (dim.from, dim.to);
            let mid = (y1 + y2) / 2.0;
            svg.push_str(&format!(
                "    <line x1=\"{x:.1}\" y1=\"{y1:.1}\" x2=\"{x:.1}\" y2=\"{y2:.1}\" class=\"dim-line\" marker-start=\"url(#arrow)\" marker-end=\"url(#arrow)\" />\n"
            ));
            svg.push_str(&format!(
                "    <text x=\"{tx:.1}\" y=\"{mid:.1}\" text-anchor=\"end\" dominant-baseline=\"middle\" class=\"dim-text\" transform=\"rotate(-90, {tx:.1}, {mid:.1})\">{}</text>\n",
                dim.label,
                tx = x - 20.0,
            ));
            for y in [y1, y2] {
                svg.push_str(&format!(
                    "    <line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" class=\"dim-line\" />\n",
                    x - 10.0,
                    x + 30.0
                ));
            }
        }
        Axis::Horizontal => {
            let y = dim.offset;
            let (x1, x2) = (dim.from, dim.to);
            svg.push_str(&format!(
                "    <line x1=\"{x1:.1}\" y1=\"{y:.1}\" x2=\"{x2:.1}\" y2=\"{y:.1}\" class=\"dim-line\" marker-start=\"url(#arrow)\" marker-end=\"url(#arrow)\" />\n"
            ));
            svg.push_str(&format!(
                "    <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"dim-text\">{}</text>\n",
                (x1 + x2) / 2.0,
                y - 15.0,
                dim.label
            ));
            for x in [x1, x2] {
                svg.push_str(&format!(
                    "    <line x1=\"{x:.1}\" y1=\"{:.1}\" x2=\"{x:.1}\" y2=\"{:.1}\" class=\"dim-line\" />\n",
                    y - 30.0,
                    y + 10.0
                ));
            }
        }
    }
}

fn bom_panel(svg: &mut String, panel: &BomPanel) {
    svg.push_str(&format!(
        "  <g transform=\"translate({}, {})\">\n",
        panel.x, panel.y
    ));
    svg.push_str(&format!(
        "    <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" class=\"bom-box\" />\n",
        panel.width, panel.height
    ));
    svg.push_str(&format!(
        "    <line x1=\"0\" y1=\"80\" x2=\"{}\" y2=\"80\" class=\"bom-line\" />\n",
        panel.width
    ));
    svg.push_str(&format!(
        "    <text x=\"{}\" y=\"55\" text-anchor=\"middle\" class=\"bom-header\">{}</text>\n",
        panel.width / 2.0,
        panel.title
    ));
    for (row, line) in panel.lines.iter().enumerate() {
        svg.push_str(&format!(
            "    <text x=\"50\" y=\"{}\" class=\"bom-text\">{}. {}: {}</text>\n",
            140 + row * 60,
            line.index,
            line.label,
            line.value
        ));
    }
    svg.push_str("  </g>\n");
}

fn line_class(class: LineClass) -> &'static str {
    match class {
        LineClass::Thick => "thick",
        LineClass::Thin => "thin",
        LineClass::Outline => "outline",
        LineClass::Rung => "rung",
        LineClass::Wall => "wall",
    }
}

fn rect_class(class: RectClass) -> &'static str {
    match class {
        RectClass::Profile => "profile",
        RectClass::CutFloor => "cut-floor",
        RectClass::PlatformFloor => "plat-floor",
        RectClass::DeckFloor => "deck-floor",
        RectClass::Bracket => "bracket",
        RectClass::RungMark => "rung-mark",
        RectClass::Thin => "thin",
        RectClass::Outline => "outline",
    }
}

fn text_class(class: TextClass) -> &'static str {
    match class {
        TextClass::Title => "title",
        TextClass::Header => "header",
        TextClass::Dim => "dim-text",
    }
}

fn text_anchor(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}
