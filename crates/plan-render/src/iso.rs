//! Isometric SVG wireframe of the scene graph, for quick visual review
//! without a 3D renderer.

use scene_projector::{SceneGraph, SceneNode, SolidPrimitive};

/// Segments sampled per hoop arc.
const HOOP_SEGMENTS: usize = 24;

/// Simple isometric projection: 3D -> 2D.
fn project(x: f64, y: f64, z: f64) -> (f64, f64) {
    let angle_x: f64 = 0.6;
    let angle_z: f64 = 0.8;
    let rx = x * angle_z.cos() - z * angle_z.sin();
    let rz = x * angle_z.sin() + z * angle_z.cos();
    let py = rz * angle_x.sin() + y * angle_x.cos();
    let _depth = rz * angle_x.cos() - y * angle_x.sin();
    (rx, -py)
}

fn rotate_euler(p: [f64; 3], r: [f64; 3]) -> [f64; 3] {
    let [mut x, mut y, mut z] = p;
    // X axis
    let (sx, cx) = r[0].sin_cos();
    let (y1, z1) = (y * cx - z * sx, y * sx + z * cx);
    y = y1;
    z = z1;
    // Y axis
    let (sy, cy) = r[1].sin_cos();
    let (x1, z2) = (x * cy + z * sy, -x * sy + z * cy);
    x = x1;
    z = z2;
    // Z axis
    let (sz, cz) = r[2].sin_cos();
    let (x2, y2) = (x * cz - y * sz, x * sz + y * cz);
    [x2, y2, z]
}

/// Collect world-space wireframe segments for every solid in the tree.
fn collect_segments(node: &SceneNode, origin: [f64; 3], out: &mut Vec<([f64; 3], [f64; 3])>) {
    let base = [
        origin[0] + node.translation[0],
        origin[1] + node.translation[1],
        origin[2] + node.translation[2],
    ];

    match &node.primitive {
        Some(SolidPrimitive::Cuboid { size }) => {
            let h = [size[0] / 2.0, size[1] / 2.0, size[2] / 2.0];
            let corner = |i: usize| -> [f64; 3] {
                let local = [
                    if i & 1 == 0 { -h[0] } else { h[0] },
                    if i & 2 == 0 { -h[1] } else { h[1] },
                    if i & 4 == 0 { -h[2] } else { h[2] },
                ];
                let r = rotate_euler(local, node.rotation);
                [base[0] + r[0], base[1] + r[1], base[2] + r[2]]
            };
            const EDGES: [(usize, usize); 12] = [
                (0, 1),
                (2, 3),
                (4, 5),
                (6, 7),
                (0, 2),
                (1, 3),
                (4, 6),
                (5, 7),
                (0, 4),
                (1, 5),
                (2, 6),
                (3, 7),
            ];
            for (a, b) in EDGES {
                out.push((corner(a), corner(b)));
            }
        }
        Some(SolidPrimitive::Hoop { radius, sweep, .. }) => {
            let mut prev: Option<[f64; 3]> = None;
            for i in 0..=HOOP_SEGMENTS {
                let t = *sweep * i as f64 / HOOP_SEGMENTS as f64;
                let local = [radius * t.cos(), radius * t.sin(), 0.0];
                let r = rotate_euler(local, node.rotation);
                let p = [base[0] + r[0], base[1] + r[1], base[2] + r[2]];
                if let Some(q) = prev {
                    out.push((q, p));
                }
                prev = Some(p);
            }
        }
        None => {}
    }

    for child in &node.children {
        collect_segments(child, base, out);
    }
}

pub fn scene_to_svg(scene: &SceneGraph, width: f64, height: f64, title: &str) -> String {
    let mut segments = Vec::new();
    for node in &scene.nodes {
        collect_segments(node, [0.0; 3], &mut segments);
    }

    if segments.is_empty() {
        return format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">\
             <text x=\"10\" y=\"20\" font-family=\"monospace\" font-size=\"14\" fill=\"#ccc\">{title}</text>\
             </svg>"
        );
    }

    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;
    let projected: Vec<((f64, f64), (f64, f64))> = segments
        .iter()
        .map(|(a, b)| {
            let pa = project(a[0], a[1], a[2]);
            let pb = project(b[0], b[1], b[2]);
            for p in [pa, pb] {
                min_x = min_x.min(p.0);
                max_x = max_x.max(p.0);
                min_y = min_y.min(p.1);
                max_y = max_y.max(p.1);
            }
            (pa, pb)
        })
        .collect();

    let padding = 40.0;
    let avail_w = width - 2.0 * padding;
    let avail_h = height - 2.0 * padding - 25.0;
    let data_w = (max_x - min_x).max(0.001);
    let data_h = (max_y - min_y).max(0.001);
    let scale = (avail_w / data_w).min(avail_h / data_h);
    let offset_x = padding + (avail_w - data_w * scale) / 2.0;
    let offset_y = padding + 25.0 + (avail_h - data_h * scale) / 2.0;

    let tx = |px: f64| -> f64 { (px - min_x) * scale + offset_x };
    let ty = |py: f64| -> f64 { (py - min_y) * scale + offset_y };

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" style=\"background:#1a1a2e\">\n\
         <text x=\"{}\" y=\"20\" font-family=\"monospace\" font-size=\"13\" fill=\"#8892b0\" text-anchor=\"middle\">{title}</text>\n",
        width / 2.0
    );

    for ((ax, ay), (bx, by)) in &projected {
        svg.push_str(&format!(
            "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#64a0dc\" stroke-width=\"0.6\"/>\n",
            tx(*ax),
            ty(*ay),
            tx(*bx),
            ty(*by)
        ));
    }

    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-size=\"10\" fill=\"#5a6080\" \
         text-anchor=\"middle\">{} segments</text>\n",
        width / 2.0,
        height - 8.0,
        projected.len()
    ));
    svg.push_str("</svg>\n");
    svg
}
