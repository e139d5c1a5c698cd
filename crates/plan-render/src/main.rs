//! Generate SVG outputs for the default ladder configurations: fabrication
//! plans from the drawing projector and isometric wireframes of the scene
//! graph.

mod iso;
mod svg;

use std::fs;

use geometry_resolver::resolve;
use ladder_types::{GeometryModel, ParameterSet};

/// Print the resolved quantities, one line per configuration.
fn report(name: &str, model: &GeometryModel) {
    let bom = &model.bom;
    println!(
        "  {name}: {sections} section(s), {rungs} rungs, {brackets} brackets, profile {profile:.2} m",
        sections = model.sections.len(),
        rungs = bom.rung_count,
        brackets = bom.bracket_count,
        profile = bom.profile_length_m,
    );
    if let Some(depth) = bom.platform_depth {
        println!("    intermediate platform: {:.0} mm deep", depth * 1000.0);
    }
    if bom.has_cage {
        println!("    safety cage installed");
    }
}

fn emit(name: &str, title: &str, params: &ParameterSet) {
    let model = resolve(params).expect("render configurations are valid");

    let drawing = drawing_projector::project(&model);
    fs::write(
        format!("docs/plan_{name}.svg"),
        svg::drawing_to_svg(&drawing),
    )
    .unwrap();

    let scene = scene_projector::project(&model);
    fs::write(
        format!("docs/scene_{name}.svg"),
        iso::scene_to_svg(&scene, 800.0, 600.0, title),
    )
    .unwrap();

    report(name, &model);
}

fn main() {
    fs::create_dir_all("docs").expect("create docs dir");

    println!("=== Ladder configurations ===");

    // 1. Catalogue default: straight 5 m ladder, exit extension, cage.
    emit("default", "Vertical Ladder (5 m, cage)", &ParameterSet::default());

    // 2. Split ladder: landing at 2.5 m, top section offset 0.8 m.
    emit(
        "split",
        "Split Ladder (landing at 2.5 m)",
        &ParameterSet {
            has_landing: true,
            landing_height: 2.5,
            offset: 0.8,
            ..ParameterSet::default()
        },
    );

    // 3. Left-offset split: negative lateral offset grows the other way.
    emit(
        "split_left",
        "Split Ladder (offset -0.8 m)",
        &ParameterSet {
            has_landing: true,
            landing_height: 2.5,
            offset: -0.8,
            has_handrails: true,
            ..ParameterSet::default()
        },
    );

    println!("\nSVGs written to docs/");
}
