use tracing::{debug, instrument, warn};

use ladder_types::{
    CageExtent, ExitSpec, GeometryModel, ParameterSet, PlatformSpec, Section, TopLandingSpec,
};

use crate::bom::bill_of_materials;
use crate::error::InvalidParameter;

/// Height of the first rung above a section's base.
pub const RUNG_SEED: f64 = 0.15;

/// Rail stub above the landing on the ground section of a split: the
/// vertical posts framing the intermediate platform opening.
pub const LANDING_STUB: f64 = 1.1;

/// Resolve a parameter set into the canonical geometry model.
///
/// Total, deterministic, side-effect-free. Identical inputs yield
/// byte-identical models.
#[instrument(skip(params), fields(total_height = params.total_height, has_landing = params.has_landing))]
pub fn resolve(params: &ParameterSet) -> Result<GeometryModel, InvalidParameter> {
    validate(params)?;

    let outer_width = params.width_inner + 2.0 * params.rail_width;
    let mut sections = split_sections(params);

    for section in &mut sections {
        section.rungs = rung_heights(section.nominal_span, params.pitch);
        section.cage = cage_extent(section, params);
    }
    assign_brackets(&mut sections, &params.supports);

    let horizontal_extent = if params.has_landing {
        outer_width + params.offset.abs() + params.platform_depth
    } else {
        outer_width
    };

    let platform = params.has_landing.then(|| PlatformSpec {
        height: params.landing_height,
        lateral_offset: params.offset,
        depth: params.platform_depth,
    });

    let top_landing = params.has_top_landing.then(|| TopLandingSpec {
        height: params.total_height,
        lateral_offset: if params.has_landing { params.offset } else { 0.0 },
        depth: params.top_landing_depth,
    });

    let exit = params.has_exit.then(|| ExitSpec {
        extension: params.exit_extension,
        has_handrails: params.has_handrails,
    });

    let bom = bill_of_materials(&sections, params);
    debug!(
        sections = sections.len(),
        rungs = bom.rung_count,
        profile_m = bom.profile_length_m,
        "resolved ladder geometry"
    );

    Ok(GeometryModel {
        total_height: params.total_height,
        width_inner: params.width_inner,
        rail_width: params.rail_width,
        rail_depth: params.rail_depth,
        rung_size: params.rung_size,
        pitch: params.pitch,
        wall_distance: params.wall_distance,
        outer_width,
        horizontal_extent,
        sections,
        platform,
        top_landing,
        exit,
        bom,
    })
}

/// Boundary validation. Runs before any geometry is derived.
fn validate(params: &ParameterSet) -> Result<(), InvalidParameter> {
    let positive = [
        ("total_height", params.total_height),
        ("width_inner", params.width_inner),
        ("pitch", params.pitch),
        ("rail_width", params.rail_width),
        ("rail_depth", params.rail_depth),
        ("rung_size", params.rung_size),
    ];
    for (name, value) in positive {
        if value <= 0.0 {
            return Err(InvalidParameter::NonPositiveDimension { name, value });
        }
    }

    let non_negative = [
        ("wall_distance", params.wall_distance),
        ("exit_extension", params.exit_extension),
        ("cage_start_height", params.cage_start_height),
    ];
    for (name, value) in non_negative {
        if value < 0.0 {
            return Err(InvalidParameter::NegativeDimension { name, value });
        }
    }

    if params.has_landing {
        if params.landing_height <= 0.0 || params.landing_height > params.total_height {
            return Err(InvalidParameter::LandingHeightOutOfRange {
                landing_height: params.landing_height,
                total_height: params.total_height,
            });
        }
        if params.platform_depth <= 0.0 {
            return Err(InvalidParameter::NonPositiveDimension {
                name: "platform_depth",
                value: params.platform_depth,
            });
        }
    }

    if params.has_top_landing && params.top_landing_depth <= 0.0 {
        return Err(InvalidParameter::NonPositiveDimension {
            name: "top_landing_depth",
            value: params.top_landing_depth,
        });
    }

    Ok(())
}

/// Partition the climb into sections. One without a landing, two with.
fn split_sections(params: &ParameterSet) -> Vec<Section> {
    let mut sections = Vec::with_capacity(2);
    if params.has_landing {
        sections.push(make_section(
            0.0,
            params.landing_height,
            0.0,
            true,
            false,
            params,
        ));
        sections.push(make_section(
            params.landing_height,
            params.total_height - params.landing_height,
            params.offset,
            false,
            true,
            params,
        ));
    } else {
        sections.push(make_section(
            0.0,
            params.total_height,
            0.0,
            true,
            true,
            params,
        ));
    }
    sections
}

fn make_section(
    start_height: f64,
    nominal_span: f64,
    lateral_offset: f64,
    is_ground: bool,
    is_topmost: bool,
    params: &ParameterSet,
) -> Section {
    // The exit extension and the landing stub never combine on one section:
    // a topmost section takes the exit, the ground section of a split takes
    // the stub.
    let rail_length = if is_topmost && params.has_exit {
        nominal_span + params.exit_extension
    } else if is_ground && params.has_landing {
        nominal_span + LANDING_STUB
    } else {
        nominal_span
    };

    Section {
        start_height,
        nominal_span,
        rail_length,
        lateral_offset,
        is_ground,
        is_topmost,
        rungs: Vec::new(),
        brackets: Vec::new(),
        cage: None,
    }
}

/// Forward sweep from the seed height. Each section restarts its own seed,
/// so a split ladder's rung phase is not continuous across the platform.
/// Documented behavior, not a defect.
fn rung_heights(nominal_span: f64, pitch: f64) -> Vec<f64> {
    let mut heights = Vec::new();
    let mut h = RUNG_SEED;
    while h < nominal_span {
        heights.push(h);
        h += pitch;
    }
    heights
}

/// Assign each support height to the first section, bottom-up, whose rail
/// range contains it. A height exactly on a section boundary therefore
/// belongs to the lower section. Heights beyond every section place no
/// geometry but remain in the parameter set's intended-fitting list.
fn assign_brackets(sections: &mut [Section], supports: &[f64]) {
    for &height in supports {
        let placed = sections.iter_mut().find(|s| {
            height >= s.start_height && height <= s.start_height + s.rail_length
        });
        match placed {
            Some(section) => section.brackets.push(height - section.start_height),
            None => warn!(height, "support height beyond built structure, not placed"),
        }
    }
}

/// The ground section starts its cage at the configured height; any other
/// section continues a cage already established below, starting at its own
/// base.
fn cage_extent(section: &Section, params: &ParameterSet) -> Option<CageExtent> {
    if !params.has_cage {
        return None;
    }
    let start = if section.is_ground {
        params.cage_start_height
    } else {
        0.0
    };
    (section.rail_length > start).then(|| CageExtent {
        start,
        end: section.rail_length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rung_sweep_bounds() {
        let rungs = rung_heights(5.0, 0.3);
        assert_eq!(rungs.len(), 17);
        assert!((rungs[0] - 0.15).abs() < 1e-12);
        assert!(rungs.iter().all(|&r| r < 5.0));
        assert!(rungs.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn rung_sweep_short_span_is_empty() {
        assert!(rung_heights(0.1, 0.3).is_empty());
    }

    #[test]
    fn boundary_support_goes_to_lower_section() {
        let params = ParameterSet {
            has_landing: true,
            landing_height: 2.5,
            supports: vec![2.5],
            ..ParameterSet::default()
        };
        let model = resolve(&params).unwrap();
        assert_eq!(model.sections[0].brackets, vec![2.5]);
        assert!(model.sections[1].brackets.is_empty());
    }

    #[test]
    fn out_of_range_support_places_nothing_but_counts() {
        let params = ParameterSet {
            supports: vec![1.5, 40.0],
            ..ParameterSet::default()
        };
        let model = resolve(&params).unwrap();
        assert_eq!(model.sections[0].brackets, vec![1.5]);
        assert_eq!(model.bom.bracket_count, 4);
    }
}
