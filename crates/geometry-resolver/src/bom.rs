use ladder_types::{BillOfMaterials, ParameterSet, Section};

/// Aggregate stock and fitting quantities.
///
/// Profile length convention: rails are cut as separate physical lengths
/// per section, so the total is the sum of `2 × rail_length` over sections
/// (extensions included). The bracket count is nominal: two fittings per
/// intended support height, placed or not.
pub fn bill_of_materials(sections: &[Section], params: &ParameterSet) -> BillOfMaterials {
    let profile_length_m: f64 = sections.iter().map(|s| 2.0 * s.rail_length).sum();
    let rung_count = sections.iter().map(|s| s.rungs.len()).sum();

    BillOfMaterials {
        profile_length_m,
        rung_count,
        bracket_count: 2 * params.supports.len(),
        platform_depth: params.has_landing.then_some(params.platform_depth),
        top_landing_depth: params.has_top_landing.then_some(params.top_landing_depth),
        has_cage: params.has_cage,
    }
}

#[cfg(test)]
mod tests {
    use crate::resolve::resolve;
    use ladder_types::ParameterSet;

    #[test]
    fn single_section_profile_length() {
        let params = ParameterSet {
            has_exit: true,
            exit_extension: 1.15,
            ..ParameterSet::default()
        };
        let model = resolve(&params).unwrap();
        // One pair of rails, 5.0 + 1.15 each.
        assert!((model.bom.profile_length_m - 12.3).abs() < 1e-9);
    }

    #[test]
    fn split_profile_length_counts_each_cut() {
        let params = ParameterSet {
            has_landing: true,
            landing_height: 2.5,
            ..ParameterSet::default()
        };
        let model = resolve(&params).unwrap();
        // Bottom pair: 2.5 + 1.1 stub. Top pair: 2.5 + 1.15 exit.
        let expected = 2.0 * (2.5 + 1.1) + 2.0 * (2.5 + 1.15);
        assert!((model.bom.profile_length_m - expected).abs() < 1e-9);
    }

    #[test]
    fn bracket_count_is_nominal() {
        let params = ParameterSet {
            supports: vec![1.0, 2.0, 99.0],
            ..ParameterSet::default()
        };
        let model = resolve(&params).unwrap();
        assert_eq!(model.bom.bracket_count, 6);
    }
}
