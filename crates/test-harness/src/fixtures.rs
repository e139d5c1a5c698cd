use ladder_types::ParameterSet;

/// Scenario A: straight 5 m ladder with a 1.15 m exit extension.
pub fn scenario_a() -> ParameterSet {
    ParameterSet {
        total_height: 5.0,
        width_inner: 0.588,
        pitch: 0.300,
        has_exit: true,
        exit_extension: 1.15,
        has_landing: false,
        has_top_landing: false,
        has_cage: false,
        supports: Vec::new(),
        ..ParameterSet::default()
    }
}

/// Scenario B: scenario A split at 2.5 m with the top section offset 0.8 m.
pub fn scenario_b() -> ParameterSet {
    ParameterSet {
        has_landing: true,
        landing_height: 2.5,
        offset: 0.8,
        platform_depth: 0.8,
        ..scenario_a()
    }
}

/// Scenario C: scenario B with supports at 1.5 m and 4.0 m.
pub fn scenario_c() -> ParameterSet {
    ParameterSet {
        supports: vec![1.5, 4.0],
        ..scenario_b()
    }
}

/// The catalogue default plus every optional feature enabled.
pub fn fully_featured() -> ParameterSet {
    ParameterSet {
        has_landing: true,
        landing_height: 2.5,
        offset: 0.8,
        has_handrails: true,
        has_top_landing: true,
        has_cage: true,
        ..ParameterSet::default()
    }
}
