/// Default tolerance for length comparisons, meters.
pub const EPS: f64 = 1e-9;

/// Assert two lengths agree to the default tolerance.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert_close_eps(actual, expected, EPS);
}

#[track_caller]
pub fn assert_close_eps(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() < eps,
        "expected {expected}, got {actual} (tolerance {eps})"
    );
}
