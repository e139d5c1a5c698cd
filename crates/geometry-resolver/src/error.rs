/// A parameter value outside its domain.
///
/// The only error kind the core surfaces. Always detected before any
/// geometry is produced; a failed resolution leaves no partial model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidParameter {
    #[error("{name} must be positive (got {value})")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error("{name} must not be negative (got {value})")]
    NegativeDimension { name: &'static str, value: f64 },

    #[error("landing height {landing_height} outside (0, {total_height}]")]
    LandingHeightOutOfRange {
        landing_height: f64,
        total_height: f64,
    },
}
