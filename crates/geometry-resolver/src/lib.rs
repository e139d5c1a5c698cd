//! Parametric ladder geometry resolver.
//!
//! Turns a [`ParameterSet`](ladder_types::ParameterSet) into a canonical
//! [`GeometryModel`](ladder_types::GeometryModel): sections, rung positions,
//! bracket placements, cage extents, and bill-of-materials quantities. Both
//! projectors consume this model and derive nothing geometric themselves.

pub mod bom;
pub mod error;
pub mod resolve;

pub use error::InvalidParameter;
pub use resolve::{resolve, LANDING_STUB, RUNG_SEED};
