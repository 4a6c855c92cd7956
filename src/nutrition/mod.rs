//! Nutrition calculation module
//!
//! Target calculation and nutrient aggregation.

pub mod aggregate;
pub mod targets;

pub use aggregate::{round1, round_to, scale, sum};
pub use targets::{bmr, compute_targets};
