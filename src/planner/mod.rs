//! Planning engine
//!
//! Meal allocation and workout scheduling. Pure and synchronous; the only
//! source of variation is the injected [`FoodPicker`].

pub mod diet;
pub mod picker;
pub mod workout;

pub use diet::{generate_diet_plan, CandidatePools};
pub use picker::{FoodPicker, ScriptedPicker};
pub use workout::{generate_workout_plan, DEFAULT_DAYS_PER_WEEK};
