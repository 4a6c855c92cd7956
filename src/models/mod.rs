//! Data models
//!
//! Value types for profiles, foods and plans, plus the persisted food log entry.

mod diet_plan;
mod food;
mod log_entry;
mod nutrition;
mod profile;
mod workout_plan;

pub use diet_plan::{DietPlan, MealItem, MealResult, MealShare, MEAL_SHARES};
pub use food::{DietTag, Food};
pub use log_entry::{LogEntry, LogEntryCreate};
pub use nutrition::Nutrients;
pub use profile::{Activity, Goal, Sex, Targets, UserProfile};
pub use workout_plan::{DaySchedule, Session, StrengthExercise, WorkoutPlan};
