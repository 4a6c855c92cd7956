//! Workout plan model
//!
//! Weekly schedule of strength and cardio sessions.

use serde::{Deserialize, Serialize};

/// A single strength exercise prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthExercise {
    pub name: String,
    pub sets: u32,
    /// Full "NxREPS" prescription, e.g. "4x6-8" or "3xAMRAP"
    pub reps: String,
    pub rest_sec: u32,
}

/// A training session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Session {
    Strength {
        muscle_group: String,
        exercises: Vec<StrengthExercise>,
    },
    Cardio {
        duration_min: u32,
        intensity: String,
    },
}

impl Session {
    pub fn is_cardio(&self) -> bool {
        matches!(self, Session::Cardio { .. })
    }
}

/// Sessions scheduled on one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: String,
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub days: Vec<DaySchedule>,
    pub general_tips: Vec<String>,
}
