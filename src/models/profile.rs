//! User profile model
//!
//! Anthropometric inputs for target calculation plus the stated goal.

use serde::{Deserialize, Serialize};

/// Sex used by the BMR formula (`X` = non-binary / unspecified)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
    X,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::M => "M",
            Sex::F => "F",
            Sex::X => "X",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Some(Sex::M),
            "f" | "female" => Some(Sex::F),
            "x" | "other" | "unspecified" => Some(Sex::X),
            _ => None,
        }
    }
}

/// Daily activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Low,
    Moderate,
    High,
}

impl Activity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Low => "Low",
            Activity::Moderate => "Moderate",
            Activity::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Activity::Low),
            "moderate" => Some(Activity::Moderate),
            "high" => Some(Activity::High),
            _ => None,
        }
    }

    /// Multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            Activity::Low => 1.2,
            Activity::Moderate => 1.5,
            Activity::High => 1.75,
        }
    }
}

/// Training / body composition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Fat loss")]
    FatLoss,
    Maintenance,
    #[serde(rename = "Muscle gain")]
    MuscleGain,
    Recomposition,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::FatLoss => "Fat loss",
            Goal::Maintenance => "Maintenance",
            Goal::MuscleGain => "Muscle gain",
            Goal::Recomposition => "Recomposition",
        }
    }

    /// Accepts "Fat loss", "fat_loss", "fat-loss" and the like
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect();
        match normalized.as_str() {
            "fat loss" => Some(Goal::FatLoss),
            "maintenance" => Some(Goal::Maintenance),
            "muscle gain" => Some(Goal::MuscleGain),
            "recomposition" | "recomp" => Some(Goal::Recomposition),
            _ => None,
        }
    }

    /// Daily kcal adjustment on top of maintenance energy
    pub fn kcal_adjustment(&self) -> f64 {
        match self {
            Goal::FatLoss => -400.0,
            Goal::Maintenance => 0.0,
            Goal::MuscleGain => 300.0,
            Goal::Recomposition => 0.0,
        }
    }
}

/// Inputs for [`crate::nutrition::compute_targets`]
///
/// Age, height and weight are not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub sex: Sex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: Activity,
    pub goal: Goal,
}

/// Daily energy and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targets {
    pub kcal: i64,
    pub protein_g: i64,
    pub fat_g: i64,
    pub carbs_g: i64,
}
