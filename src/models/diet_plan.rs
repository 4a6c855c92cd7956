//! Diet plan model
//!
//! Output of the meal allocator: one day of meals with per-meal and per-day totals.

use serde::{Deserialize, Serialize};

use super::Nutrients;

/// Fraction of the daily budget assigned to one meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealShare {
    pub name: &'static str,
    pub share: f64,
}

/// Fixed meal split, in serving order. Shares sum to 1.0.
pub const MEAL_SHARES: [MealShare; 4] = [
    MealShare { name: "Breakfast", share: 0.25 },
    MealShare { name: "Lunch", share: 0.35 },
    MealShare { name: "Dinner", share: 0.30 },
    MealShare { name: "Snack", share: 0.10 },
];

/// A food portion within a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    pub food: String,
    pub grams: f64,
    #[serde(flatten)]
    pub nutrients: Nutrients,
}

/// One allocated meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealResult {
    pub name: String,
    pub items: Vec<MealItem>,
    pub totals: Nutrients,
}

/// A full day of meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    pub meals: Vec<MealResult>,
    pub day_totals: Nutrients,
    pub notes: Vec<String>,
}
