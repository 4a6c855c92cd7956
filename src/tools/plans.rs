//! Planning tools
//!
//! Targets, diet plan and workout plan requests with string-typed inputs.

use serde::Serialize;

use crate::catalog::FoodCatalog;
use crate::models::{Activity, DietPlan, DietTag, Goal, Sex, Targets, UserProfile, WorkoutPlan};
use crate::nutrition::{bmr, compute_targets};
use crate::planner::{generate_diet_plan, generate_workout_plan, FoodPicker};

/// Raw profile fields as received from a client
#[derive(Debug, Clone)]
pub struct ProfileInput<'a> {
    pub sex: &'a str,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: &'a str,
    pub goal: &'a str,
}

/// Response for compute_targets
#[derive(Debug, Serialize)]
pub struct TargetsResponse {
    pub profile: UserProfile,
    pub bmr: f64,
    pub targets: Targets,
}

/// Response for generate_diet_plan
#[derive(Debug, Serialize)]
pub struct DietPlanResponse {
    pub diet: DietTag,
    pub allergies: Vec<String>,
    pub targets: Targets,
    pub plan: DietPlan,
}

/// Response for generate_workout_plan
#[derive(Debug, Serialize)]
pub struct WorkoutPlanResponse {
    pub goal: Goal,
    pub days_per_week: usize,
    pub plan: WorkoutPlan,
}

pub fn parse_goal(goal: &str) -> Result<Goal, String> {
    Goal::from_str(goal).ok_or_else(|| {
        format!(
            "Invalid goal '{}'. Expected one of: Fat loss, Maintenance, Muscle gain, Recomposition",
            goal
        )
    })
}

pub fn parse_diet(diet: &str) -> Result<DietTag, String> {
    DietTag::from_str(diet)
        .ok_or_else(|| format!("Invalid diet '{}'. Expected one of: omnivore, vegetarian, vegan", diet))
}

/// Validate and convert raw profile fields
pub fn parse_profile(input: &ProfileInput) -> Result<UserProfile, String> {
    let sex = Sex::from_str(input.sex)
        .ok_or_else(|| format!("Invalid sex '{}'. Expected one of: M, F, X", input.sex))?;
    let activity = Activity::from_str(input.activity).ok_or_else(|| {
        format!("Invalid activity '{}'. Expected one of: Low, Moderate, High", input.activity)
    })?;
    let goal = parse_goal(input.goal)?;

    if input.age == 0 {
        return Err("Age must be greater than zero".to_string());
    }
    if !(input.height_cm > 0.0) {
        return Err("Height must be greater than zero".to_string());
    }
    if !(input.weight_kg > 0.0) {
        return Err("Weight must be greater than zero".to_string());
    }

    Ok(UserProfile {
        sex,
        age: input.age,
        height_cm: input.height_cm,
        weight_kg: input.weight_kg,
        activity,
        goal,
    })
}

pub fn compute_targets_tool(input: &ProfileInput) -> Result<TargetsResponse, String> {
    let profile = parse_profile(input)?;
    Ok(TargetsResponse {
        bmr: bmr(&profile),
        targets: compute_targets(&profile),
        profile,
    })
}

pub fn generate_diet_plan_tool<P: FoodPicker + ?Sized>(
    input: &ProfileInput,
    diet: &str,
    allergies: &str,
    catalog: &FoodCatalog,
    picker: &mut P,
) -> Result<DietPlanResponse, String> {
    let profile = parse_profile(input)?;
    let diet = parse_diet(diet)?;
    let plan = generate_diet_plan(&profile, diet, allergies, catalog, picker);

    let mut allergies: Vec<String> = crate::catalog::parse_allergies(allergies).into_iter().collect();
    allergies.sort();

    Ok(DietPlanResponse {
        diet,
        allergies,
        targets: compute_targets(&profile),
        plan,
    })
}

pub fn generate_workout_plan_tool(goal: &str, days_per_week: usize) -> Result<WorkoutPlanResponse, String> {
    let goal = parse_goal(goal)?;
    Ok(WorkoutPlanResponse {
        goal,
        days_per_week,
        plan: generate_workout_plan(goal, days_per_week),
    })
}
