//! Workout planner
//!
//! Rotates six fixed strength templates over the training days and appends
//! one goal-dependent cardio block to each day. Fully deterministic.

use crate::models::{DaySchedule, Goal, Session, StrengthExercise, WorkoutPlan};

pub const DEFAULT_DAYS_PER_WEEK: usize = 5;

/// Training days, in order. Plans never wrap past the last one.
pub const WEEKDAYS: [&str; 6] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

pub const REST_SEC: u32 = 90;

/// Used when a set/rep scheme has no usable leading set count
pub const DEFAULT_SETS: u32 = 3;

pub const GENERAL_TIPS: [&str; 3] = [
    "Warm-up 8–10 min + mobility before lifting.",
    "Progressive overload: +2.5–5% when sets feel easy.",
    "Sleep 7–9 h; protein ~2 g/kg BW.",
];

/// A strength day template: muscle group plus (exercise, "SETSxREPS") pairs
#[derive(Debug, Clone, Copy)]
pub struct StrengthTemplate {
    pub muscle_group: &'static str,
    pub exercises: [(&'static str, &'static str); 5],
}

pub const STRENGTH_TEMPLATES: [StrengthTemplate; 6] = [
    StrengthTemplate {
        muscle_group: "upper body",
        exercises: [
            ("Bench press", "4x6-8"),
            ("Row", "4x8-10"),
            ("Shoulder press", "3x8-10"),
            ("Lat pulldown", "3x10-12"),
            ("Triceps dips", "3x10-12"),
        ],
    },
    StrengthTemplate {
        muscle_group: "lower body",
        exercises: [
            ("Back squat", "4x5-8"),
            ("Romanian deadlift", "4x6-8"),
            ("Lunge", "3x10-12"),
            ("Leg curl", "3x10-12"),
            ("Calf raise", "3x12-15"),
        ],
    },
    StrengthTemplate {
        muscle_group: "full body",
        exercises: [
            ("Deadlift", "3x3-5"),
            ("Incline press", "3x6-8"),
            ("Pull-up", "3xAMRAP"),
            ("Split squat", "3x8-10"),
            ("Plank", "3x60s"),
        ],
    },
    StrengthTemplate {
        muscle_group: "push",
        exercises: [
            ("Bench press", "4x6-8"),
            ("Overhead press", "3x6-8"),
            ("Incline DB press", "3x8-10"),
            ("Cable fly", "3x12-15"),
            ("Triceps rope", "3x12-15"),
        ],
    },
    StrengthTemplate {
        muscle_group: "pull",
        exercises: [
            ("Barbell row", "4x6-8"),
            ("Lat pulldown", "3x8-10"),
            ("Seated row", "3x10-12"),
            ("Face pull", "3x12-15"),
            ("Biceps curl", "3x10-12"),
        ],
    },
    StrengthTemplate {
        muscle_group: "legs",
        exercises: [
            ("Front squat", "4x6-8"),
            ("RDL", "4x6-8"),
            ("Leg press", "3x10-12"),
            ("Leg extension", "3x12-15"),
            ("Calf raise", "3x12-15"),
        ],
    },
];

/// Set count from a "SETSxREPS" scheme
///
/// Reads the leading digits before the first `x`. Anything unparsable, and a
/// count of zero, falls back to [`DEFAULT_SETS`].
pub fn parse_sets(scheme: &str) -> u32 {
    let head = scheme.split('x').next().unwrap_or("").trim_start();
    let digits: String = head.chars().take_while(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => DEFAULT_SETS,
    }
}

/// Cardio block appended to every training day for a goal
pub fn cardio_for(goal: Goal) -> Session {
    let (duration_min, intensity) = match goal {
        Goal::FatLoss => (25, "Z2/Z3"),
        Goal::Maintenance => (15, "Z2"),
        Goal::MuscleGain => (10, "Z1-Z2"),
        Goal::Recomposition => (20, "Z2"),
    };
    Session::Cardio {
        duration_min,
        intensity: intensity.to_string(),
    }
}

fn strength_session(template: &StrengthTemplate) -> Session {
    Session::Strength {
        muscle_group: template.muscle_group.to_string(),
        exercises: template
            .exercises
            .iter()
            .map(|(name, scheme)| StrengthExercise {
                name: name.to_string(),
                sets: parse_sets(scheme),
                reps: scheme.to_string(),
                rest_sec: REST_SEC,
            })
            .collect(),
    }
}

/// Build a weekly plan with `days_per_week` training days (at most six)
pub fn generate_workout_plan(goal: Goal, days_per_week: usize) -> WorkoutPlan {
    if days_per_week > WEEKDAYS.len() {
        tracing::debug!(days_per_week, "Truncating workout plan to {} days", WEEKDAYS.len());
    }

    let days = WEEKDAYS
        .iter()
        .take(days_per_week)
        .enumerate()
        .map(|(i, day)| DaySchedule {
            day: day.to_string(),
            sessions: vec![
                strength_session(&STRENGTH_TEMPLATES[i % STRENGTH_TEMPLATES.len()]),
                cardio_for(goal),
            ],
        })
        .collect();

    WorkoutPlan {
        days,
        general_tips: GENERAL_TIPS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sets() {
        assert_eq!(parse_sets("4x6-8"), 4);
        assert_eq!(parse_sets("3xAMRAP"), 3);
        assert_eq!(parse_sets("12x1"), 12);
        assert_eq!(parse_sets("Nx10"), DEFAULT_SETS);
        assert_eq!(parse_sets("0x10"), DEFAULT_SETS);
        assert_eq!(parse_sets(""), DEFAULT_SETS);
    }

    #[test]
    fn test_fat_loss_three_days() {
        let plan = generate_workout_plan(Goal::FatLoss, 3);
        assert_eq!(plan.days.len(), 3);
        for day in &plan.days {
            assert_eq!(day.sessions.len(), 2);
            assert!(matches!(day.sessions[0], Session::Strength { .. }));
            assert_eq!(
                day.sessions[1],
                Session::Cardio { duration_min: 25, intensity: "Z2/Z3".to_string() }
            );
        }
    }

    #[test]
    fn test_templates_rotate_in_order() {
        let plan = generate_workout_plan(Goal::Maintenance, 6);
        let groups: Vec<&str> = plan
            .days
            .iter()
            .map(|d| match &d.sessions[0] {
                Session::Strength { muscle_group, .. } => muscle_group.as_str(),
                Session::Cardio { .. } => "",
            })
            .collect();
        assert_eq!(groups, vec!["upper body", "lower body", "full body", "push", "pull", "legs"]);
        assert_eq!(plan.days[5].day, "Saturday");
    }

    #[test]
    fn test_day_count_truncates_at_six() {
        assert_eq!(generate_workout_plan(Goal::MuscleGain, 9).days.len(), 6);
        assert!(generate_workout_plan(Goal::MuscleGain, 0).days.is_empty());
        assert_eq!(generate_workout_plan(Goal::MuscleGain, DEFAULT_DAYS_PER_WEEK).days.len(), 5);
    }

    #[test]
    fn test_exercise_prescriptions() {
        let plan = generate_workout_plan(Goal::Recomposition, 3);
        let Session::Strength { exercises, .. } = &plan.days[2].sessions[0] else {
            panic!("expected strength session first");
        };
        let pull_up = &exercises[2];
        assert_eq!(pull_up.name, "Pull-up");
        assert_eq!(pull_up.sets, 3);
        assert_eq!(pull_up.reps, "3xAMRAP");
        assert_eq!(pull_up.rest_sec, 90);
        assert_eq!(plan.general_tips.len(), 3);
    }

    #[test]
    fn test_cardio_per_goal() {
        assert_eq!(cardio_for(Goal::Maintenance), Session::Cardio { duration_min: 15, intensity: "Z2".into() });
        assert_eq!(cardio_for(Goal::MuscleGain), Session::Cardio { duration_min: 10, intensity: "Z1-Z2".into() });
        assert_eq!(cardio_for(Goal::Recomposition), Session::Cardio { duration_min: 20, intensity: "Z2".into() });
    }
}
