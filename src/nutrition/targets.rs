//! Daily energy and macro targets
//!
//! Mifflin-St Jeor BMR, activity multiplier and goal adjustment, with macros
//! derived from body weight and carbohydrates taking the remaining energy.

use crate::models::{Sex, Targets, UserProfile};

/// Lowest daily energy target ever produced
pub const MIN_DAILY_KCAL: f64 = 1200.0;

/// Protein grams per kg body weight
pub const PROTEIN_G_PER_KG: f64 = 2.0;

/// Fat grams per kg body weight
pub const FAT_G_PER_KG: f64 = 0.9;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Basal metabolic rate in kcal/day
///
/// The `X` offset is the midpoint of the male and female constants. It has
/// no published basis and is kept unvalidated.
pub fn bmr(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    let offset = match profile.sex {
        Sex::M => 5.0,
        Sex::F => -161.0,
        Sex::X => -78.0,
    };
    base + offset
}

/// Compute daily targets for a profile
pub fn compute_targets(profile: &UserProfile) -> Targets {
    let maintenance = bmr(profile) * profile.activity.multiplier();
    let kcal = (maintenance + profile.goal.kcal_adjustment()).round().max(MIN_DAILY_KCAL);

    let protein_g = (PROTEIN_G_PER_KG * profile.weight_kg).round();
    let fat_g = (FAT_G_PER_KG * profile.weight_kg).round();

    let remaining = kcal - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT;
    let carbs_g = (remaining / KCAL_PER_G_CARBS).max(0.0).round();

    Targets {
        kcal: kcal as i64,
        protein_g: protein_g as i64,
        fat_g: fat_g as i64,
        carbs_g: carbs_g as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Goal};

    fn profile(sex: Sex, weight_kg: f64, activity: Activity, goal: Goal) -> UserProfile {
        UserProfile {
            sex,
            age: 24,
            height_cm: 176.0,
            weight_kg,
            activity,
            goal,
        }
    }

    #[test]
    fn test_bmr_offsets_by_sex() {
        let m = bmr(&profile(Sex::M, 75.0, Activity::Low, Goal::Maintenance));
        let f = bmr(&profile(Sex::F, 75.0, Activity::Low, Goal::Maintenance));
        let x = bmr(&profile(Sex::X, 75.0, Activity::Low, Goal::Maintenance));
        assert_eq!(m, 1735.0);
        assert_eq!(f, 1569.0);
        assert_eq!(x, 1652.0);
    }

    #[test]
    fn test_reference_profile() {
        // BMR 1735 * 1.5 = 2602.5, rounds up
        let t = compute_targets(&profile(Sex::M, 75.0, Activity::Moderate, Goal::Recomposition));
        assert_eq!(t.kcal, 2603);
        assert_eq!(t.protein_g, 150);
        assert_eq!(t.fat_g, 68);
        // (2603 - 600 - 612) / 4 = 347.75
        assert_eq!(t.carbs_g, 348);
    }

    #[test]
    fn test_goal_adjustments() {
        let base = compute_targets(&profile(Sex::F, 60.0, Activity::High, Goal::Maintenance));
        let cut = compute_targets(&profile(Sex::F, 60.0, Activity::High, Goal::FatLoss));
        let bulk = compute_targets(&profile(Sex::F, 60.0, Activity::High, Goal::MuscleGain));
        assert_eq!(base.kcal - cut.kcal, 400);
        assert_eq!(bulk.kcal - base.kcal, 300);
    }

    #[test]
    fn test_kcal_floor() {
        let tiny = UserProfile {
            sex: Sex::F,
            age: 90,
            height_cm: 120.0,
            weight_kg: 30.0,
            activity: Activity::Low,
            goal: Goal::FatLoss,
        };
        assert_eq!(compute_targets(&tiny).kcal, 1200);
    }

    #[test]
    fn test_carbs_clamped_at_zero() {
        // Heavy, short, old: protein + fat energy exceeds the floored budget
        let p = UserProfile {
            sex: Sex::F,
            age: 95,
            height_cm: 100.0,
            weight_kg: 160.0,
            activity: Activity::Low,
            goal: Goal::FatLoss,
        };
        let t = compute_targets(&p);
        assert!(t.protein_g * 4 + t.fat_g * 9 > t.kcal);
        assert_eq!(t.carbs_g, 0);
    }

    #[test]
    fn test_macros_follow_weight() {
        for w in [41.3, 55.0, 72.5, 88.8, 120.0] {
            let t = compute_targets(&profile(Sex::X, w, Activity::Moderate, Goal::Maintenance));
            assert_eq!(t.protein_g, (2.0 * w).round() as i64);
            assert_eq!(t.fat_g, (0.9 * w).round() as i64);
            assert!(t.kcal >= 1200);
            assert!(t.carbs_g >= 0);
        }
    }
}
