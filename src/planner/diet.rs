//! Meal allocator
//!
//! Splits the daily targets over four meals and sizes one protein, carb, fat
//! and vegetable/fruit portion per meal:
//!
//! - the protein portion covers the meal's protein target;
//! - whatever energy is left goes 75% to carbohydrate and 25% to fat, each
//!   converted to grams of the chosen food;
//! - the vegetable/fruit portion is a fixed 100 g (large meals) or 50 g.
//!
//! All sized portions are multiples of 5 g.

use crate::catalog::{exclude_allergens, FoodCatalog};
use crate::models::{
    DietPlan, DietTag, Food, MealItem, MealResult, MealShare, Nutrients, Targets, UserProfile,
    MEAL_SHARES,
};
use crate::nutrition::targets::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT};
use crate::nutrition::{compute_targets, round_to, scale, sum};

use super::picker::FoodPicker;

/// Minimum protein per 100 g for a protein source
pub const PROTEIN_SOURCE_MIN_G: f64 = 8.0;
/// Minimum carbohydrate per 100 g for a carb source
pub const CARB_SOURCE_MIN_G: f64 = 15.0;
/// Minimum fat per 100 g for a fat source
pub const FAT_SOURCE_MIN_G: f64 = 15.0;
/// Name fragments identifying vegetable/fruit foods
pub const VEG_FRUIT_KEYWORDS: [&str; 4] = ["broccoli", "spinach", "apple", "banana"];

/// Portion sizes are rounded to this many grams
pub const PORTION_STEP_G: f64 = 5.0;
/// Share of leftover meal energy given to carbohydrate (the rest goes to fat)
pub const CARB_ENERGY_SHARE: f64 = 0.75;
pub const FAT_ENERGY_SHARE: f64 = 0.25;

/// Meals above this energy target get the large vegetable portion
pub const LARGE_MEAL_KCAL: f64 = 350.0;
pub const VEG_LARGE_G: f64 = 100.0;
pub const VEG_SMALL_G: f64 = 50.0;

pub const PLAN_NOTES: [&str; 2] = [
    "Adjust portions ±10% based on hunger and energy.",
    "Hydration: 2–3 L/day; add veggies if fiber is low.",
];

/// Candidate foods per role, each falling back to the whole pool when empty
#[derive(Debug, Clone)]
pub struct CandidatePools {
    pub protein: Vec<Food>,
    pub carb: Vec<Food>,
    pub fat: Vec<Food>,
    pub veg_fruit: Vec<Food>,
}

impl CandidatePools {
    pub fn from_pool(pool: &[Food]) -> Self {
        let select = |keep: &dyn Fn(&Food) -> bool| -> Vec<Food> {
            let subset: Vec<Food> = pool.iter().filter(|f| keep(f)).cloned().collect();
            if subset.is_empty() {
                pool.to_vec()
            } else {
                subset
            }
        };

        Self {
            protein: select(&|f| f.per100.protein_g >= PROTEIN_SOURCE_MIN_G),
            carb: select(&|f| f.per100.carbs_g >= CARB_SOURCE_MIN_G),
            fat: select(&|f| f.per100.fat_g >= FAT_SOURCE_MIN_G),
            veg_fruit: select(&|f| is_veg_or_fruit(f)),
        }
    }
}

fn is_veg_or_fruit(food: &Food) -> bool {
    let name = food.name.to_lowercase();
    VEG_FRUIT_KEYWORDS.iter().any(|k| name.contains(k))
}

/// Per-meal slice of the daily targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealTargets {
    pub kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl MealTargets {
    pub fn for_share(targets: &Targets, share: f64) -> Self {
        Self {
            kcal: targets.kcal as f64 * share,
            protein_g: targets.protein_g as f64 * share,
            fat_g: targets.fat_g as f64 * share,
            carbs_g: targets.carbs_g as f64 * share,
        }
    }
}

/// Grams of a food needed to supply `target_g` of a macro present at
/// `density_per100` grams per 100 g, rounded to the portion step.
/// A food without that macro yields 0 g.
pub fn portion_grams(target_g: f64, density_per100: f64) -> f64 {
    if density_per100 <= 0.0 {
        return 0.0;
    }
    round_to(target_g / (density_per100 / 100.0), PORTION_STEP_G)
}

/// Fixed vegetable/fruit portion for a meal
pub fn veg_fruit_grams(meal_kcal: f64) -> f64 {
    if meal_kcal > LARGE_MEAL_KCAL {
        VEG_LARGE_G
    } else {
        VEG_SMALL_G
    }
}

fn pick_from<'a, P: FoodPicker + ?Sized>(candidates: &'a [Food], picker: &mut P) -> Option<&'a Food> {
    if candidates.is_empty() {
        return None;
    }
    let idx = picker.pick(candidates.len()).min(candidates.len() - 1);
    candidates.get(idx)
}

fn item(food: Option<&Food>, grams: f64) -> Option<MealItem> {
    let food = food?;
    if grams <= 0.0 {
        return None;
    }
    Some(MealItem {
        food: food.name.clone(),
        grams,
        nutrients: scale(&food.per100, grams),
    })
}

/// Allocate one meal
pub fn allocate_meal<P: FoodPicker + ?Sized>(
    meal: &MealShare,
    targets: &Targets,
    pools: &CandidatePools,
    picker: &mut P,
) -> MealResult {
    let t = MealTargets::for_share(targets, meal.share);

    let protein = pick_from(&pools.protein, picker);
    let carb = pick_from(&pools.carb, picker);
    let fat = pick_from(&pools.fat, picker);
    let veg = pick_from(&pools.veg_fruit, picker);

    let grams_p = protein.map_or(0.0, |f| portion_grams(t.protein_g, f.per100.protein_g));
    let nut_p = protein.map_or_else(Nutrients::zero, |f| scale(&f.per100, grams_p));

    let kcal_rem = (t.kcal - nut_p.kcal).max(0.0);
    let carb_target_g = kcal_rem * CARB_ENERGY_SHARE / KCAL_PER_G_CARBS;
    let fat_target_g = kcal_rem * FAT_ENERGY_SHARE / KCAL_PER_G_FAT;

    let grams_c = carb.map_or(0.0, |f| portion_grams(carb_target_g, f.per100.carbs_g));
    let grams_f = fat.map_or(0.0, |f| portion_grams(fat_target_g, f.per100.fat_g));
    let grams_v = veg_fruit_grams(t.kcal);

    tracing::debug!(
        meal = meal.name,
        kcal_target = t.kcal,
        protein_target = t.protein_g,
        kcal_remaining = kcal_rem,
        grams_p,
        grams_c,
        grams_f,
        grams_v,
        "Allocated meal portions"
    );

    let items: Vec<MealItem> = [
        item(protein, grams_p),
        item(carb, grams_c),
        item(fat, grams_f),
        item(veg, grams_v),
    ]
    .into_iter()
    .flatten()
    .collect();

    let totals = sum(items.iter().map(|i| i.nutrients));

    MealResult {
        name: meal.name.to_string(),
        items,
        totals,
    }
}

/// Build a one-day meal plan for `profile` on `diet`, excluding foods with
/// any allergen in the comma-separated `allergies` list
pub fn generate_diet_plan<P: FoodPicker + ?Sized>(
    profile: &UserProfile,
    diet: DietTag,
    allergies: &str,
    catalog: &FoodCatalog,
    picker: &mut P,
) -> DietPlan {
    let targets = compute_targets(profile);
    let pool = exclude_allergens(catalog.by_diet(diet), allergies);
    if pool.is_empty() {
        tracing::warn!(diet = diet.as_str(), allergies, "No foods left after filtering");
    }
    let pools = CandidatePools::from_pool(&pool);

    let meals: Vec<MealResult> = MEAL_SHARES
        .iter()
        .map(|meal| allocate_meal(meal, &targets, &pools, &mut *picker))
        .collect();

    let day_totals = sum(meals.iter().map(|m| m.totals));

    tracing::debug!(
        kcal_target = targets.kcal,
        kcal_planned = day_totals.kcal,
        pool_size = pool.len(),
        "Generated diet plan"
    );

    DietPlan {
        meals,
        day_totals,
        notes: PLAN_NOTES.iter().map(|s| s.to_string()).collect(),
    }
}
