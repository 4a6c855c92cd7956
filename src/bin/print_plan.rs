//! Print targets, a diet plan and a workout plan as JSON
//!
//! Usage: print_plan SEX AGE HEIGHT_CM WEIGHT_KG ACTIVITY GOAL DIET [ALLERGIES] [--seed N] [--days N]

use rand::rngs::StdRng;
use rand::SeedableRng;

use fitplan::catalog::FoodCatalog;
use fitplan::config::Config;
use fitplan::tools::plans::{self, ProfileInput};

const USAGE: &str =
    "Usage: print_plan SEX AGE HEIGHT_CM WEIGHT_KG ACTIVITY GOAL DIET [ALLERGIES] [--seed N] [--days N]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut positional = Vec::new();
    let mut seed: Option<u64> = None;
    let mut days: Option<usize> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => seed = Some(args.next().ok_or(USAGE)?.parse()?),
            "--days" => days = Some(args.next().ok_or(USAGE)?.parse()?),
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() < 7 {
        return Err(USAGE.into());
    }

    let input = ProfileInput {
        sex: &positional[0],
        age: positional[1].parse()?,
        height_cm: positional[2].parse()?,
        weight_kg: positional[3].parse()?,
        activity: &positional[4],
        goal: &positional[5],
    };
    let diet = &positional[6];
    let allergies = positional.get(7).map(String::as_str).unwrap_or("");
    let days = days.unwrap_or(Config::from_env().days_per_week);

    let catalog = FoodCatalog::builtin();
    let targets = plans::compute_targets_tool(&input)?;
    let diet_plan = match seed {
        Some(seed) => plans::generate_diet_plan_tool(&input, diet, allergies, &catalog, &mut StdRng::seed_from_u64(seed))?,
        None => plans::generate_diet_plan_tool(&input, diet, allergies, &catalog, &mut rand::thread_rng())?,
    };
    let workout_plan = plans::generate_workout_plan_tool(input.goal, days)?;

    let output = serde_json::json!({
        "targets": targets,
        "diet_plan": diet_plan,
        "workout_plan": workout_plan,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
