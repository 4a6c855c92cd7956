//! Fitplan Status Tool
//!
//! Provides runtime status information about the Fitplan service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Planning instructions for AI assistants
pub const PLANNING_INSTRUCTIONS: &str = r#"
# Fitplan Instructions

Fitplan builds a one-day meal plan and a weekly workout plan from a user
profile, and keeps a simple per-day food log.

## Profile fields

| Field | Values |
|-------|--------|
| sex | M, F, X |
| age | years, > 0 |
| height_cm | > 0 |
| weight_kg | > 0 |
| activity | Low, Moderate, High |
| goal | Fat loss, Maintenance, Muscle gain, Recomposition |

Enum values are case-insensitive. `fat_loss` and `fat-loss` also work.

## Workflow

1. `compute_targets` returns BMR and the daily kcal/protein/fat/carbs targets.
2. `generate_diet_plan` splits the targets over Breakfast (25%), Lunch (35%),
   Dinner (30%) and Snack (10%). Pass `diet` (omnivore, vegetarian, vegan) and
   an optional comma-separated `allergies` list. Pass `seed` to get the same
   plan again.
3. `generate_workout_plan` returns 1-6 training days. Each day has one
   strength block and one goal-dependent cardio block.

## Food log

- `search_foods` searches USDA FoodData Central when an API key is configured
  and falls back to the built-in catalog. Values are per 100 g.
- `log_food` records grams of a food. Either give a catalog `name`, or give
  `name` plus per-100g `kcal`, `protein_g`, `fat_g`, `carbs_g` from a search.
- `get_food_log` lists one day's entries with totals.
- `remove_log_entry` deletes an entry by id.

Dates are `YYYY-MM-DD` and default to today (server local time).

## Notes

- Portions are rounded to 5 g. Totals will not hit targets exactly.
- The plans are generic guidance, not medical advice.
"#;

/// Runtime status of the Fitplan service
#[derive(Debug, Clone, Serialize)]
pub struct FitplanStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Database information
    pub database_path: String,
    pub database_size_bytes: Option<u64>,

    /// Food search backend
    pub usda_lookup_enabled: bool,
    pub catalog_size: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
    usda_lookup_enabled: bool,
    catalog_size: usize,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf, usda_lookup_enabled: bool, catalog_size: usize) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
            usda_lookup_enabled,
            catalog_size,
        }
    }

    pub fn get_status(&self) -> FitplanStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FitplanStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            usda_lookup_enabled: self.usda_lookup_enabled,
            catalog_size: self.catalog_size,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_missing_database() {
        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/fitplan.db"), false, 22);
        let status = tracker.get_status();
        assert_eq!(status.database_size_bytes, None);
        assert_eq!(status.catalog_size, 22);
        assert!(!status.usda_lookup_enabled);
        assert_eq!(status.process_id, std::process::id());
    }
}
