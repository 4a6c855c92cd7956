//! Runtime configuration
//!
//! Read from environment variables at startup.

use std::path::PathBuf;

use crate::planner::DEFAULT_DAYS_PER_WEEK;
use crate::planner::workout::WEEKDAYS;

pub const DATABASE_PATH_VAR: &str = "FITPLAN_DATABASE_PATH";
pub const USDA_API_KEY_VAR: &str = "USDA_API_KEY";
pub const DAYS_PER_WEEK_VAR: &str = "FITPLAN_DAYS_PER_WEEK";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_path: PathBuf,
    /// When absent, food search only uses the static catalog
    pub usda_api_key: Option<String>,
    /// Default training days for workout plans
    pub days_per_week: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = var(DATABASE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        let usda_api_key = var(USDA_API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let days_per_week = var(DAYS_PER_WEEK_VAR)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .map(|d| d.clamp(1, WEEKDAYS.len()))
            .unwrap_or(DEFAULT_DAYS_PER_WEEK);

        Self {
            database_path,
            usda_api_key,
            days_per_week,
        }
    }
}

/// `<project>/data/fitplan.db`, resolved from the executable location
fn default_database_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }

    path.push("data");
    path.push("fitplan.db");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]);
        assert!(c.database_path.ends_with("data/fitplan.db"));
        assert_eq!(c.usda_api_key, None);
        assert_eq!(c.days_per_week, 5);
    }

    #[test]
    fn test_overrides() {
        let c = config(&[
            (DATABASE_PATH_VAR, "/tmp/plan.db"),
            (USDA_API_KEY_VAR, " abc "),
            (DAYS_PER_WEEK_VAR, "3"),
        ]);
        assert_eq!(c.database_path, PathBuf::from("/tmp/plan.db"));
        assert_eq!(c.usda_api_key.as_deref(), Some("abc"));
        assert_eq!(c.days_per_week, 3);
    }

    #[test]
    fn test_days_per_week_is_clamped() {
        assert_eq!(config(&[(DAYS_PER_WEEK_VAR, "12")]).days_per_week, 6);
        assert_eq!(config(&[(DAYS_PER_WEEK_VAR, "0")]).days_per_week, 1);
        assert_eq!(config(&[(DAYS_PER_WEEK_VAR, "lots")]).days_per_week, 5);
        assert_eq!(config(&[(USDA_API_KEY_VAR, "  ")]).usda_api_key, None);
    }
}
