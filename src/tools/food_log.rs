//! Food log tools
//!
//! Append, list and remove day-scoped log entries.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::FoodCatalog;
use crate::db::Database;
use crate::models::{LogEntry, LogEntryCreate, Nutrients};

/// Response for get_food_log
#[derive(Debug, Serialize)]
pub struct FoodLogResponse {
    pub date: String,
    pub entries: Vec<LogEntry>,
    pub totals: Nutrients,
}

/// Response for remove_log_entry
#[derive(Debug, Serialize)]
pub struct RemoveLogEntryResponse {
    pub id: i64,
    pub removed: bool,
}

/// Validate an ISO date, defaulting to today when absent
pub fn resolve_date(date: Option<&str>) -> Result<String, String> {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map(|parsed| parsed.format("%Y-%m-%d").to_string())
            .map_err(|_| format!("Invalid date '{}'. Expected YYYY-MM-DD", d)),
        None => Ok(chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()),
    }
}

/// Log `grams` of a food given its per-100g nutrients
pub fn log_food(
    db: &Database,
    date: Option<&str>,
    food: &str,
    per100: Nutrients,
    grams: f64,
) -> Result<LogEntry, String> {
    let date = resolve_date(date)?;
    let food = food.trim();
    if food.is_empty() {
        return Err("Food name is required".to_string());
    }
    if !(grams > 0.0) {
        return Err("Grams must be greater than zero".to_string());
    }

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let entry = LogEntry::add(
        &conn,
        &LogEntryCreate {
            date,
            food: food.to_string(),
            per100,
            grams,
        },
    )
    .map_err(|e| format!("Failed to log food: {}", e))?;

    tracing::info!(id = entry.id, date = %entry.date, food = %entry.food, grams, "Logged food");
    Ok(entry)
}

/// Log a catalog food by exact (case-insensitive) name
pub fn log_catalog_food(
    db: &Database,
    catalog: &FoodCatalog,
    date: Option<&str>,
    name: &str,
    grams: f64,
) -> Result<LogEntry, String> {
    let wanted = name.trim().to_lowercase();
    let food = catalog
        .foods()
        .iter()
        .find(|f| f.name.to_lowercase() == wanted)
        .ok_or_else(|| format!("Food '{}' not found in catalog", name))?;
    log_food(db, date, &food.name, food.per100, grams)
}

pub fn get_food_log(db: &Database, date: Option<&str>) -> Result<FoodLogResponse, String> {
    let date = resolve_date(date)?;
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let entries = LogEntry::list_for_date(&conn, &date)
        .map_err(|e| format!("Failed to list log entries: {}", e))?;
    let totals = LogEntry::day_totals(&conn, &date)
        .map_err(|e| format!("Failed to total log entries: {}", e))?;

    Ok(FoodLogResponse { date, entries, totals })
}

pub fn remove_log_entry(db: &Database, id: i64) -> Result<RemoveLogEntryResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let removed = LogEntry::remove(&conn, id)
        .map_err(|e| format!("Failed to remove log entry: {}", e))?;
    if removed {
        tracing::info!(id, "Removed log entry");
    }
    Ok(RemoveLogEntryResponse { id, removed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_date() {
        assert_eq!(resolve_date(Some(" 2025-01-09 ")).unwrap(), "2025-01-09");
        assert!(resolve_date(Some("2025-13-01")).is_err());
        assert!(resolve_date(Some("yesterday")).is_err());
        assert_eq!(resolve_date(None).unwrap().len(), 10);
        assert_eq!(resolve_date(Some("")).unwrap().len(), 10);
    }
}
