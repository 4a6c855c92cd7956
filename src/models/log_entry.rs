//! Food log entry model
//!
//! Day-scoped record of a food eaten, with nutrients scaled from its per-100g values.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;
use crate::nutrition::aggregate;
use super::Nutrients;

/// A logged food portion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,  // ISO date: "2025-01-09"
    pub food: String,
    pub grams: f64,
    #[serde(flatten)]
    pub nutrients: Nutrients,
    pub created_at: String,
}

/// Data for appending a log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntryCreate {
    pub date: String,
    pub food: String,
    pub per100: Nutrients,
    pub grams: f64,
}

impl LogEntry {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            date: row.get("date")?,
            food: row.get("food")?,
            grams: row.get("grams")?,
            nutrients: Nutrients {
                kcal: row.get("kcal")?,
                protein_g: row.get("protein_g")?,
                fat_g: row.get("fat_g")?,
                carbs_g: row.get("carbs_g")?,
            },
            created_at: row.get("created_at")?,
        })
    }

    /// Append an entry; nutrients are scaled from `per100` by `grams`
    pub fn add(conn: &Connection, data: &LogEntryCreate) -> DbResult<Self> {
        let nutrients = aggregate::scale(&data.per100, data.grams);

        conn.execute(
            r#"
            INSERT INTO log_entries (date, food, grams, kcal, protein_g, fat_g, carbs_g)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                data.date,
                data.food,
                data.grams,
                nutrients.kcal,
                nutrients.protein_g,
                nutrients.fat_g,
                nutrients.carbs_g,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM log_entries WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All entries for a date, in insertion order
    pub fn list_for_date(conn: &Connection, date: &str) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM log_entries WHERE date = ?1 ORDER BY id ASC"
        )?;

        let entries = stmt
            .query_map([date], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Remove an entry. Returns Ok(false) if it did not exist.
    pub fn remove(conn: &Connection, id: i64) -> DbResult<bool> {
        let rows = conn.execute("DELETE FROM log_entries WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }

    /// Summed nutrients for a date, rounded to one decimal
    pub fn day_totals(conn: &Connection, date: &str) -> DbResult<Nutrients> {
        let entries = Self::list_for_date(conn, date)?;
        Ok(aggregate::sum(entries.iter().map(|e| e.nutrients)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn rice(date: &str, grams: f64) -> LogEntryCreate {
        LogEntryCreate {
            date: date.to_string(),
            food: "rice (cooked)".to_string(),
            per100: Nutrients::new(130.0, 2.4, 0.3, 28.0),
            grams,
        }
    }

    #[test]
    fn test_add_scales_nutrients() {
        let conn = test_conn();
        let entry = LogEntry::add(&conn, &rice("2025-01-09", 200.0)).unwrap();
        assert_eq!(entry.grams, 200.0);
        assert_eq!(entry.nutrients, Nutrients::new(260.0, 4.8, 0.6, 56.0));
    }

    #[test]
    fn test_entries_are_scoped_by_date() {
        let conn = test_conn();
        LogEntry::add(&conn, &rice("2025-01-09", 100.0)).unwrap();
        LogEntry::add(&conn, &rice("2025-01-09", 50.0)).unwrap();
        LogEntry::add(&conn, &rice("2025-01-10", 200.0)).unwrap();

        let day = LogEntry::list_for_date(&conn, "2025-01-09").unwrap();
        assert_eq!(day.len(), 2);
        assert!(day[0].id < day[1].id);

        let totals = LogEntry::day_totals(&conn, "2025-01-09").unwrap();
        assert_eq!(totals.kcal, 195.0);
    }

    #[test]
    fn test_remove() {
        let conn = test_conn();
        let entry = LogEntry::add(&conn, &rice("2025-01-09", 100.0)).unwrap();
        assert!(LogEntry::remove(&conn, entry.id).unwrap());
        assert!(!LogEntry::remove(&conn, entry.id).unwrap());
        assert!(LogEntry::list_for_date(&conn, "2025-01-09").unwrap().is_empty());
    }
}
