//! Database module
//!
//! Handles SQLite connection and migrations for the food log.

pub mod connection;
pub mod migrations;

pub use connection::{Database, DbError, DbResult};
