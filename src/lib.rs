//! Fitplan Library
//!
//! Rule-based meal and workout planning, a food log, and food search.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod db;
pub mod lookup;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod planner;
pub mod tools;
