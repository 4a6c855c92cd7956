//! Fitplan Tools module
//!
//! Tool implementations behind the MCP server. Inputs arrive as strings and
//! are validated here before reaching the planners.

pub mod food_log;
pub mod foods;
pub mod plans;
pub mod status;
