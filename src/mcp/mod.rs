//! MCP server
//!
//! Exposes the planners, food search and the food log as MCP tools.

mod server;

pub use server::FitplanService;
