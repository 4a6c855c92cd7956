//! Fitplan
//!
//! An MCP server for meal and workout planning.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use fitplan::build_info;
use fitplan::catalog::FoodCatalog;
use fitplan::config::Config;
use fitplan::db;
use fitplan::mcp::FitplanService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitplan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = Config::from_env();
    eprintln!("Database path: {}", config.database_path.display());
    if config.usda_api_key.is_none() {
        tracing::info!("USDA_API_KEY not set, food search uses the built-in catalog only");
    }

    // Ensure data directory exists
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    eprintln!("Initializing database...");
    let database = db::Database::new(&config.database_path)?;

    database.with_conn(|conn| {
        db::migrations::run_migrations(conn)?;
        let version = db::migrations::get_schema_version(conn)?;
        eprintln!("Database schema version: {}", version);
        Ok(())
    })?;

    let service = FitplanService::new(&config, database, FoodCatalog::builtin());

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
