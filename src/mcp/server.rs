//! Fitplan MCP Server Implementation
//!
//! Implements the MCP server with all Fitplan tools.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::catalog::FoodCatalog;
use crate::config::Config;
use crate::db::Database;
use crate::lookup::{FoodSearch, NutrientLookup, UsdaClient};
use crate::models::Nutrients;
use crate::tools::plans::ProfileInput;
use crate::tools::status::StatusTracker;
use crate::tools::{food_log, foods, plans};

/// Fitplan MCP Service
#[derive(Clone)]
pub struct FitplanService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    database: Database,
    catalog: Arc<FoodCatalog>,
    usda_api_key: Option<String>,
    days_per_week: usize,
    tool_router: ToolRouter<FitplanService>,
}

impl FitplanService {
    pub fn new(config: &Config, database: Database, catalog: FoodCatalog) -> Self {
        let tracker = StatusTracker::new(
            config.database_path.clone(),
            config.usda_api_key.is_some(),
            catalog.len(),
        );
        Self {
            status_tracker: Arc::new(Mutex::new(tracker)),
            database,
            catalog: Arc::new(catalog),
            usda_api_key: config.usda_api_key.clone(),
            days_per_week: config.days_per_week,
            tool_router: Self::tool_router(),
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Planning Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProfileParams {
    /// M, F or X
    pub sex: String,
    /// Age in years
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Low, Moderate or High
    pub activity: String,
    /// Fat loss, Maintenance, Muscle gain or Recomposition
    pub goal: String,
}

impl ProfileParams {
    fn as_input(&self) -> ProfileInput<'_> {
        ProfileInput {
            sex: &self.sex,
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            activity: &self.activity,
            goal: &self.goal,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DietPlanParams {
    #[serde(flatten)]
    pub profile: ProfileParams,
    /// omnivore, vegetarian or vegan
    pub diet: String,
    /// Comma-separated allergens to exclude (e.g. "peanut, soy")
    #[serde(default)]
    pub allergies: Option<String>,
    /// Seed for reproducible food picks
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WorkoutPlanParams {
    /// Fat loss, Maintenance, Muscle gain or Recomposition
    pub goal: String,
    /// Training days, 1-6 (server default when omitted)
    pub days_per_week: Option<usize>,
}

// ============================================================================
// Food Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFoodsParams {
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListCatalogParams {
    /// omnivore, vegetarian or vegan
    pub diet: Option<String>,
    /// Comma-separated allergens to exclude
    pub allergies: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogFoodParams {
    /// YYYY-MM-DD, defaults to today
    pub date: Option<String>,
    /// Food name. Must match a catalog food unless per-100g values are given.
    pub name: String,
    pub grams: f64,
    /// Per-100g values, all four or none
    pub kcal: Option<f64>,
    pub protein_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub carbs_g: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFoodLogParams {
    /// YYYY-MM-DD, defaults to today
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveLogEntryParams {
    pub id: i64,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl FitplanService {
    // --- Status ---

    #[tool(description = "Get the current status of the Fitplan service including build info, database status, and process information")]
    async fn fitplan_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for the planning and food log tools. Call this when unsure which fields a tool expects.")]
    fn planning_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PLANNING_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PLANNING_INSTRUCTIONS)]))
    }

    // --- Planning ---

    #[tool(description = "Compute BMR and daily kcal, protein, fat and carbs targets for a profile")]
    fn compute_targets(&self, Parameters(p): Parameters<ProfileParams>) -> Result<CallToolResult, McpError> {
        let result = plans::compute_targets_tool(&p.as_input())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Generate a one-day meal plan (breakfast, lunch, dinner, snack) for a profile, diet and allergy list")]
    fn generate_diet_plan(&self, Parameters(p): Parameters<DietPlanParams>) -> Result<CallToolResult, McpError> {
        let allergies = p.allergies.as_deref().unwrap_or("");
        let input = p.profile.as_input();

        let result = match p.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                plans::generate_diet_plan_tool(&input, &p.diet, allergies, &self.catalog, &mut rng)
            }
            None => {
                let mut rng = rand::thread_rng();
                plans::generate_diet_plan_tool(&input, &p.diet, allergies, &self.catalog, &mut rng)
            }
        }
        .map_err(|e| McpError::invalid_params(e, None))?;

        json_result(&result)
    }

    #[tool(description = "Generate a weekly workout plan: one strength block plus goal-dependent cardio per training day")]
    fn generate_workout_plan(&self, Parameters(p): Parameters<WorkoutPlanParams>) -> Result<CallToolResult, McpError> {
        let days = p.days_per_week.unwrap_or(self.days_per_week);
        let result = plans::generate_workout_plan_tool(&p.goal, days)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    // --- Foods ---

    #[tool(description = "Search foods by name. Uses USDA FoodData Central when configured, falling back to the built-in catalog. Values are per 100 g.")]
    async fn search_foods(&self, Parameters(p): Parameters<SearchFoodsParams>) -> Result<CallToolResult, McpError> {
        let api_key = self.usda_api_key.clone();
        let catalog = Arc::clone(&self.catalog);

        // The blocking HTTP client must live entirely off the async runtime
        let result: FoodSearch = tokio::task::spawn_blocking(move || {
            let client = match api_key.map(UsdaClient::new).transpose() {
                Ok(client) => client,
                Err(e) => {
                    tracing::warn!(error = %e, "USDA client unavailable, using catalog");
                    None
                }
            };
            foods::search_foods(client.as_ref().map(|c| c as &dyn NutrientLookup), &catalog, &p.query)
        })
        .await
        .map_err(|e| McpError::internal_error(format!("Search task failed: {}", e), None))?;

        json_result(&result)
    }

    #[tool(description = "List built-in catalog foods, optionally filtered by diet and allergens")]
    fn list_catalog(&self, Parameters(p): Parameters<ListCatalogParams>) -> Result<CallToolResult, McpError> {
        let result = foods::list_catalog(&self.catalog, p.diet.as_deref(), p.allergies.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    // --- Food Log ---

    #[tool(description = "Log grams of a food for a day. Give a catalog food name, or a name plus per-100g kcal, protein_g, fat_g and carbs_g.")]
    fn log_food(&self, Parameters(p): Parameters<LogFoodParams>) -> Result<CallToolResult, McpError> {
        let date = food_log::resolve_date(p.date.as_deref()).map_err(|e| McpError::invalid_params(e, None))?;

        let per100 = match (p.kcal, p.protein_g, p.fat_g, p.carbs_g) {
            (Some(kcal), Some(protein_g), Some(fat_g), Some(carbs_g)) => {
                Some(Nutrients::new(kcal, protein_g, fat_g, carbs_g))
            }
            (None, None, None, None) => None,
            _ => {
                return Err(McpError::invalid_params(
                    "Provide all of kcal, protein_g, fat_g and carbs_g, or none of them",
                    None,
                ))
            }
        };

        let result = match per100 {
            Some(per100) => food_log::log_food(&self.database, Some(&date), &p.name, per100, p.grams),
            None => food_log::log_catalog_food(&self.database, &self.catalog, Some(&date), &p.name, p.grams),
        }
        .map_err(|e| McpError::internal_error(e, None))?;

        json_result(&result)
    }

    #[tool(description = "Get the food log for a day with entries and totals")]
    fn get_food_log(&self, Parameters(p): Parameters<GetFoodLogParams>) -> Result<CallToolResult, McpError> {
        let date = food_log::resolve_date(p.date.as_deref()).map_err(|e| McpError::invalid_params(e, None))?;
        let result = food_log::get_food_log(&self.database, Some(&date))
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Remove a food log entry by id")]
    fn remove_log_entry(&self, Parameters(p): Parameters<RemoveLogEntryParams>) -> Result<CallToolResult, McpError> {
        let result = food_log::remove_log_entry(&self.database, p.id)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for FitplanService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fitplan".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Fitplan".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Fitplan - rule-based meal and workout planning. \
                 Call planning_instructions for field formats. \
                 Planning: compute_targets, generate_diet_plan, generate_workout_plan. \
                 Foods: search_foods, list_catalog. \
                 Food log: log_food, get_food_log, remove_log_entry. \
                 Status: fitplan_status."
                    .into(),
            ),
        }
    }
}
