//! Spork MCP Server Implementation
//!
//! Implements the MCP server with all Spork tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::analysis::{MealAnalysisRequest, VoiceEditRequest};
use crate::config::Config;
use crate::models::{Ingredient, MealNutrition};
use crate::tools::meals;
use crate::tools::status::StatusTracker;

/// Spork MCP Service
#[derive(Clone)]
pub struct SporkService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Arc<Config>,
    tool_router: ToolRouter<SporkService>,
}

impl SporkService {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(Arc::clone(&config)))),
            config,
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
// Meal Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ValidateIngredientParams {
    /// Ingredient with name, weight (e.g. "100g"), calories, proteinGrams, carbGrams, fatGrams
    pub ingredient: Ingredient,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReconcileMealParams {
    /// Meal with its ingredient list; top-level totals are recomputed
    pub meal: MealNutrition,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReconcileMealJsonParams {
    /// Raw JSON text returned by the meal analysis model
    pub payload: String,
    /// True when the payload is wrapped as {description, nutrition, wasEdited} (default false)
    #[serde(default)]
    pub envelope: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CheckMealRequestParams {
    /// Meal name (1-200 chars), description (1-1000 chars) and optional preferences
    pub request: MealAnalysisRequest,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CheckVoiceRequestParams {
    /// Spoken meal description, editing flag and original meal when editing
    pub request: VoiceEditRequest,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RateHealthScoreParams {
    /// Health score from 0 to 100
    pub score: f64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl SporkService {
    // --- Status ---

    #[tool(description = "Get the current status of the Spork service including build info, configuration, and process information")]
    async fn spork_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        json_result(&status)
    }

    #[tool(description = "Get step-by-step instructions for checking a meal analysis. Call this before reconciling meals for the first time.")]
    fn meal_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::MEAL_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(MEAL_INSTRUCTIONS)]))
    }

    // --- Meals ---

    #[tool(description = "Check one ingredient for negative values, calorie/macro mismatch, and unrealistic calories per gram")]
    fn validate_ingredient(&self, Parameters(p): Parameters<ValidateIngredientParams>) -> Result<CallToolResult, McpError> {
        let result = meals::validate_ingredient(&self.config, &p.ingredient);
        json_result(&result)
    }

    #[tool(description = "Validate every ingredient of a meal and recompute the meal totals from the ingredient list")]
    fn reconcile_meal(&self, Parameters(p): Parameters<ReconcileMealParams>) -> Result<CallToolResult, McpError> {
        let result = meals::reconcile_meal(&self.config, &p.meal);
        json_result(&result)
    }

    #[tool(description = "Parse a raw meal analysis JSON payload, validate its ingredients, and return the meal with recomputed totals")]
    fn reconcile_meal_json(&self, Parameters(p): Parameters<ReconcileMealJsonParams>) -> Result<CallToolResult, McpError> {
        let result = meals::reconcile_meal_json(&self.config, &p.payload, p.envelope)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        json_result(&result)
    }

    #[tool(description = "Validate and clean a meal analysis request (name, description, user preferences)")]
    fn check_meal_request(&self, Parameters(p): Parameters<CheckMealRequestParams>) -> Result<CallToolResult, McpError> {
        let result = meals::check_meal_request(&p.request)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        json_result(&result)
    }

    #[tool(description = "Validate and clean a spoken meal request or a request to edit an existing meal analysis")]
    fn check_voice_request(&self, Parameters(p): Parameters<CheckVoiceRequestParams>) -> Result<CallToolResult, McpError> {
        let result = meals::check_voice_request(&p.request)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        json_result(&result)
    }

    #[tool(description = "Get the rating label and colour band for a 0-100 meal health score")]
    fn rate_health_score(&self, Parameters(p): Parameters<RateHealthScoreParams>) -> Result<CallToolResult, McpError> {
        json_result(&meals::rate_health_score(p.score))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for SporkService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "spork".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Spork Nutrition Service".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Spork - Meal nutrition validation and reconciliation. \
                 IMPORTANT: Call meal_instructions before reconciling meals. \
                 Meals: reconcile_meal_json (raw analysis JSON), reconcile_meal (typed meal), validate_ingredient. \
                 Always show correctedMeal totals, never the totals the analysis reported. \
                 Requests: check_meal_request, check_voice_request. \
                 Scores: rate_health_score. Status: spork_status."
                    .into(),
            ),
        }
    }
}
