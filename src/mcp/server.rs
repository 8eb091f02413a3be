//! Macro Log MCP Server Implementation
//!
//! Exposes the daily log as MCP tools.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::app::App;
use crate::tools::entries::{self, EntryInput};
use crate::tools::library;
use crate::tools::status::{StatusTracker, USAGE_INSTRUCTIONS};

/// Macro Log MCP Service
#[derive(Clone)]
pub struct MacroLogService {
    status_tracker: Arc<StatusTracker>,
    app: Arc<Mutex<App>>,
    tool_router: ToolRouter<MacroLogService>,
}

impl MacroLogService {
    pub fn new(database_path: PathBuf, app: App) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(database_path)),
            app: Arc::new(Mutex::new(app)),
            tool_router: Self::tool_router(),
        }
    }

    fn lock_app(&self) -> Result<MutexGuard<'_, App>, McpError> {
        self.app
            .lock()
            .map_err(|_| McpError::internal_error("App state lock poisoned", None))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetDraftFieldParams {
    /// One of: name, calories, protein, fat, carbs
    pub field: String,
    /// Raw text as typed; numbers are coerced (blank = 0, non-numeric = NaN)
    pub value: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogEntryParams {
    /// Library name; leave empty to log without saving
    pub name: Option<String>,
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub fat: Option<String>,
    pub carbs: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LibraryNameParams {
    /// Library entry name
    pub name: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl MacroLogService {
    // --- Status ---

    #[tool(description = "Get the current status of the Macro Log service including build info, database and process information")]
    fn macrolog_status(&self) -> Result<CallToolResult, McpError> {
        let day = self.lock_app()?.day_key().to_string();
        to_json(&self.status_tracker.get_status(&day))
    }

    #[tool(description = "Get instructions for logging entries and using the library. Call this when unsure how the tools fit together.")]
    fn usage_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(USAGE_INSTRUCTIONS)]))
    }

    // --- Day ---

    #[tool(description = "Get today's running macro totals")]
    fn get_day(&self) -> Result<CallToolResult, McpError> {
        let app = self.lock_app()?;
        to_json(&entries::get_day(&app))
    }

    #[tool(description = "Get the whole page: totals, draft form fields and library buttons")]
    fn render_view(&self) -> Result<CallToolResult, McpError> {
        let app = self.lock_app()?;
        to_json(&entries::render_view(&app))
    }

    // --- Draft ---

    #[tool(description = "Get the current draft entry")]
    fn get_draft(&self) -> Result<CallToolResult, McpError> {
        let app = self.lock_app()?;
        to_json(&entries::get_draft(&app))
    }

    #[tool(description = "Type a value into one draft field (name, calories, protein, fat, carbs)")]
    fn set_draft_field(&self, Parameters(p): Parameters<SetDraftFieldParams>) -> Result<CallToolResult, McpError> {
        let mut app = self.lock_app()?;
        let result = entries::set_draft_field(&mut app, &p.field, &p.value)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Submit the draft. Adds its macros to today's totals; if it has a name, saves it to the library and clears the draft.")]
    fn submit_entry(&self) -> Result<CallToolResult, McpError> {
        let mut app = self.lock_app()?;
        let result = entries::submit_entry(&mut app).map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Clear every draft field")]
    fn reset_entry(&self) -> Result<CallToolResult, McpError> {
        let mut app = self.lock_app()?;
        to_json(&entries::reset_entry(&mut app))
    }

    #[tool(description = "Fill the given draft fields and submit in one step. Omitted fields keep their draft value.")]
    fn log_entry(&self, Parameters(p): Parameters<LogEntryParams>) -> Result<CallToolResult, McpError> {
        let input = EntryInput {
            name: p.name,
            calories: p.calories,
            protein: p.protein,
            fat: p.fat,
            carbs: p.carbs,
        };
        let mut app = self.lock_app()?;
        let result = entries::log_entry(&mut app, input).map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    // --- Library ---

    #[tool(description = "List saved library entries")]
    fn list_library(&self) -> Result<CallToolResult, McpError> {
        let app = self.lock_app()?;
        to_json(&library::list_library(&app))
    }

    #[tool(description = "Get one saved library entry by name")]
    fn get_library_entry(&self, Parameters(p): Parameters<LibraryNameParams>) -> Result<CallToolResult, McpError> {
        let app = self.lock_app()?;
        match library::get_library_entry(&app, &p.name) {
            Some(entry) => to_json(&entry),
            None => to_json(&serde_json::json!({"error": "Library entry not found", "name": p.name})),
        }
    }

    #[tool(description = "Log a saved library entry again, adding its macros to today's totals. Unknown names do nothing.")]
    fn log_library_item(&self, Parameters(p): Parameters<LibraryNameParams>) -> Result<CallToolResult, McpError> {
        let mut app = self.lock_app()?;
        to_json(&library::log_library_item(&mut app, &p.name))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MacroLogService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "macrolog".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Macro Log".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Macro Log - daily calories/protein/fat/carbs totals with a reusable food library. \
                 Call usage_instructions first. \
                 Day: get_day, render_view. \
                 Draft: get_draft, set_draft_field, submit_entry, reset_entry, log_entry. \
                 Library: list_library, get_library_entry, log_library_item."
                    .into(),
            ),
        }
    }
}
