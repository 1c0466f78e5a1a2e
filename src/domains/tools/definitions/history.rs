//! History tool definition.
//!
//! Lists the most recent rolls from the shared history, newest first.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::fmt::Write;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::success_result;
use crate::domains::dice::{DEFAULT_RECENT, HistoryStore};

/// Parameters for the history tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HistoryParams {
    /// How many recent rolls to show (defaults to 10).
    pub count: Option<usize>,
}

/// History tool - shows recent rolls.
pub struct HistoryTool;

impl HistoryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "history";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Show the most recent rolls, newest first. Up to 100 rolls are kept; older ones are evicted.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(count = params.count))]
    pub fn execute(params: &HistoryParams, history: &HistoryStore) -> CallToolResult {
        let count = params.count.unwrap_or(DEFAULT_RECENT);
        let entries = history.recent(count);
        info!("Listing {} of {} recorded rolls", entries.len(), history.len());

        if entries.is_empty() {
            return success_result("No rolls recorded yet.".to_string());
        }

        let mut text = format!("Recent rolls (last {}):", entries.len());
        for (index, entry) in entries.iter().enumerate() {
            // Infallible for String.
            let _ = write!(text, "\n{}. {}", index + 1, entry.result);
        }

        success_result(text)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<HistoryParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(history: Arc<HistoryStore>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let history = history.clone();
            async move {
                let params: HistoryParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &history))
            }
            .boxed()
        })
    }
}
