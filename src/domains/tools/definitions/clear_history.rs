//! Clear-history tool definition.
//!
//! Empties the shared roll history unconditionally.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::success_result;
use crate::domains::dice::HistoryStore;

/// Parameters for the clear-history tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ClearHistoryParams {}

/// Clear-history tool - removes all recorded rolls.
pub struct ClearHistoryTool;

impl ClearHistoryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "clear_history";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Remove all recorded rolls from the history.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(_params: &ClearHistoryParams, history: &HistoryStore) -> CallToolResult {
        let removed = history.clear();
        info!("Cleared {} rolls from history", removed);

        success_result(format!("Cleared {} rolls from history.", removed))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ClearHistoryParams>(),
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
                let params: ClearHistoryParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &history))
            }
            .boxed()
        })
    }
}
