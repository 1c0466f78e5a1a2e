//! Advantage tool definition.
//!
//! Rolls two d20s, keeps the higher, and records the result in the shared
//! history.

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
use crate::domains::dice::{self, HistoryStore};

/// Parameters for the advantage tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AdvantageParams {
    /// Modifier added to the kept d20 (defaults to 0).
    #[serde(default)]
    pub modifier: i64,
}

/// Advantage tool - rolls 2d20 and keeps the higher.
pub struct AdvantageTool;

impl AdvantageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "advantage";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Roll two d20s and keep the higher (D&D 5e advantage). An optional modifier is added to the kept die.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(modifier = params.modifier))]
    pub fn execute(params: &AdvantageParams, history: &HistoryStore) -> CallToolResult {
        let result = dice::roll_advantage(params.modifier);
        info!(
            "Advantage roll {:?} kept {} for a total of {}",
            result.rolls(),
            result.kept().unwrap_or_default(),
            result.total()
        );

        let text = result.to_string();
        history.record(result);

        success_result(text)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AdvantageParams>(),
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
                let params: AdvantageParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &history))
            }
            .boxed()
        })
    }
}
