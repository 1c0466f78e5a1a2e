//! Statistics tool definition.
//!
//! Computes the exact theoretical distribution of a dice expression without
//! rolling anything.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{error_result, success_result};
use crate::domains::dice;

/// Parameters for the stats tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StatsParams {
    /// Dice notation to analyze, e.g. "3d6+5".
    pub notation: String,
}

/// Stats tool - exact probability statistics for a dice expression.
pub struct StatsTool;

impl StatsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "stats";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Compute exact statistics for a dice expression: minimum, maximum, average, and the most likely total with its probability. No dice are rolled.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(notation = %params.notation))]
    pub fn execute(params: &StatsParams) -> CallToolResult {
        let expression = match dice::parse(&params.notation) {
            Ok(expr) => expr,
            Err(e) => return error_result(e.to_string()),
        };

        let summary = dice::analyze(&expression);
        info!(
            "Analyzed {}: mean {:.2}, mode {}",
            expression, summary.mean, summary.mode
        );

        success_result(format!("Statistics for {}:\n{}", expression, summary))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<StatsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: StatsParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
