//! Roll tool definition.
//!
//! Rolls a dice expression given in standard notation and records the
//! result in the shared history.

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

use super::common::{error_result, success_result};
use crate::domains::dice::{self, HistoryStore};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the roll tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RollParams {
    /// Dice notation to roll, e.g. "3d6+2" or "1d20".
    pub notation: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Roll tool - rolls dice given in standard notation.
pub struct RollTool;

impl RollTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "roll";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Roll dice using standard notation (e.g. '3d6+2', '1d20'). Supported dice: d4, d6, d8, d10, d12, d20, d100; up to 100 dice per roll.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(notation = %params.notation))]
    pub fn execute(params: &RollParams, history: &HistoryStore) -> CallToolResult {
        let expression = match dice::parse(&params.notation) {
            Ok(expr) => expr,
            Err(e) => return error_result(e.to_string()),
        };

        let result = dice::roll_standard(&expression);
        info!("Rolled {} for a total of {}", expression, result.total());

        let text = result.to_string();
        history.record(result);

        success_result(text)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RollParams>(),
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
                let params: RollParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &history))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    fn params(notation: &str) -> RollParams {
        RollParams {
            notation: notation.to_string(),
        }
    }

    #[test]
    fn test_roll_execute_multiple_dice() {
        let history = HistoryStore::default();
        let result = RollTool::execute(&params("3d6"), &history);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let text = result_text(&result);
        assert!(text.starts_with("Rolled 3d6: ["));
        assert!(text.contains("= **"));
    }

    #[test]
    fn test_roll_execute_single_die_with_modifier() {
        let history = HistoryStore::default();
        let result = RollTool::execute(&params("1d20+5"), &history);

        let text = result_text(&result);
        assert!(text.starts_with("Rolled 1d20+5: **"));
        assert!(text.contains("+5 = **"));
    }

    #[test]
    fn test_roll_records_history() {
        let history = HistoryStore::default();
        assert!(history.is_empty());
        RollTool::execute(&params("2d8"), &history);
        RollTool::execute(&params("1d4"), &history);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_roll_invalid_notation_is_error() {
        let history = HistoryStore::default();

        let result = RollTool::execute(&params("1d20 + 5"), &history);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("invalid dice notation"));

        let result = RollTool::execute(&params("3d7"), &history);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("unsupported die type"));

        let result = RollTool::execute(&params("101d6"), &history);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("invalid dice count"));

        // Failed rolls are not recorded.
        assert!(history.is_empty());
    }
}
