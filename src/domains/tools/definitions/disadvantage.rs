//! Disadvantage tool definition.
//!
//! Rolls two d20s, keeps the lower, and records the result in the shared
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

/// Parameters for the disadvantage tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DisadvantageParams {
    /// Modifier added to the kept d20 (defaults to 0).
    #[serde(default)]
    pub modifier: i64,
}

/// Disadvantage tool - rolls 2d20 and keeps the lower.
pub struct DisadvantageTool;

impl DisadvantageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "disadvantage";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Roll two d20s and keep the lower (D&D 5e disadvantage). An optional modifier is added to the kept die.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(modifier = params.modifier))]
    pub fn execute(params: &DisadvantageParams, history: &HistoryStore) -> CallToolResult {
        let result = dice::roll_disadvantage(params.modifier);
        info!(
            "Disadvantage roll {:?} kept {} for a total of {}",
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
            input_schema: cached_schema_for_type::<DisadvantageParams>(),
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
                let params: DisadvantageParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &history))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_disadvantage_execute() {
        let history = HistoryStore::default();
        let result = DisadvantageTool::execute(&DisadvantageParams { modifier: 0 }, &history);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let text = result_text(&result);
        assert!(text.starts_with("Rolled with Disadvantage: ["));
        assert!(text.contains("→ Kept **"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_disadvantage_with_negative_modifier() {
        let history = HistoryStore::default();
        let result = DisadvantageTool::execute(&DisadvantageParams { modifier: -2 }, &history);
        let text = result_text(&result);
        assert!(text.contains("-2 = **"));
    }

    #[test]
    fn test_disadvantage_keeps_lower() {
        let history = HistoryStore::default();
        for _ in 0..20 {
            DisadvantageTool::execute(&DisadvantageParams { modifier: 0 }, &history);
        }
        for entry in history.recent(20) {
            let rolls = entry.result.rolls();
            assert_eq!(entry.result.kept(), Some(rolls[0].min(rolls[1])));
        }
    }
}
