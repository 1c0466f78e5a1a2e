//! Tool Registry - central registration for all tools.
//!
//! The registry is the single source of truth for which tools exist and
//! their metadata; the router built in `router.rs` must stay in sync with it
//! (enforced by the parity test there).

use rmcp::model::Tool;

use super::definitions::{
    AdvantageTool, ClearHistoryTool, DisadvantageTool, HistoryTool, RollTool, StatsTool,
};

/// Tool registry - lists all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            RollTool::NAME,
            AdvantageTool::NAME,
            DisadvantageTool::NAME,
            StatsTool::NAME,
            HistoryTool::NAME,
            ClearHistoryTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            RollTool::to_tool(),
            AdvantageTool::to_tool(),
            DisadvantageTool::to_tool(),
            StatsTool::to_tool(),
            HistoryTool::to_tool(),
            ClearHistoryTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 6);
        assert!(names.contains(&"roll"));
        assert!(names.contains(&"advantage"));
        assert!(names.contains(&"disadvantage"));
        assert!(names.contains(&"stats"));
        assert!(names.contains(&"history"));
        assert!(names.contains(&"clear_history"));
    }

    #[test]
    fn test_all_tools_have_descriptions() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.as_ref().is_some_and(|d| !d.is_empty()));
        }
    }
}
