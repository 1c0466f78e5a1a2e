//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires them
//! together. Tools that touch the roll history receive a shared
//! `Arc<HistoryStore>`.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::dice::HistoryStore;

use super::definitions::{
    AdvantageTool, ClearHistoryTool, DisadvantageTool, HistoryTool, RollTool, StatsTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(history: Arc<HistoryStore>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(RollTool::create_route(history.clone()))
        .with_route(AdvantageTool::create_route(history.clone()))
        .with_route(DisadvantageTool::create_route(history.clone()))
        .with_route(StatsTool::create_route())
        .with_route(HistoryTool::create_route(history.clone()))
        .with_route(ClearHistoryTool::create_route(history))
}
