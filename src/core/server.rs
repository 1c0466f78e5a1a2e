//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the dice tools.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines a parameters struct and an `execute()` method, and
//! creates its own route. The ToolRouter is built dynamically in
//! `domains/tools/router.rs`. **Adding a new tool does NOT require modifying
//! this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter,
    model::*, service::RequestContext, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::dice::HistoryStore;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and owns the
/// shared roll history that the tools mutate.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared roll history, injected into every tool that needs it.
    history: Arc<HistoryStore>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let history = Arc::new(HistoryStore::new(config.history.capacity));

        Self {
            tool_router: build_tool_router::<Self>(history.clone()),
            config,
            history,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared roll history.
    pub fn history(&self) -> &Arc<HistoryStore> {
        &self.history
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Tabletop dice roller. Roll dice in standard notation (e.g. '3d6+2'), \
                 roll d20s with advantage or disadvantage, inspect exact roll statistics, \
                 and browse the history of recent rolls."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
