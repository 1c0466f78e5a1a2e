//! STDIO transport implementation.
//!
//! The standard MCP mode: the dice server reads JSON-RPC requests from
//! stdin and writes responses to stdout, with logs going to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the host closes the stream.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Dice server ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("STDIO transport closed");
        Ok(())
    }
}
