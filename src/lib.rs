//! Dice MCP Server Library
//!
//! This crate provides an MCP (Model Context Protocol) server that rolls
//! tabletop-RPG dice, computes exact probability statistics for dice
//! expressions, and keeps a bounded in-memory history of past rolls.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **dice**: notation parsing, rolling, statistics, roll history
//!   - **tools**: the six MCP tools (`roll`, `advantage`, `disadvantage`,
//!     `stats`, `history`, `clear_history`)
//!
//! # Example
//!
//! ```rust,no_run
//! use dice_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::dice::{DiceExpression, HistoryStore, RollResult, StatisticsSummary};
