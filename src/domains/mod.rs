//! Domains module containing business logic organized by bounded contexts.
//!
//! - `dice` - notation parsing, rolling, statistics, and roll history
//! - `tools` - the MCP tools exposing the dice operations to clients

pub mod dice;
pub mod tools;
