//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod advantage;
pub mod clear_history;
pub(crate) mod common;
pub mod disadvantage;
pub mod history;
pub mod roll;
pub mod stats;

pub use advantage::{AdvantageParams, AdvantageTool};
pub use clear_history::{ClearHistoryParams, ClearHistoryTool};
pub use disadvantage::{DisadvantageParams, DisadvantageTool};
pub use history::{HistoryParams, HistoryTool};
pub use roll::{RollParams, RollTool};
pub use stats::{StatsParams, StatsTool};
