//! Dice domain module.
//!
//! Everything protocol-independent about dice lives here:
//!
//! - `notation` - parsing `XdY+Z` strings into validated expressions
//! - `roll` - drawing random outcomes (standard, advantage, disadvantage)
//! - `stats` - exact theoretical distributions for an expression
//! - `history` - the bounded, FIFO-evicting roll log
//! - `error` - the dice-specific error kinds
//!
//! The tools domain formats these results for clients; nothing in this
//! module knows about MCP.

pub mod error;
pub mod history;
pub mod notation;
pub mod roll;
pub mod stats;

pub use error::DiceError;
pub use history::{HistoryEntry, HistoryStore, DEFAULT_CAPACITY, DEFAULT_RECENT};
pub use notation::{parse, DiceExpression, MAX_DICE_COUNT, SUPPORTED_SIDES};
pub use roll::{roll_advantage, roll_disadvantage, roll_standard, RollMode, RollResult};
pub use stats::{analyze, StatisticsSummary};
