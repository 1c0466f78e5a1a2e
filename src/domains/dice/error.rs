//! Dice-specific error types.

use thiserror::Error;

/// Errors that can occur while parsing or validating dice notation.
///
/// Each variant names the offending input so the tool layer can surface a
/// message that tells the caller exactly what to fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// The notation string does not match the `XdY` / `XdY+Z` grammar.
    #[error("invalid dice notation '{0}': expected the form XdY or XdY+Z (e.g. 3d6+2), no spaces")]
    InvalidNotation(String),

    /// The dice count is missing or outside 1-100.
    #[error("invalid dice count '{0}': count must be a number between 1 and 100")]
    InvalidDiceCount(String),

    /// The die has an unsupported number of sides.
    #[error("unsupported die type d{0}: supported dice are d4, d6, d8, d10, d12, d20, d100")]
    UnsupportedDieType(u32),

    /// The modifier is present but not a parseable signed integer.
    #[error("invalid modifier '{0}': expected a signed integer like +3 or -2")]
    InvalidModifier(String),
}

impl DiceError {
    /// Create a new "invalid notation" error.
    pub fn invalid_notation(text: impl Into<String>) -> Self {
        Self::InvalidNotation(text.into())
    }

    /// Create a new "invalid dice count" error.
    pub fn invalid_count(text: impl Into<String>) -> Self {
        Self::InvalidDiceCount(text.into())
    }

    /// Create a new "invalid modifier" error.
    pub fn invalid_modifier(text: impl Into<String>) -> Self {
        Self::InvalidModifier(text.into())
    }
}
