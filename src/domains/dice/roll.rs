//! Dice rolling.
//!
//! Draws uniform random outcomes for a parsed [`DiceExpression`] and for the
//! D&D-5e-style advantage/disadvantage mechanic (roll two d20, keep the
//! higher or lower).

use std::fmt;

use rand::Rng;

use super::notation::DiceExpression;

/// How a roll was made.
///
/// Advantage and disadvantage record which of the two d20 outcomes was kept;
/// when both dice show the same value either one serves as the kept value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollMode {
    /// A plain roll of every die in the expression.
    Standard,
    /// Two d20s rolled, the higher kept.
    Advantage {
        /// The outcome that counts toward the total.
        kept: u32,
    },
    /// Two d20s rolled, the lower kept.
    Disadvantage {
        /// The outcome that counts toward the total.
        kept: u32,
    },
}

/// The outcome of a single roll command. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    expression: DiceExpression,
    rolls: Vec<u32>,
    total: i64,
    mode: RollMode,
}

impl RollResult {
    /// The expression that was rolled.
    pub fn expression(&self) -> &DiceExpression {
        &self.expression
    }

    /// The ordered individual die outcomes. For advantage/disadvantage these
    /// are both raw d20 outcomes, including the discarded one.
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }

    /// Sum of the counted outcomes plus the modifier.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// How the roll was made.
    pub fn mode(&self) -> RollMode {
        self.mode
    }

    /// The kept outcome, if this was an advantage or disadvantage roll.
    pub fn kept(&self) -> Option<u32> {
        match self.mode {
            RollMode::Standard => None,
            RollMode::Advantage { kept } | RollMode::Disadvantage { kept } => Some(kept),
        }
    }
}

impl fmt::Display for RollResult {
    /// Formats the roll as the user-facing result line, e.g.
    /// `Rolled 3d6: [4, 5, 3] = **12**` or
    /// `Rolled with Advantage: [15, 8] → Kept **15** +5 = **20**`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modifier = self.expression.modifier();
        match self.mode {
            RollMode::Standard => {
                write!(f, "Rolled {}: ", self.expression)?;
                if self.rolls.len() == 1 {
                    write!(f, "**{}**", self.rolls[0])?;
                    if modifier != 0 {
                        write!(f, " {:+} = **{}**", modifier, self.total)?;
                    }
                } else {
                    write!(f, "{:?}", self.rolls)?;
                    if modifier != 0 {
                        write!(f, " {:+}", modifier)?;
                    }
                    write!(f, " = **{}**", self.total)?;
                }
                Ok(())
            }
            RollMode::Advantage { kept } => {
                write!(f, "Rolled with Advantage: {:?} → Kept **{}**", self.rolls, kept)?;
                if modifier != 0 {
                    write!(f, " {:+}", modifier)?;
                }
                write!(f, " = **{}**", self.total)
            }
            RollMode::Disadvantage { kept } => {
                write!(
                    f,
                    "Rolled with Disadvantage: {:?} → Kept **{}**",
                    self.rolls, kept
                )?;
                if modifier != 0 {
                    write!(f, " {:+}", modifier)?;
                }
                write!(f, " = **{}**", self.total)
            }
        }
    }
}

/// Roll every die in the expression and sum the outcomes plus the modifier.
pub fn roll_standard(expression: &DiceExpression) -> RollResult {
    let mut rng = rand::rng();
    let rolls: Vec<u32> = (0..expression.count())
        .map(|_| rng.random_range(1..=expression.sides()))
        .collect();

    let sum: u32 = rolls.iter().sum();
    // The modifier's magnitude is unvalidated, so the total saturates
    // instead of wrapping.
    let total = i64::from(sum).saturating_add(expression.modifier());

    RollResult {
        expression: *expression,
        rolls,
        total,
        mode: RollMode::Standard,
    }
}

/// Roll two d20s and keep the higher.
pub fn roll_advantage(modifier: i64) -> RollResult {
    roll_two_d20(modifier, true)
}

/// Roll two d20s and keep the lower.
pub fn roll_disadvantage(modifier: i64) -> RollResult {
    roll_two_d20(modifier, false)
}

fn roll_two_d20(modifier: i64, keep_highest: bool) -> RollResult {
    let mut rng = rand::rng();
    let first = rng.random_range(1..=20u32);
    let second = rng.random_range(1..=20u32);

    let kept = if keep_highest {
        first.max(second)
    } else {
        first.min(second)
    };

    let mode = if keep_highest {
        RollMode::Advantage { kept }
    } else {
        RollMode::Disadvantage { kept }
    };

    let expression =
        DiceExpression::new(2, 20, modifier).expect("2d20 is always a valid expression");

    RollResult {
        expression,
        rolls: vec![first, second],
        total: i64::from(kept).saturating_add(modifier),
        mode,
    }
}
