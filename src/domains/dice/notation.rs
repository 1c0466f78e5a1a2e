//! Dice notation parsing.
//!
//! Parses strings like `"2d6+3"`, `"1d20"`, `"4d6-2"` into a validated
//! [`DiceExpression`]. The grammar is strict: `<count>d<sides>[+|-<modifier>]`
//! with no embedded whitespace, a mandatory count between 1 and 100, and one
//! of the seven standard die sizes.

use std::fmt;
use std::str::FromStr;

use super::error::DiceError;

/// Maximum number of dice in a single expression.
pub const MAX_DICE_COUNT: u32 = 100;

/// Die sizes that can be rolled, in ascending order.
pub const SUPPORTED_SIDES: [u32; 7] = [4, 6, 8, 10, 12, 20, 100];

/// A parsed, validated dice expression.
///
/// Construction always goes through [`DiceExpression::new`] or the parser, so
/// a value of this type is guaranteed to hold a count in 1-100 and a
/// supported die size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceExpression {
    count: u32,
    sides: u32,
    modifier: i64,
}

impl DiceExpression {
    /// Create a new expression, validating count and sides.
    pub fn new(count: u32, sides: u32, modifier: i64) -> Result<Self, DiceError> {
        if count == 0 || count > MAX_DICE_COUNT {
            return Err(DiceError::invalid_count(count.to_string()));
        }
        if !SUPPORTED_SIDES.contains(&sides) {
            return Err(DiceError::UnsupportedDieType(sides));
        }
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// Number of dice to roll.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Number of sides per die.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Modifier added to the sum of the dice.
    pub fn modifier(&self) -> i64 {
        self.modifier
    }
}

impl fmt::Display for DiceExpression {
    /// Formats the expression back to canonical notation (`3d6+2`, `1d20`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}

impl FromStr for DiceExpression {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse a dice notation string into a [`DiceExpression`].
///
/// # Errors
/// - [`DiceError::InvalidNotation`] when the string does not match the
///   grammar (whitespace, missing `d`, junk characters).
/// - [`DiceError::InvalidDiceCount`] when the count is missing or outside
///   1-100 (`d20` fails: the count is never defaulted).
/// - [`DiceError::UnsupportedDieType`] when the sides are not one of the
///   seven standard sizes.
/// - [`DiceError::InvalidModifier`] when the modifier suffix is not a signed
///   integer.
pub fn parse(notation: &str) -> Result<DiceExpression, DiceError> {
    if notation.is_empty() || notation.chars().any(|c| c.is_whitespace()) {
        return Err(DiceError::invalid_notation(notation));
    }

    let d_pos = notation
        .find('d')
        .ok_or_else(|| DiceError::invalid_notation(notation))?;

    // Count (before 'd'): mandatory, 1-3 digits, 1-100.
    let count_str = &notation[..d_pos];
    if count_str.is_empty() {
        return Err(DiceError::invalid_count("missing"));
    }
    if count_str.len() > 3 || !count_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DiceError::invalid_notation(notation));
    }
    let count: u32 = count_str
        .parse()
        .map_err(|_| DiceError::invalid_count(count_str))?;
    if count == 0 || count > MAX_DICE_COUNT {
        return Err(DiceError::invalid_count(count_str));
    }

    // Sides and optional modifier (after 'd').
    let rest = &notation[d_pos + 1..];
    let (sides_str, modifier_str) = match rest.find(['+', '-']) {
        Some(pos) => (&rest[..pos], Some(&rest[pos..])),
        None => (rest, None),
    };

    if sides_str.is_empty() || !sides_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DiceError::invalid_notation(notation));
    }
    let sides: u32 = sides_str
        .parse()
        .map_err(|_| DiceError::invalid_notation(notation))?;
    if !SUPPORTED_SIDES.contains(&sides) {
        return Err(DiceError::UnsupportedDieType(sides));
    }

    let modifier = match modifier_str {
        Some(m) => {
            // m starts with the sign; the remainder must be pure digits so
            // strings like "3d6++2" or "3d6+" are rejected.
            let digits = &m[1..];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DiceError::invalid_modifier(m));
            }
            m.parse::<i64>()
                .map_err(|_| DiceError::invalid_modifier(m))?
        }
        None => 0,
    };

    DiceExpression::new(count, sides, modifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let expr = parse("1d20").unwrap();
        assert_eq!(expr.count(), 1);
        assert_eq!(expr.sides(), 20);
        assert_eq!(expr.modifier(), 0);
    }

    #[test]
    fn test_parse_with_positive_modifier() {
        let expr = parse("3d6+5").unwrap();
        assert_eq!(expr.count(), 3);
        assert_eq!(expr.sides(), 6);
        assert_eq!(expr.modifier(), 5);
    }

    #[test]
    fn test_parse_with_negative_modifier() {
        let expr = parse("2d8-3").unwrap();
        assert_eq!(expr.count(), 2);
        assert_eq!(expr.sides(), 8);
        assert_eq!(expr.modifier(), -3);
    }

    #[test]
    fn test_parse_all_supported_sides() {
        for sides in SUPPORTED_SIDES {
            let expr = parse(&format!("1d{}", sides)).unwrap();
            assert_eq!(expr.sides(), sides);
        }
    }

    #[test]
    fn test_parse_count_bounds() {
        assert!(parse("100d6").is_ok());
        assert!(matches!(
            parse("101d6"),
            Err(DiceError::InvalidDiceCount(_))
        ));
        assert!(matches!(parse("0d6"), Err(DiceError::InvalidDiceCount(_))));
    }

    #[test]
    fn test_parse_missing_count_fails() {
        // Count is mandatory, never defaulted to 1.
        assert!(matches!(parse("d20"), Err(DiceError::InvalidDiceCount(_))));
    }

    #[test]
    fn test_parse_unsupported_die() {
        assert_eq!(parse("3d7"), Err(DiceError::UnsupportedDieType(7)));
        assert_eq!(parse("1d3"), Err(DiceError::UnsupportedDieType(3)));
        assert_eq!(parse("2d1000"), Err(DiceError::UnsupportedDieType(1000)));
    }

    #[test]
    fn test_parse_whitespace_fails() {
        assert!(matches!(
            parse("1d20 + 5"),
            Err(DiceError::InvalidNotation(_))
        ));
        assert!(matches!(parse(" 1d20"), Err(DiceError::InvalidNotation(_))));
    }

    #[test]
    fn test_parse_malformed() {
        for bad in ["", "d", "3x6", "3d", "abc", "3d6x", "1dd6", "++3d6"] {
            assert!(
                matches!(parse(bad), Err(DiceError::InvalidNotation(_))),
                "expected InvalidNotation for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_bad_modifier() {
        for bad in ["3d6+", "3d6-", "3d6++2", "3d6+-2", "3d6+2a"] {
            assert!(
                matches!(parse(bad), Err(DiceError::InvalidModifier(_))),
                "expected InvalidModifier for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for notation in ["1d20", "3d6+5", "2d8-3", "100d100+999", "10d12"] {
            let expr = parse(notation).unwrap();
            assert_eq!(expr.to_string(), notation);
            assert_eq!(parse(&expr.to_string()).unwrap(), expr);
        }
    }

    #[test]
    fn test_new_validates() {
        assert!(DiceExpression::new(1, 20, 0).is_ok());
        assert!(matches!(
            DiceExpression::new(0, 20, 0),
            Err(DiceError::InvalidDiceCount(_))
        ));
        assert_eq!(
            DiceExpression::new(1, 7, 0),
            Err(DiceError::UnsupportedDieType(7))
        );
    }
}
