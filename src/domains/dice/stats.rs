//! Theoretical roll statistics.
//!
//! Computes the exact distribution of a dice expression with no randomness
//! involved: minimum, maximum, mean, and the most probable total with its
//! probability. The probability mass function of the sum is obtained by
//! iteratively convolving the single-die uniform distribution.

use std::fmt;

use super::notation::DiceExpression;

/// Exact statistics for a dice expression.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSummary {
    /// Lowest achievable total (`count + modifier`).
    pub minimum: i64,
    /// Highest achievable total (`count * sides + modifier`).
    pub maximum: i64,
    /// Arithmetic mean of the total.
    pub mean: f64,
    /// The most probable total. When several totals tie for the maximum
    /// probability the lowest one is reported.
    pub mode: i64,
    /// Probability of the mode, as a percentage of all outcomes.
    pub mode_probability: f64,
}

impl fmt::Display for StatisticsSummary {
    /// Formats the summary as the user-facing bullet list (without the
    /// leading `Statistics for ...` line, which names the expression).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "• Minimum: {}", self.minimum)?;
        writeln!(f, "• Maximum: {}", self.maximum)?;
        writeln!(f, "• Average: {:.2}", self.mean)?;
        write!(f, "• Most likely: {} ({:.1}%)", self.mode, self.mode_probability)
    }
}

/// Compute exact statistics for a dice expression.
///
/// Pure function of the expression; the convolution has at most
/// `count * (sides - 1) + 1` buckets (9901 for 100d100), so this is always
/// cheap.
pub fn analyze(expression: &DiceExpression) -> StatisticsSummary {
    let count = i64::from(expression.count());
    let sides = i64::from(expression.sides());
    let modifier = expression.modifier();

    // The modifier's magnitude is unvalidated, so the bounds saturate
    // instead of wrapping.
    let minimum = count.saturating_add(modifier);
    let maximum = (count * sides).saturating_add(modifier);
    let mean = count as f64 * (sides as f64 + 1.0) / 2.0 + modifier as f64;

    let pmf = sum_distribution(expression.count(), expression.sides());

    // Index i corresponds to the total count + i (before the modifier);
    // strictly-less keeps the lowest total on probability ties.
    let (mode_index, mode_mass) = pmf
        .iter()
        .copied()
        .enumerate()
        .fold((0usize, 0.0f64), |(best_i, best_p), (i, p)| {
            if p > best_p { (i, p) } else { (best_i, best_p) }
        });

    StatisticsSummary {
        minimum,
        maximum,
        mean,
        mode: (count + mode_index as i64).saturating_add(modifier),
        mode_probability: mode_mass * 100.0,
    }
}

/// Probability mass function of the sum of `count` uniform dice with `sides`
/// sides. Index 0 holds the probability of the minimum sum (`count`).
fn sum_distribution(count: u32, sides: u32) -> Vec<f64> {
    let sides = sides as usize;
    let single: Vec<f64> = vec![1.0 / sides as f64; sides];

    let mut pmf = single.clone();
    for _ in 1..count {
        pmf = convolve(&pmf, &single);
    }
    pmf
}

fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &pa) in a.iter().enumerate() {
        for (j, &pb) in b.iter().enumerate() {
            out[i + j] += pa * pb;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::dice::notation::parse;
    use crate::domains::dice::roll::roll_standard;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_analyze_1d20() {
        let stats = analyze(&parse("1d20").unwrap());
        assert_eq!(stats.minimum, 1);
        assert_eq!(stats.maximum, 20);
        assert!(approx_eq(stats.mean, 10.5));
        // Every total is equally likely; the lowest tied total wins.
        assert_eq!(stats.mode, 1);
        assert!(approx_eq(stats.mode_probability, 5.0));
    }

    #[test]
    fn test_analyze_2d6() {
        let stats = analyze(&parse("2d6").unwrap());
        assert_eq!(stats.minimum, 2);
        assert_eq!(stats.maximum, 12);
        assert!(approx_eq(stats.mean, 7.0));
        assert_eq!(stats.mode, 7);
        assert!(approx_eq(stats.mode_probability, 100.0 * 6.0 / 36.0));
    }

    #[test]
    fn test_analyze_3d6_plus_5() {
        let stats = analyze(&parse("3d6+5").unwrap());
        assert_eq!(stats.minimum, 8);
        assert_eq!(stats.maximum, 23);
        assert!(approx_eq(stats.mean, 15.5));
        // 3d6 has tied modes at 10 and 11; shifted by 5 the lowest is 15.
        assert_eq!(stats.mode, 15);
        assert!(approx_eq(stats.mode_probability, 100.0 * 27.0 / 216.0));
    }

    #[test]
    fn test_analyze_negative_modifier_shifts_everything() {
        let base = analyze(&parse("2d6").unwrap());
        let shifted = analyze(&parse("2d6-4").unwrap());
        assert_eq!(shifted.minimum, base.minimum - 4);
        assert_eq!(shifted.maximum, base.maximum - 4);
        assert!(approx_eq(shifted.mean, base.mean - 4.0));
        assert_eq!(shifted.mode, base.mode - 4);
        assert!(approx_eq(shifted.mode_probability, base.mode_probability));
    }

    #[test]
    fn test_analyze_huge_modifier_saturates() {
        let stats = analyze(&parse(&format!("1d4+{}", i64::MAX)).unwrap());
        assert_eq!(stats.minimum, i64::MAX);
        assert_eq!(stats.maximum, i64::MAX);
        assert_eq!(stats.mode, i64::MAX);

        let stats = analyze(&parse(&format!("2d6-{}", i64::MAX)).unwrap());
        assert_eq!(stats.minimum, 2i64.saturating_add(-i64::MAX));
        assert!(stats.maximum < 0);
        assert!(stats.minimum <= stats.maximum);
    }

    #[test]
    fn test_pmf_sums_to_one() {
        for (count, sides) in [(1, 4), (2, 6), (5, 8), (10, 10), (100, 100)] {
            let pmf = sum_distribution(count, sides);
            assert_eq!(pmf.len(), (count * (sides - 1) + 1) as usize);
            let mass: f64 = pmf.iter().sum();
            assert!((mass - 1.0).abs() < 1e-6, "{}d{} mass = {}", count, sides, mass);
        }
    }

    #[test]
    fn test_rolls_stay_within_analyzed_bounds() {
        for notation in ["1d4", "3d6+2", "2d20-5", "10d8"] {
            let expr = parse(notation).unwrap();
            let stats = analyze(&expr);
            for _ in 0..50 {
                let total = roll_standard(&expr).total();
                assert!(total >= stats.minimum && total <= stats.maximum);
            }
        }
    }

    #[test]
    fn test_display_format() {
        let stats = analyze(&parse("3d6+5").unwrap());
        assert_eq!(
            stats.to_string(),
            "• Minimum: 8\n• Maximum: 23\n• Average: 15.50\n• Most likely: 15 (12.5%)"
        );
    }
}
