//! Level parsing and price arithmetic.

use log::debug;

/// Ordered list of level fractions parsed from a comma-separated percentage
/// string.
///
/// Parsing is total: tokens that fail numeric parse are dropped silently,
/// survivors are divided by 100 and sorted ascending. Duplicates are kept
/// (they draw overlapping lines) and fractions are not clamped to [0, 1] —
/// levels outside the candle range are legal and extrapolate past it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LevelSpec {
    fractions: Vec<f64>,
}

impl LevelSpec {
    /// Parse `"0,25,50,75,100"`-style input. Never fails; malformed tokens
    /// degrade to fewer levels, a fully-unparseable string to zero levels.
    pub fn parse(input: &str) -> Self {
        let mut fractions: Vec<f64> = input
            .split(',')
            .filter_map(|token| {
                let token = token.trim();
                match token.parse::<f64>() {
                    Ok(percent) => Some(percent / 100.0),
                    Err(_) => {
                        if !token.is_empty() {
                            debug!("dropping unparseable level token '{token}'");
                        }
                        None
                    }
                }
            })
            .collect();
        fractions.sort_by(f64::total_cmp);
        Self { fractions }
    }

    /// Fractions in ascending order.
    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }
}

/// Price of a level fraction within a candle's high/low range.
///
/// The range may be negative (inverted candle) or zero; the result is
/// propagated unvalidated.
pub fn level_price(low: f64, high: f64, fraction: f64) -> f64 {
    low + (high - low) * fraction
}

/// Integer percentage for a level label, truncating toward zero
/// (fraction `0.505` labels as `50`).
pub fn percentage(fraction: f64) -> i64 {
    (fraction * 100.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_valid_and_invalid_tokens() {
        let spec = LevelSpec::parse("50, abc, 0,100");
        assert_eq!(spec.fractions(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn empty_and_unparseable_yield_zero_levels() {
        assert!(LevelSpec::parse("").is_empty());
        assert!(LevelSpec::parse("abc, , xyz").is_empty());
    }

    #[test]
    fn duplicates_are_preserved() {
        let spec = LevelSpec::parse("50,50,25");
        assert_eq!(spec.fractions(), &[0.25, 0.5, 0.5]);
    }

    #[test]
    fn out_of_range_values_are_not_clamped() {
        let spec = LevelSpec::parse("150,-20,50");
        assert_eq!(spec.fractions(), &[-0.2, 0.5, 1.5]);
    }

    #[test]
    fn whitespace_is_trimmed() {
        let spec = LevelSpec::parse("  25 ,75  ");
        assert_eq!(spec.fractions(), &[0.25, 0.75]);
    }

    #[test]
    fn level_price_interpolates_and_extrapolates() {
        assert_eq!(level_price(100.0, 110.0, 0.5), 105.0);
        assert_eq!(level_price(100.0, 110.0, 1.5), 115.0);
        assert_eq!(level_price(100.0, 110.0, -0.2), 98.0);
    }

    #[test]
    fn level_price_with_inverted_range() {
        // high < low: levels mirror below the "low".
        assert_eq!(level_price(110.0, 100.0, 0.25), 107.5);
    }

    #[test]
    fn percentage_truncates_toward_zero() {
        assert_eq!(percentage(0.25), 25);
        assert_eq!(percentage(0.505), 50);
        assert_eq!(percentage(1.5), 150);
        assert_eq!(percentage(-0.005), 0);
        assert_eq!(percentage(-0.25), -25);
    }
}
