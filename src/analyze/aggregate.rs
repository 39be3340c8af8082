use crate::error::ValidationError;
use crate::types::scoring::{Dimension, Score, Weights, MAX_SCORE, MIN_SCORE};
use std::collections::BTreeMap;

/// Every dimension present and inside [0, 10]. Nothing is clamped or defaulted.
pub fn validate_scores(scores: &BTreeMap<String, Score>) -> Result<(), ValidationError> {
    for dimension in Dimension::ALL {
        let name = dimension.as_str();
        let score = scores
            .get(name)
            .copied()
            .ok_or_else(|| ValidationError::MissingDimension(name.to_string()))?;
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(ValidationError::OutOfRange {
                dimension: name.to_string(),
                score,
            });
        }
    }
    Ok(())
}

pub fn aggregate(scores: &BTreeMap<String, Score>) -> Result<Score, ValidationError> {
    aggregate_with(scores, &Weights::standard())
}

/// Weighted sum rounded to two decimals.
pub fn aggregate_with(
    scores: &BTreeMap<String, Score>,
    weights: &Weights,
) -> Result<Score, ValidationError> {
    validate_scores(scores)?;
    let weighted: Score = Dimension::ALL
        .iter()
        .map(|dimension| scores[dimension.as_str()] * weights.get(*dimension))
        .sum();
    Ok(round2(weighted))
}

/// Rounds the exact binary value to two decimals; exact ties go to the even digit.
fn round2(value: Score) -> Score {
    if !value.is_finite() {
        return value;
    }
    // 60 fractional digits print every score in range without rounding.
    let exact = format!("{:.60}", value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return value;
    };
    let digits = fraction.as_bytes();
    let mut cents = whole.parse::<u64>().unwrap_or(0) * 100
        + u64::from(digits[0] - b'0') * 10
        + u64::from(digits[1] - b'0');
    let tail_nonzero = digits[3..].iter().any(|digit| *digit != b'0');
    let round_up = match digits[2] {
        b'6'..=b'9' => true,
        b'5' => tail_nonzero || cents % 2 == 1,
        _ => false,
    };
    if round_up {
        cents += 1;
    }
    (cents as f64 / 100.0).copysign(value)
}
