//! Chance distribution with enforced invariants.
//!
//! A [`ChanceDistribution`] is the explicit table of outcomes used by chance
//! nodes. Keeping it as a table (instead of simulating the random process)
//! keeps expectations exact.

use crate::{Result, SenetError};

/// Tolerance for probability sum validation.
const PROBABILITY_SUM_TOLERANCE: f64 = 1e-9;

/// A discrete probability distribution over chance outcomes.
///
/// Invariant: non-empty, all probabilities in [0, 1], summing to 1.0 (±1e-9).
/// Iteration order is the construction order and is stable.
///
/// # Example
/// ```
/// use senet_core::ChanceDistribution;
///
/// let coin = ChanceDistribution::new(vec![('H', 0.5), ('T', 0.5)]).unwrap();
/// assert_eq!(coin.len(), 2);
/// assert!((coin.total() - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ChanceDistribution<O> {
    outcomes: Vec<(O, f64)>,
}

impl<O: Copy + PartialEq> ChanceDistribution<O> {
    /// Create a distribution from `(outcome, probability)` pairs.
    ///
    /// # Errors
    /// Returns `SenetError::InvalidDistribution` if:
    /// - The table is empty
    /// - Any probability is negative, NaN, or greater than 1
    /// - An outcome appears twice
    /// - Probabilities don't sum to 1.0 (±1e-9)
    pub fn new(outcomes: Vec<(O, f64)>) -> Result<Self> {
        if outcomes.is_empty() {
            return Err(SenetError::InvalidDistribution(
                "distribution cannot be empty".to_string(),
            ));
        }

        if outcomes.iter().any(|&(_, p)| !(0.0..=1.0).contains(&p)) {
            return Err(SenetError::InvalidDistribution(
                "probabilities must lie in [0, 1]".to_string(),
            ));
        }

        for (i, (outcome, _)) in outcomes.iter().enumerate() {
            if outcomes[..i].iter().any(|(other, _)| other == outcome) {
                return Err(SenetError::InvalidDistribution(
                    "duplicate outcome".to_string(),
                ));
            }
        }

        let sum: f64 = outcomes.iter().map(|&(_, p)| p).sum();
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(SenetError::InvalidDistribution(format!(
                "probability sum {} is not 1.0 (tolerance {})",
                sum, PROBABILITY_SUM_TOLERANCE
            )));
        }

        Ok(Self { outcomes })
    }

    /// Create a distribution from integer weights, normalizing by their total.
    ///
    /// # Errors
    /// Returns error if the table is empty or all weights are zero.
    pub fn from_weights(weights: &[(O, u32)]) -> Result<Self> {
        let total: u32 = weights.iter().map(|&(_, w)| w).sum();
        if total == 0 {
            return Err(SenetError::InvalidDistribution(
                "cannot normalize: all weights are zero".to_string(),
            ));
        }

        Self::new(
            weights
                .iter()
                .map(|&(o, w)| (o, w as f64 / total as f64))
                .collect(),
        )
    }

    /// Probability of `outcome`, 0.0 if it is not part of the table.
    pub fn probability(&self, outcome: O) -> f64 {
        self.outcomes
            .iter()
            .find(|(o, _)| *o == outcome)
            .map(|&(_, p)| p)
            .unwrap_or(0.0)
    }

    /// Number of outcomes (including zero-probability ones).
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Always false for a constructed distribution.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Sum of all probabilities (should be ~1.0).
    pub fn total(&self) -> f64 {
        self.outcomes.iter().map(|&(_, p)| p).sum()
    }

    /// Iterate over `(outcome, probability)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (O, f64)> + '_ {
        self.outcomes.iter().copied()
    }

    /// Get a reference to the underlying table.
    pub fn as_slice(&self) -> &[(O, f64)] {
        &self.outcomes
    }
}
