//! Uniform random fraud scorer.

use rand::Rng;

use crate::ports::{FraudScorer, ScoringInput};

pub const MAX_SCORE: f64 = 100.0;

/// Draws each score independently from `[0, 100)`, ignoring the transaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFraudScorer;

impl FraudScorer for RandomFraudScorer {
    fn score(&self, _tx: &ScoringInput<'_>) -> f64 {
        rand::thread_rng().gen_range(0.0..MAX_SCORE)
    }
}
