use crate::AnomalyInterval;

/// Result of scoring a single prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub id: i64,
    pub predicted: i64,
    pub interval: AnomalyInterval,
    pub accurate: bool,
}

/// Per-prediction outcomes of one scoring pass, ordered by data id.
///
/// Only built by the scorer, which refuses to score zero predictions, so an
/// evaluation always holds at least one outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    outcomes: Vec<Outcome>,
    accurate: usize,
}

impl Evaluation {
    pub(crate) fn from_outcomes(mut outcomes: Vec<Outcome>) -> Self {
        debug_assert!(!outcomes.is_empty());
        outcomes.sort_unstable_by_key(|outcome| outcome.id);
        let accurate = outcomes.iter().filter(|outcome| outcome.accurate).count();
        Self { outcomes, accurate }
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Number of accurate predictions.
    pub fn accurate(&self) -> usize {
        self.accurate
    }

    /// Number of scored predictions.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Fraction of accurate predictions, in `[0, 1]`.
    pub fn accuracy(&self) -> f64 {
        self.accurate as f64 / self.total() as f64
    }
}
