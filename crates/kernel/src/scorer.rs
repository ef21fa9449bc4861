use crate::{AnomalyInterval, Error, Evaluation, GroundTruth, Outcome, Predictions, ToleranceWindow};
use tracing::{debug, trace};

/// Default slack, in samples, granted around short anomalies.
pub const ACCEPTED_INACCURACY: i64 = 100;

/// Whether `pred` falls strictly inside the tolerance window of the anomaly
/// spanning `start..=end`, using the default [`ACCEPTED_INACCURACY`].
///
/// ```
/// # use kernel::is_accurate;
/// // a single-sample anomaly at 100 accepts anything in (0, 200)
/// assert!(!is_accurate(0, 100, 100));
/// assert!(is_accurate(1, 100, 100));
/// assert!(is_accurate(199, 100, 100));
/// assert!(!is_accurate(200, 100, 100));
/// ```
#[inline]
pub fn is_accurate(pred: i64, start: i64, end: i64) -> bool {
    ToleranceWindow::new(start, end, ACCEPTED_INACCURACY).contains(pred)
}

/// Fraction of `predictions` that are accurate, with the default slack.
///
/// Fails when a prediction has no interval in `intervals` or when there is
/// nothing to score.
pub fn accuracy(predictions: &Predictions, intervals: &GroundTruth) -> Result<f64, Error> {
    Scorer::default().accuracy(predictions, intervals)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorer {
    accepted_inaccuracy: i64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ACCEPTED_INACCURACY)
    }
}

impl Scorer {
    pub fn new(accepted_inaccuracy: i64) -> Self {
        Self {
            accepted_inaccuracy,
        }
    }

    pub fn is_accurate(&self, pred: i64, interval: &AnomalyInterval) -> bool {
        interval.window(self.accepted_inaccuracy).contains(pred)
    }

    pub fn accuracy(&self, predictions: &Predictions, intervals: &GroundTruth) -> Result<f64, Error> {
        Ok(self.evaluate(predictions, intervals)?.accuracy())
    }

    /// Score every prediction against its interval.
    ///
    /// A missing interval aborts the whole pass.
    pub fn evaluate(
        &self,
        predictions: &Predictions,
        intervals: &GroundTruth,
    ) -> Result<Evaluation, Error> {
        if predictions.is_empty() {
            return Err(Error::NoPredictions);
        }

        let outcomes = predictions
            .iter()
            .map(|(id, predicted)| -> Result<Outcome, Error> {
                let interval = *intervals.get(id).ok_or(Error::MissingInterval(id))?;
                let accurate = self.is_accurate(predicted, &interval);
                trace!(
                    id,
                    predicted,
                    start = interval.start(),
                    end = interval.end(),
                    accurate,
                    "scored prediction"
                );
                Ok(Outcome {
                    id,
                    predicted,
                    interval,
                    accurate,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let evaluation = Evaluation::from_outcomes(outcomes);
        debug!(
            accurate = evaluation.accurate(),
            total = evaluation.total(),
            accepted_inaccuracy = self.accepted_inaccuracy,
            "evaluation finished"
        );
        Ok(evaluation)
    }
}
