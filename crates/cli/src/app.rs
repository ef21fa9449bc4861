use crate::report::Report;
use anyhow::Context;
use config::Config;
use kernel::{GroundTruth, Predictions, Scorer};
use std::{io::Write, path::Path};
use tracing::{debug, info};

/// Load both inputs, score them and write the report to `out`.
pub fn run(pred_path: &Path, config: &Config, out: &mut impl Write) -> anyhow::Result<Report> {
    let predictions = Predictions::from_path(pred_path)
        .with_context(|| format!("Failed to load predictions from {}", pred_path.display()))?;

    let data_path = &config.input.data_path;
    let truth = GroundTruth::from_path(data_path)
        .with_context(|| format!("Failed to load anomaly data from {}", data_path.display()))?;

    let scorer = Scorer::new(config.scoring.accepted_inaccuracy);
    let evaluation = scorer.evaluate(&predictions, &truth)?;
    for outcome in evaluation.outcomes().iter().filter(|outcome| !outcome.accurate) {
        debug!(
            id = outcome.id,
            predicted = outcome.predicted,
            start = outcome.interval.start(),
            end = outcome.interval.end(),
            length = outcome.interval.length(),
            "prediction outside tolerance window"
        );
    }

    let report = Report::from(&evaluation);
    info!(accuracy = report.accuracy, accurate = report.accurate, total = report.total);
    report.write(out, &config.output)?;
    Ok(report)
}
