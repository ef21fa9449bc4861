use super::Predictions;
use crate::Error;
use std::{fs::File, io::Read, path::Path};
use tracing::{debug, warn};

impl Predictions {
    /// Read the predictions file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let predictions = Self::from_reader(File::open(path)?)?;
        debug!(path = %path.display(), predictions = predictions.len(), "loaded predictions");
        Ok(predictions)
    }

    /// Read headerless `id,predicted_index` lines.
    ///
    /// Blank lines are skipped. A repeated id overrides the earlier line.
    pub fn from_reader(reader: impl Read) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut predictions = Self::new();
        for record in reader.records() {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }

            let line = record.position().map_or(0, |pos| pos.line());
            if record.len() != 2 {
                return Err(Error::MalformedPrediction {
                    line,
                    fields: record.len(),
                });
            }

            let (id, predicted) = record.deserialize::<(i64, i64)>(None)?;
            if let Some(previous) = predictions.insert(id, predicted) {
                warn!(id, previous, predicted, line, "duplicate prediction, keeping the later one");
            }
        }

        Ok(predictions)
    }
}
