/// Represents all possible errors that can occur in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A prediction refers to a series with no labeled anomaly.
    #[error("No anomaly interval for data id {0}")]
    MissingInterval(i64),

    /// Nothing to score: the accuracy of zero predictions is undefined.
    #[error("No predictions to score")]
    NoPredictions,

    /// An anomaly interval ends before it starts.
    #[error("Invalid anomaly interval for data id {id}: start {start} is after end {end}")]
    InvalidInterval { id: i64, start: i64, end: i64 },

    /// The ground truth lists the same series twice.
    #[error("Duplicate anomaly interval for data id {0}")]
    DuplicateInterval(i64),

    /// A predictions line is not a single `id,predicted_index` pair.
    #[error("Malformed prediction on line {line}: expected 2 fields, found {fields}")]
    MalformedPrediction { line: u64, fields: usize },

    /// Error occurred while reading a file.
    #[error("Failed to read file: {0}")]
    FileReadFailed(#[from] std::io::Error),

    /// A record in a CSV input could not be parsed.
    ///
    /// # See Also
    ///
    /// [`GroundTruth::from_reader`](crate::GroundTruth::from_reader),
    /// [`Predictions::from_reader`](crate::Predictions::from_reader)
    #[error("Failed to parse CSV: {0}")]
    CsvParseFailed(#[from] csv::Error),
}
