use super::GroundTruth;
use crate::{AnomalyInterval, Error};
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

/// One row of the reference table. Columns are matched by header name and any
/// other column is ignored.
#[derive(Debug, Deserialize)]
struct IntervalRecord {
    data_id: i64,
    anomaly_start: i64,
    anomaly_end: i64,
}

impl GroundTruth {
    /// Read the reference CSV at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let truth = Self::from_reader(File::open(path)?)?;
        debug!(path = %path.display(), intervals = truth.len(), "loaded ground truth");
        Ok(truth)
    }

    /// Read a reference CSV with a header row containing `data_id`,
    /// `anomaly_start` and `anomaly_end`.
    pub fn from_reader(reader: impl Read) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let intervals = reader
            .deserialize::<IntervalRecord>()
            .map(|record| {
                let record = record?;
                AnomalyInterval::new(record.data_id, record.anomaly_start, record.anomaly_end)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Self::try_from_intervals(intervals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_columns_by_name() {
        let csv = "\
anomaly_end,data_id,sensor,anomaly_start
60,1,temp,40
10,2,flow,0
";
        let truth = GroundTruth::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(truth.len(), 2);
        assert_eq!(truth.get(1), Some(&AnomalyInterval::new(1, 40, 60).unwrap()));
        assert_eq!(truth.get(2), Some(&AnomalyInterval::new(2, 0, 10).unwrap()));
    }

    #[test]
    fn header_only_is_empty() {
        let truth = GroundTruth::from_reader("data_id,anomaly_start,anomaly_end\n".as_bytes()).unwrap();
        assert!(truth.is_empty());
    }

    #[test]
    fn missing_column_fails() {
        let csv = "data_id,anomaly_start\n1,40\n";
        let err = GroundTruth::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::CsvParseFailed(_)));
    }

    #[test]
    fn non_integer_fails() {
        let csv = "data_id,anomaly_start,anomaly_end\n1,forty,60\n";
        let err = GroundTruth::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::CsvParseFailed(_)));
    }

    #[test]
    fn inverted_interval_fails() {
        let csv = "data_id,anomaly_start,anomaly_end\n4,60,40\n";
        let err = GroundTruth::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInterval {
                id: 4,
                start: 60,
                end: 40
            }
        ));
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = GroundTruth::from_path(dir.path().join("metadata.csv")).unwrap_err();
        assert!(matches!(err, Error::FileReadFailed(_)));
    }
}
