#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Input {
    /// CSV file with the `data_id`, `anomaly_start` and `anomaly_end` columns.
    pub data_path: PathBuf,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("metadata.csv"),
        }
    }
}
