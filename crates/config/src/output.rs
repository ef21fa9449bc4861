#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Output {
    /// Decimal places of the accuracy in the text report.
    pub precision: usize,

    pub format: OutputFormat,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            precision: 3,
            format: OutputFormat::Text,
        }
    }
}
