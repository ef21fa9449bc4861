use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to write report: {0}")]
    WriteReport(#[from] io::Error),

    #[error("Failed to encode JSON report: {0}")]
    EncodeJson(#[from] serde_json::Error),
}
