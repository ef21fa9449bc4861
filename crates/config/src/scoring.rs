#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Scoring {
    /// Minimum slack (in samples) on each side of an anomaly interval.
    ///
    /// Short anomalies would otherwise get a window barely wider than the
    /// anomaly itself.
    pub accepted_inaccuracy: i64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            accepted_inaccuracy: 100,
        }
    }
}

impl Scoring {
    /// Negative slack would shrink the window inside the anomaly; clamp it to 0.
    pub fn clamp(self) -> Self {
        Self {
            accepted_inaccuracy: self.accepted_inaccuracy.max(0),
        }
    }
}
