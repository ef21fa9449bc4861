mod error;
mod evaluation;
pub mod ground_truth;
pub mod interval;
pub mod prediction;
pub mod scorer;

pub use error::Error;
pub use evaluation::{Evaluation, Outcome};
pub use ground_truth::GroundTruth;
pub use interval::{AnomalyInterval, ToleranceWindow};
pub use prediction::Predictions;
pub use scorer::{ACCEPTED_INACCURACY, Scorer, accuracy, is_accurate};
