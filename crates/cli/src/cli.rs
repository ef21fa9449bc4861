use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use config::{Config, OutputFormat};
use std::path::{Path, PathBuf};

/// Anomaly eval: score anomaly predictions against labeled intervals
///
/// A prediction is accurate when it lies strictly inside the tolerance window
/// of its series' true anomaly: the interval widened on each side by the
/// larger of its length and the accepted inaccuracy.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Path to the predictions file.
    ///
    /// Every line must be of the form `data_id,prediction_idx`.
    #[arg(value_parser = validate_file, required_unless_present = "dump_config")]
    pub pred_path: Option<PathBuf>,

    /// Path to the CSV file with the true anomaly intervals.
    ///
    /// Overrides `input.data_path` from the configuration file.
    #[arg(short, long)]
    pub data_path: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, value_parser = validate_file)]
    pub conffile: Option<PathBuf>,

    /// Slack in samples granted around short anomalies.
    #[arg(long, value_parser = validate_inaccuracy)]
    pub accepted_inaccuracy: Option<i64>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub dump_config: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.data_path {
            config.input.data_path = path.clone();
        }
        if let Some(slack) = self.accepted_inaccuracy {
            config.scoring.accepted_inaccuracy = slack;
        }
        if self.json {
            config.output.format = OutputFormat::Json;
        }
    }
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

/// Validate accepted inaccuracy
#[inline(always)]
fn validate_inaccuracy(slack: &str) -> Result<i64, String> {
    let slack: i64 = slack
        .parse()
        .map_err(|_| format!("`{slack}` is not a valid number of samples"))?;
    if slack >= 0 {
        Ok(slack)
    } else {
        Err("Accepted inaccuracy must not be negative".to_string())
    }
}
