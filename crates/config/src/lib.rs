#![forbid(unsafe_code)]

mod error;
mod input;
mod output;
mod scoring;

pub use error::Error;
pub use input::Input;
pub use output::{Output, OutputFormat};
pub use scoring::Scoring;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Evaluation settings.
///
/// Every section falls back to its defaults, so a config file only needs the
/// keys it wants to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub scoring: Scoring,
    pub input: Input,
    pub output: Output,
}

impl Config {
    /// Default configuration, no file involved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a TOML config file layered over the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }

        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .extract()?;
        Ok(config.clamp())
    }

    /// Parse a TOML string layered over the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()?;
        Ok(config.clamp())
    }

    /// Render the configuration as a TOML document.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml_edit::ser::to_string_pretty(self)?)
    }

    fn clamp(mut self) -> Self {
        self.scoring = self.scoring.clamp();
        self
    }
}
