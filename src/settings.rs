//! User-facing projection settings
//!
//! Settings arrive from bounded UI controls or a JSON file. Raw horizon input is
//! clamped here, at the boundary; the engine itself only rejects what it cannot compute.

use chrono::{Datelike, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

use crate::projection::{ProjectionConfig, DEFAULT_HORIZON_YEARS, DEFAULT_INFLATION_RATE_PCT};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_horizon_years() -> i64 {
    DEFAULT_HORIZON_YEARS
}

fn default_inflation_rate_pct() -> f64 {
    DEFAULT_INFLATION_RATE_PCT
}

fn current_year() -> i32 {
    Utc::now().year()
}

/// Horizon, inflation and as-of year chosen by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSettings {
    #[serde(default = "default_horizon_years")]
    pub horizon_years: i64,

    #[serde(default = "default_inflation_rate_pct")]
    pub inflation_rate_pct: f64,

    #[serde(default = "current_year")]
    pub as_of_year: i32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            inflation_rate_pct: DEFAULT_INFLATION_RATE_PCT,
            as_of_year: current_year(),
        }
    }
}

impl ProjectionSettings {
    /// Load settings from a JSON file; missing fields take their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the horizon from raw text input, falling back to the default on bad input
    pub fn set_horizon_input(&mut self, input: &str) {
        self.horizon_years = parse_horizon_input(input);
    }

    pub fn to_config(&self) -> ProjectionConfig {
        ProjectionConfig {
            horizon_years: self.horizon_years,
            inflation_rate_pct: self.inflation_rate_pct,
            as_of_year: self.as_of_year,
        }
    }
}

impl From<ProjectionSettings> for ProjectionConfig {
    fn from(settings: ProjectionSettings) -> Self {
        settings.to_config()
    }
}

/// Parse a horizon typed by the user. Anything that is not a positive whole number
/// of years becomes the default of 30.
pub fn parse_horizon_input(input: &str) -> i64 {
    match input.trim().parse::<i64>() {
        Ok(years) if years > 0 => years,
        _ => {
            warn!("horizon input {:?} is not a positive whole number, using {}", input, DEFAULT_HORIZON_YEARS);
            DEFAULT_HORIZON_YEARS
        }
    }
}
