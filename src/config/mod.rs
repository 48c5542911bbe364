pub mod cli;
pub mod scenario;

use crate::core::ConfigProvider;
use crate::domain::model::SampleRange;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_bounds, validate_non_empty_string, validate_path, validate_positive_number, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "risk-sim")]
#[command(about = "Monte Carlo risk estimation over uniform likelihood and impact factors")]
pub struct CliConfig {
    /// Number of simulation trials
    #[arg(long, default_value = "10000")]
    pub iterations: usize,

    #[arg(long, default_value = "2.0")]
    pub likelihood_min: f64,

    #[arg(long, default_value = "5.0")]
    pub likelihood_max: f64,

    #[arg(long, default_value = "2.0")]
    pub impact_min: f64,

    #[arg(long, default_value = "5.0")]
    pub impact_max: f64,

    /// Directory the histogram image is written to (created if absent)
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Base name of the histogram image, without extension
    #[arg(long, default_value = "risk_distribution")]
    pub output_name: String,

    /// Histogram bin count
    #[arg(long, default_value = "50")]
    pub bins: usize,

    /// Fixed RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn iterations(&self) -> usize {
        self.iterations
    }

    fn likelihood_range(&self) -> Result<SampleRange> {
        SampleRange::new("likelihood", self.likelihood_min, self.likelihood_max)
    }

    fn impact_range(&self) -> Result<SampleRange> {
        SampleRange::new("impact", self.impact_min, self.impact_max)
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_basename(&self) -> &str {
        &self.output_name
    }

    fn bins(&self) -> usize {
        self.bins
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("iterations", self.iterations, 1)?;
        validate_bounds("likelihood", self.likelihood_min, self.likelihood_max)?;
        validate_bounds("impact", self.impact_min, self.impact_max)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("output_path", &self.output_path)?;
        validate_positive_number("bins", self.bins, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            iterations: 10000,
            likelihood_min: 2.0,
            likelihood_max: 5.0,
            impact_min: 2.0,
            impact_max: 5.0,
            output_path: "./output".to_string(),
            output_name: "risk_distribution".to_string(),
            bins: 50,
            seed: None,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let mut config = base_config();
        config.iterations = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let mut config = base_config();
        config.likelihood_min = 6.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_bins_rejected() {
        let mut config = base_config();
        config.bins = 0;
        assert!(config.validate().is_err());
    }
}
