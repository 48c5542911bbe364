use crate::core::ConfigProvider;
use crate::domain::model::SampleRange;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_bounds, validate_path, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML scenario file describing one simulation run. Output settings are
/// optional and fall back to the CLI defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub simulation: SimulationSection,
    pub likelihood: RangeSection,
    pub impact: RangeSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSection {
    pub name: String,
    pub description: Option<String>,
    pub iterations: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeSection {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
    pub basename: Option<String>,
    pub bins: Option<usize>,
}

impl ScenarioConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(Path::new(path))?;
        let config: ScenarioConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn name(&self) -> &str {
        &self.simulation.name
    }
}

impl ConfigProvider for ScenarioConfig {
    fn iterations(&self) -> usize {
        self.simulation.iterations
    }

    fn likelihood_range(&self) -> Result<SampleRange> {
        SampleRange::new("likelihood", self.likelihood.min, self.likelihood.max)
    }

    fn impact_range(&self) -> Result<SampleRange> {
        SampleRange::new("impact", self.impact.min, self.impact.max)
    }

    fn output_path(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.path.as_deref())
            .unwrap_or("./output")
    }

    fn output_basename(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.basename.as_deref())
            .unwrap_or(crate::core::pipeline::DEFAULT_BASENAME)
    }

    fn bins(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|o| o.bins)
            .unwrap_or(crate::adapters::chart::DEFAULT_BINS)
    }

    fn seed(&self) -> Option<u64> {
        self.simulation.seed
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("simulation.iterations", self.simulation.iterations, 1)?;
        validate_bounds("likelihood", self.likelihood.min, self.likelihood.max)?;
        validate_bounds("impact", self.impact.min, self.impact.max)?;
        validate_path("output.path", self.output_path())?;
        validate_positive_number("output.bins", self.bins(), 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_SCENARIO: &str = r#"
        [simulation]
        name = "baseline"
        description = "Quarterly exposure estimate"
        iterations = 10000
        seed = 42

        [likelihood]
        min = 2.0
        max = 5.0

        [impact]
        min = 2.0
        max = 5.0

        [output]
        path = "./reports"
        basename = "q3_risk"
        bins = 40
    "#;

    const MINIMAL_SCENARIO: &str = r#"
        [simulation]
        name = "minimal"
        iterations = 500

        [likelihood]
        min = 1.0
        max = 2.0

        [impact]
        min = 1.0
        max = 2.0
    "#;

    #[test]
    fn test_full_scenario_parses_and_validates() {
        let config: ScenarioConfig = toml::from_str(FULL_SCENARIO).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.name(), "baseline");
        assert_eq!(config.iterations(), 10000);
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.output_path(), "./reports");
        assert_eq!(config.output_basename(), "q3_risk");
        assert_eq!(config.bins(), 40);
    }

    #[test]
    fn test_minimal_scenario_uses_output_defaults() {
        let config: ScenarioConfig = toml::from_str(MINIMAL_SCENARIO).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.seed(), None);
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.output_basename(), "risk_distribution");
        assert_eq!(config.bins(), 50);
    }

    #[test]
    fn test_inverted_scenario_bounds_rejected() {
        let mut config: ScenarioConfig = toml::from_str(MINIMAL_SCENARIO).unwrap();
        config.impact.min = 9.0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_section_fails_to_parse() {
        let broken = r#"
            [simulation]
            name = "broken"
            iterations = 100
        "#;
        assert!(toml::from_str::<ScenarioConfig>(broken).is_err());
    }
}
