use crate::utils::error::{Result, SimError};
use serde::{Deserialize, Serialize};

/// Inclusive-exclusive bounds for one uniform factor. `min == max` is a
/// degenerate but legal range that samples to a constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    min: f64,
    max: f64,
}

impl SampleRange {
    pub fn new(field: &str, min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SimError::InvalidRange {
                field: field.to_string(),
                reason: format!("bounds must be finite, got [{}, {}]", min, max),
            });
        }
        if min > max {
            return Err(SimError::InvalidRange {
                field: field.to_string(),
                reason: format!("min {} exceeds max {}", min, max),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// One uniform draw per simulation trial. Length is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet(Vec<f64>);

impl SampleSet {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Elementwise likelihood * impact products; derived, immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskSet(Vec<f64>);

impl RiskSet {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Summary statistics derived once from a RiskSet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub mean: f64,
    pub median: f64,
    pub p5: f64,
    pub p95: f64,
}

/// Output of the sampling phase: one set per factor, equal length.
#[derive(Debug, Clone)]
pub struct FactorSamples {
    pub likelihood: SampleSet,
    pub impact: SampleSet,
}

/// Output of the evaluation phase.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub risks: RiskSet,
    pub summary: StatisticsSummary,
}
