use crate::domain::model::{RiskSet, SampleSet};
use crate::utils::error::{Result, SimError};

/// Elementwise product of the two factor sample sets. Both sets come from
/// the same iteration count, so a mismatch is an internal consistency
/// violation rather than a user error.
pub fn multiply(likelihood: &SampleSet, impact: &SampleSet) -> Result<RiskSet> {
    if likelihood.len() != impact.len() {
        return Err(SimError::LengthMismatch {
            likelihood: likelihood.len(),
            impact: impact.len(),
        });
    }

    let risks = likelihood
        .values()
        .iter()
        .zip(impact.values())
        .map(|(l, i)| l * i)
        .collect();

    Ok(RiskSet::new(risks))
}
