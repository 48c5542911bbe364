use crate::adapters::chart;
use crate::core::{combine, sampler, stats};
use crate::core::{ConfigProvider, FactorSamples, Pipeline, SimulationResult, Storage};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

pub const DEFAULT_BASENAME: &str = "risk_distribution";

pub struct MonteCarloPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MonteCarloPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Seeded runs reproduce identical distributions; unseeded runs pull
    /// from OS entropy.
    fn make_rng(&self) -> StdRng {
        match self.config.seed() {
            Some(seed) => {
                tracing::debug!("Using fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }

    fn output_filename(&self) -> String {
        let basename = self.config.output_basename().trim();
        if basename.is_empty() {
            format!("{}.png", DEFAULT_BASENAME)
        } else {
            format!("{}.png", basename)
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for MonteCarloPipeline<S, C> {
    fn sample(&self) -> Result<FactorSamples> {
        let likelihood_range = self.config.likelihood_range()?;
        let impact_range = self.config.impact_range()?;
        let iterations = self.config.iterations();

        tracing::debug!(
            "Sampling {} trials: likelihood [{}, {}), impact [{}, {})",
            iterations,
            likelihood_range.min(),
            likelihood_range.max(),
            impact_range.min(),
            impact_range.max()
        );

        let mut rng = self.make_rng();
        let likelihood = sampler::draw(&mut rng, &likelihood_range, iterations)?;
        let impact = sampler::draw(&mut rng, &impact_range, iterations)?;

        Ok(FactorSamples { likelihood, impact })
    }

    fn evaluate(&self, samples: FactorSamples) -> Result<SimulationResult> {
        let risks = combine::multiply(&samples.likelihood, &samples.impact)?;
        let summary = stats::summarize(&risks)?;

        tracing::debug!(
            "Summary: mean {:.4}, median {:.4}, p5 {:.4}, p95 {:.4}",
            summary.mean,
            summary.median,
            summary.p5,
            summary.p95
        );

        Ok(SimulationResult { risks, summary })
    }

    fn publish(&self, result: &SimulationResult) -> Result<String> {
        let png = chart::render_histogram(&result.risks, &result.summary, self.config.bins())?;
        let filename = self.output_filename();

        tracing::debug!("Writing {} bytes to {}", png.len(), filename);
        self.storage.write_file(&filename, &png)?;

        let full_path = Path::new(self.config.output_path()).join(&filename);
        Ok(full_path.to_string_lossy().into_owned())
    }
}
