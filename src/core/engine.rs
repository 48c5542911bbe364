use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::report;
use std::time::Instant;

pub struct SimulationEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SimulationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        let started = Instant::now();
        println!("Starting Monte Carlo risk simulation...");

        println!("Drawing samples...");
        let samples = self.pipeline.sample()?;
        println!("Drew {} trials per factor", samples.likelihood.len());

        println!("Evaluating risk distribution...");
        let result = self.pipeline.evaluate(samples)?;

        report::print_summary(&result.summary);

        println!("Rendering histogram...");
        let output_path = self.pipeline.publish(&result)?;
        println!("Histogram saved to: {}", output_path);

        tracing::info!("Simulation finished in {:?}", started.elapsed());
        Ok(output_path)
    }
}
