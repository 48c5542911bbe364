use crate::domain::model::{FactorSamples, SampleRange, SimulationResult};
use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn iterations(&self) -> usize;
    fn likelihood_range(&self) -> Result<SampleRange>;
    fn impact_range(&self) -> Result<SampleRange>;
    fn output_path(&self) -> &str;
    fn output_basename(&self) -> &str;
    fn bins(&self) -> usize;
    fn seed(&self) -> Option<u64>;
}

pub trait Pipeline {
    fn sample(&self) -> Result<FactorSamples>;
    fn evaluate(&self, samples: FactorSamples) -> Result<SimulationResult>;
    fn publish(&self, result: &SimulationResult) -> Result<String>;
}
