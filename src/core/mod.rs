pub mod combine;
pub mod engine;
pub mod pipeline;
pub mod sampler;
pub mod stats;

pub use crate::domain::model::{
    FactorSamples, RiskSet, SampleRange, SampleSet, SimulationResult, StatisticsSummary,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
