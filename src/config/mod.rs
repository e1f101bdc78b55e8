// * Configuration: fixed constants plus the runtime settings passed into each stage

pub mod constants;
pub mod settings;

pub use settings::{DestinationConfig, LlmConfig, PipelineConfig, SourceSite, StagePaths};
