mod engine;
mod error;
mod metrics;
mod normalizer;
mod params;
mod pipeline;
pub mod export;
pub mod tracing;
pub mod types;

pub use engine::cache::EngineCache;
pub use engine::hf::{HfError, HfInferenceClient};
pub use engine::SummaryEngine;
pub use error::{EngineFailure, PipelineError, ValidationError};
pub use metrics::{compute_metrics, word_count, SummaryMetrics};
pub use normalizer::normalize;
pub use params::{resolve_length_bounds, LengthBounds};
pub use pipeline::{builder::SummaryPipelineBuilder, SummaryPipeline};
pub use types::{SummaryRequest, SummaryResult};
