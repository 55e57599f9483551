pub mod cache;
pub mod hf;

use std::{fmt::Debug, future::Future};

use crate::{error::EngineFailure, params::LengthBounds};

/// Boundary to the external summarization capability.
///
/// An engine instance serves a single model profile; profile selection
/// happens when the instance is constructed (see [`cache::EngineCache`]).
/// Implementations must be deterministic given identical text and bounds,
/// i.e. sampling disabled.
pub trait SummaryEngine {
    type Error: Into<EngineFailure> + Debug;

    fn summarize(
        &self,
        text: &str,
        bounds: LengthBounds,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
