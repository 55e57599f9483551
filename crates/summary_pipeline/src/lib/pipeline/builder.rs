use std::time::Duration;

use summary_history::ModelProfile;

use crate::{engine::cache::EngineCache, SummaryEngine, SummaryPipeline};

const DEFAULT_ENGINE_TIMEOUT: Duration = Duration::from_secs(60);

pub struct SummaryPipelineBuilder<F = ()> {
    engine_factory: F,
    engine_timeout: Duration,
}

impl SummaryPipelineBuilder {
    pub fn new() -> Self {
        Self {
            engine_factory: (),
            engine_timeout: DEFAULT_ENGINE_TIMEOUT,
        }
    }
}

impl Default for SummaryPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> SummaryPipelineBuilder<F> {
    /// Sets the factory that constructs an engine for a given profile. The
    /// pipeline memoizes one engine per profile, so the factory runs at most
    /// twice over the process lifetime.
    pub fn engine_factory<E2, F2>(self, engine_factory: F2) -> SummaryPipelineBuilder<F2>
    where
        E2: SummaryEngine,
        F2: Fn(ModelProfile) -> E2,
    {
        SummaryPipelineBuilder {
            engine_factory,
            engine_timeout: self.engine_timeout,
        }
    }

    /// Caller-supplied upper bound on a single engine call.
    pub fn engine_timeout(mut self, engine_timeout: Duration) -> Self {
        self.engine_timeout = engine_timeout;
        self
    }
}

impl<E, F> SummaryPipelineBuilder<F>
where
    E: SummaryEngine,
    F: Fn(ModelProfile) -> E,
{
    pub fn build(self) -> SummaryPipeline<E, F> {
        SummaryPipeline {
            engines: EngineCache::new(self.engine_factory),
            engine_timeout: self.engine_timeout,
        }
    }
}
