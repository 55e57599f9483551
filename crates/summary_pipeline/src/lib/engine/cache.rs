use std::sync::OnceLock;

use summary_history::ModelProfile;

/// Memoizing engine cache, one slot per model profile.
///
/// Engine construction is expensive (the underlying capability loads a
/// pretrained model), so each profile is initialized at most once, on first
/// use, and the instance is reused for the rest of the process lifetime.
/// The cache is built once and injected into the pipeline rather than held
/// as global state.
pub struct EngineCache<E, F> {
    init: F,
    primary: OnceLock<E>,
    fast: OnceLock<E>,
}

impl<E, F> EngineCache<E, F>
where
    F: Fn(ModelProfile) -> E,
{
    pub fn new(init: F) -> Self {
        EngineCache {
            init,
            primary: OnceLock::new(),
            fast: OnceLock::new(),
        }
    }

    /// Returns the engine for `profile`, constructing it on first use.
    pub fn get(&self, profile: ModelProfile) -> &E {
        let slot = match profile {
            ModelProfile::Primary => &self.primary,
            ModelProfile::Fast => &self.fast,
        };
        slot.get_or_init(|| {
            tracing::info!(%profile, "Initializing summarization engine");
            (self.init)(profile)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_engine_is_constructed_once_per_profile() {
        let constructed = AtomicUsize::new(0);
        let cache = EngineCache::new(|profile: ModelProfile| {
            constructed.fetch_add(1, Ordering::SeqCst);
            profile.to_string()
        });

        assert_eq!(cache.get(ModelProfile::Primary), "primary");
        assert_eq!(cache.get(ModelProfile::Primary), "primary");
        assert_eq!(constructed.load(Ordering::SeqCst), 1);

        assert_eq!(cache.get(ModelProfile::Fast), "fast");
        assert_eq!(cache.get(ModelProfile::Fast), "fast");
        assert_eq!(constructed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_profiles_get_distinct_instances() {
        let cache = EngineCache::new(|profile: ModelProfile| format!("engine-{profile}"));
        assert_eq!(cache.get(ModelProfile::Fast), "engine-fast");
        assert_eq!(cache.get(ModelProfile::Primary), "engine-primary");
    }
}
