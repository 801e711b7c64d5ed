use std::time::Duration;

/// Compile-time defaults for the simulated feed.
pub struct FeedConfig {
    /// Simulated network delay before the first batch lands.
    pub initial_load_delay: Duration,
    /// Cadence of the repeating price refresh.
    pub refresh_interval: Duration,
    /// Probability that a given record is perturbed on a tick.
    /// 1.0 reproduces the "perturb everything" variant.
    pub perturb_chance: f64,
    /// Maximum price drift per tick, as a fraction of the current price.
    pub max_drift_pct: f64,
}

pub const FEED: FeedConfig = FeedConfig {
    initial_load_delay: Duration::from_millis(1500),
    refresh_interval: Duration::from_millis(2000),
    perturb_chance: 0.2,
    max_drift_pct: 0.025,
};

/// Runtime feed settings: the compiled defaults plus any CLI overrides.
#[derive(Debug, Clone, Copy)]
pub struct FeedTuning {
    pub refresh_interval: Duration,
    pub perturb_chance: f64,
    pub max_drift_pct: f64,
}

impl Default for FeedTuning {
    fn default() -> Self {
        Self {
            refresh_interval: FEED.refresh_interval,
            perturb_chance: FEED.perturb_chance,
            max_drift_pct: FEED.max_drift_pct,
        }
    }
}
