use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::config::FeedTuning;
use crate::domain::{Chain, TokenId, TokenRecord};

// Name pools for the mock catalog. Pairing one of each gives enough variety
// that a 15-row batch rarely repeats a name.
const NAME_PREFIXES: &[&str] = &[
    "Nebula", "Quantum", "Turbo", "Pixel", "Mochi", "Vortex", "Solar", "Crimson", "Echo", "Nova",
    "Drift", "Ember", "Lunar", "Prism", "Zephyr", "Onyx",
];

const NAME_SUFFIXES: &[&str] = &[
    "Protocol", "Labs", "Swap", "Inu", "Finance", "Network", "Cat", "Forge", "Yield", "Vault",
    "Dog", "Chain",
];

/// The mock data source: owns the injected RNG and produces token batches
/// and perturbed replacement collections. Pure apart from its RNG.
pub struct TokenFeed {
    rng: SmallRng,
    perturb_chance: f64,
    max_drift_pct: f64,
}

impl Default for TokenFeed {
    fn default() -> Self {
        Self::from_seed(None, &FeedTuning::default())
    }
}

impl TokenFeed {
    pub fn new(rng: SmallRng, tuning: &FeedTuning) -> Self {
        Self {
            rng,
            perturb_chance: tuning.perturb_chance,
            max_drift_pct: tuning.max_drift_pct,
        }
    }

    /// Seeded for reproducible sessions, entropy-backed otherwise.
    pub fn from_seed(seed: Option<u64>, tuning: &FeedTuning) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::new(rng, tuning)
    }

    /// Initial load: a fresh batch of `count` records for `chain`.
    /// Ids are 1..=count, unique within the batch and stable across ticks.
    pub fn generate(&mut self, count: usize, chain: Chain) -> Vec<TokenRecord> {
        (0..count)
            .map(|i| {
                let prefix = NAME_PREFIXES[self.rng.gen_range(0..NAME_PREFIXES.len())];
                let suffix = NAME_SUFFIXES[self.rng.gen_range(0..NAME_SUFFIXES.len())];
                let name = format!("{prefix} {suffix}");
                let symbol = make_symbol(prefix, i + 1);

                TokenRecord {
                    id: TokenId::new(i as u32 + 1),
                    name,
                    symbol,
                    chain,
                    price: round_6dp(self.rng.gen_range(0.0..10.0)),
                    last_price: None,
                    change_24h: self.rng.gen_range(-10.0..10.0),
                    liquidity: self.rng.gen_range(10_000.0_f64..510_000.0).floor(),
                    fdv: self.rng.gen_range(500_000.0_f64..20_500_000.0).floor(),
                    age: format!("{}m", self.rng.gen_range(1..=59)),
                    volume_5m: self.rng.gen_range(0.0_f64..10_000.0).floor(),
                }
            })
            .collect()
    }

    /// One refresh tick: a replacement collection in which a `perturb_chance`
    /// fraction of records gets a bounded price drift. Every record, touched
    /// or not, has its last price advanced so a highlight survives exactly
    /// one tick.
    pub fn tick(&mut self, current: &[TokenRecord]) -> Vec<TokenRecord> {
        current
            .iter()
            .map(|token| {
                let mut next = token.clone();
                next.last_price = Some(token.price);
                if self.rng.gen_bool(self.perturb_chance) {
                    let drift = self.rng.gen_range(-1.0..1.0) * self.max_drift_pct * token.price;
                    next.price = clamp_price(token.price, token.price + drift);
                }
                next
            })
            .collect()
    }
}

/// Defensive bound on a perturbed price: negatives clamp to zero, and a
/// non-finite candidate leaves the price untouched for this tick.
pub(crate) fn clamp_price(previous: f64, candidate: f64) -> f64 {
    if !candidate.is_finite() {
        return previous;
    }
    candidate.max(0.0)
}

fn make_symbol(prefix: &str, ordinal: usize) -> String {
    let stem: String = prefix.chars().take(3).collect();
    format!("{}{}", stem.to_uppercase(), ordinal)
}

#[inline]
fn round_6dp(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}
