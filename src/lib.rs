#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod domain;
pub mod feed;
pub mod screener;
pub mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use config::{FEED, FeedTuning, Tab};
pub use domain::{Chain, SortDirective, SortField, TokenRecord};
pub use feed::TokenFeed;
pub use screener::ScreenerState;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed the mock feed RNG for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Refresh interval override in milliseconds (minimum 100)
    #[arg(long)]
    pub refresh_ms: Option<u64>,

    /// Per-record perturbation probability per tick, 0.0..=1.0
    /// (1.0 perturbs every record every tick)
    #[arg(long)]
    pub churn: Option<f64>,
}

impl Cli {
    /// Fold CLI overrides into the default feed tuning.
    pub fn feed_tuning(&self) -> anyhow::Result<FeedTuning> {
        let mut tuning = FeedTuning::default();
        if let Some(ms) = self.refresh_ms {
            anyhow::ensure!(ms >= 100, "--refresh-ms must be at least 100 (got {ms})");
            tuning.refresh_interval = std::time::Duration::from_millis(ms);
        }
        if let Some(churn) = self.churn {
            anyhow::ensure!(
                (0.0..=1.0).contains(&churn),
                "--churn must be within 0.0..=1.0 (got {churn})"
            );
            tuning.perturb_chance = churn;
        }
        Ok(tuning)
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli, tuning: FeedTuning) -> App {
    App::new(cc, args, tuning)
}
