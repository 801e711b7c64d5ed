//! Configuration module for the token-radar application.

mod debug;
mod feed;
mod tabs;
mod ui;

// Re-export commonly used items
pub use debug::DF;
pub use feed::{FEED, FeedConfig, FeedTuning};
pub use tabs::{Tab, TabSpec};
pub use ui::{UI_CONFIG, UI_TEXT, UiConfig};
