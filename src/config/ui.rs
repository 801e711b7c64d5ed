use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub heading: Color32,
    pub label: Color32,
    pub text_subdued: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub tab_active: Color32,

    // Market movement colors
    pub price_up: Color32,
    pub price_down: Color32,
    pub flash_up_bg: Color32,
    pub flash_down_bg: Color32,

    // Chain badges
    pub chain_ethereum: Color32,
    pub chain_base: Color32,

    // Loading placeholders
    pub skeleton: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub skeleton_rows: usize,
    /// Full pulse cycle of the skeleton shimmer, in seconds.
    pub skeleton_pulse_secs: f64,
    pub table_row_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        heading: Color32::WHITE,
        label: Color32::from_rgb(200, 200, 200),
        text_subdued: Color32::from_rgb(130, 130, 140),
        central_panel: Color32::from_rgb(18, 18, 18),
        side_panel: Color32::from_rgb(13, 13, 13),
        tab_active: Color32::from_rgb(37, 99, 235),

        price_up: Color32::from_rgb(74, 222, 128),
        price_down: Color32::from_rgb(248, 113, 113),
        flash_up_bg: Color32::from_rgba_premultiplied(12, 40, 20, 60),
        flash_down_bg: Color32::from_rgba_premultiplied(45, 15, 15, 60),

        chain_ethereum: Color32::from_rgb(98, 126, 234),
        chain_base: Color32::from_rgb(0, 82, 255),

        skeleton: Color32::from_rgb(55, 55, 60),
    },
    skeleton_rows: 10,
    skeleton_pulse_secs: 1.2,
    table_row_height: 34.0,
};

impl UiConfig {
    /// Frame for the header (title + tab strip)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the bottom status bar (tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    /// Frame for the table area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }
}

/// Static UI strings
pub struct UiText {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub status_live: &'static str,
    pub status_paused: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    heading: "Token Discovery",
    tagline: "Discover the next big token on Base and Ethereum.",
    status_live: "● LIVE",
    status_paused: "⏸ PAUSED",
};
