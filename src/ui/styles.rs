use eframe::egui::Color32;

use crate::config::UI_CONFIG;
use crate::domain::Chain;

pub(crate) fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

/// Green for gains, red for losses. Zero counts as a gain, matching how
/// the 24h column renders a flat day.
pub(crate) fn change_color(value: f64) -> Color32 {
    if value >= 0.0 {
        UI_CONFIG.colors.price_up
    } else {
        UI_CONFIG.colors.price_down
    }
}

pub(crate) fn chain_color(chain: Chain) -> Color32 {
    match chain {
        Chain::Ethereum => UI_CONFIG.colors.chain_ethereum,
        Chain::Base => UI_CONFIG.colors.chain_base,
    }
}
