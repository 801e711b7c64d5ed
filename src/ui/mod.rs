mod format;
mod panels;
mod skeleton;
mod styles;
mod table;

pub(crate) use format::{format_compact_currency, format_price, format_signed_pct};
pub(crate) use skeleton::render_skeleton_table;
pub(crate) use styles::{apply_opacity, chain_color, change_color};
pub(crate) use table::render_token_table;
