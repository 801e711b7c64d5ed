use eframe::egui::{Color32, Sense, Ui, Vec2};

use crate::config::UI_CONFIG;
use crate::ui::apply_opacity;

// Placeholder bar widths roughly matching the live table columns.
const BAR_WIDTHS: &[f32] = &[28.0, 150.0, 100.0, 60.0, 80.0, 80.0, 40.0, 85.0];

/// Pulsing placeholder rows shown while the simulated fetch is pending.
/// The caller keeps repainting while this is on screen.
pub(crate) fn render_skeleton_table(ui: &mut Ui) {
    let time = ui.input(|i| i.time);
    let phase = (time * std::f64::consts::TAU / UI_CONFIG.skeleton_pulse_secs).sin();
    let alpha = 0.55 + 0.35 * phase as f32;
    let fill = apply_opacity(UI_CONFIG.colors.skeleton, alpha);

    ui.add_space(8.0);
    for _ in 0..UI_CONFIG.skeleton_rows {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 18.0;
            for &width in BAR_WIDTHS {
                placeholder_bar(ui, width, fill);
            }
        });
        ui.add_space(14.0);
    }
}

fn placeholder_bar(ui: &mut Ui, width: f32, fill: Color32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 12.0), Sense::hover());
    ui.painter().rect_filled(rect, 3.0, fill);
}
