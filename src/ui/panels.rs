use eframe::egui::{Align, CentralPanel, Context, Layout, RichText, TopBottomPanel};
use strum::IntoEnumIterator;

use crate::app::App;
use crate::config::{Tab, UI_CONFIG, UI_TEXT};
use crate::domain::SortField;
use crate::ui::{render_skeleton_table, render_token_table};

impl App {
    /// Title, tagline and the tab strip. Returns a newly clicked tab.
    pub(crate) fn render_header_panel(&self, ctx: &Context) -> Option<Tab> {
        let mut clicked = None;
        TopBottomPanel::top("header_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.add_space(2.0);
                ui.heading(
                    RichText::new(UI_TEXT.heading)
                        .color(UI_CONFIG.colors.heading)
                        .strong(),
                );
                ui.label(RichText::new(UI_TEXT.tagline).color(UI_CONFIG.colors.text_subdued));
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    for tab in Tab::iter() {
                        let spec = tab.spec();
                        let selected = tab == self.active_tab;
                        let label = format!("{} ({})", spec.label, spec.count);
                        let text = if selected {
                            RichText::new(label)
                                .color(UI_CONFIG.colors.heading)
                                .strong()
                        } else {
                            RichText::new(label).color(UI_CONFIG.colors.label)
                        };
                        if ui.selectable_label(selected, text).clicked() && !selected {
                            clicked = Some(tab);
                        }
                    }
                });
                ui.add_space(2.0);
            });
        clicked
    }

    pub(crate) fn render_status_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                let colors = &UI_CONFIG.colors;
                ui.horizontal(|ui| {
                    if self.paused {
                        ui.label(
                            RichText::new(UI_TEXT.status_paused)
                                .color(colors.price_down)
                                .strong(),
                        );
                    } else {
                        ui.label(
                            RichText::new(UI_TEXT.status_live)
                                .color(colors.price_up)
                                .strong(),
                        );
                    }
                    ui.separator();
                    ui.label(format!("{} tokens", self.screener.len()));
                    ui.separator();
                    ui.label(format!(
                        "refresh {}ms",
                        self.tuning.refresh_interval.as_millis()
                    ));
                    ui.separator();
                    ui.label(format!("tick #{}", self.tick_count));
                    if let Some(stamp) = &self.last_tick {
                        ui.separator();
                        ui.label(format!("last {stamp}"));
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let seed_label = match self.seed {
                            Some(seed) => format!("seed {seed}"),
                            None => "seed entropy".to_string(),
                        };
                        ui.label(RichText::new(seed_label).color(colors.text_subdued).small());
                        ui.separator();
                        ui.label(
                            RichText::new("Space pause · R refresh · 1/2/3 tabs")
                                .color(colors.text_subdued)
                                .small(),
                        );
                    });
                });
            });
    }

    /// The live table. Returns a header click for the caller to apply.
    pub(crate) fn render_table_panel(&self, ctx: &Context) -> Option<SortField> {
        let mut requested = None;
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let directive = self.screener.directive();
                let view = self.screener.sorted_view();
                requested = render_token_table(ui, &view, &directive);
            });
        requested
    }

    pub(crate) fn render_skeleton_panel(&self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                render_skeleton_table(ui);
            });
    }
}
