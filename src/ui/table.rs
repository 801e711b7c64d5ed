use eframe::egui::{Align, Label, Layout, RichText, Sense, Ui};
use egui_extras::{Column, TableBuilder};
use strum::IntoEnumIterator;

use crate::config::UI_CONFIG;
use crate::domain::{PriceTrend, SortDirective, SortField, TokenRecord};
use crate::ui::{chain_color, change_color, format_compact_currency, format_price, format_signed_pct};

/// Renders the sortable token table over an already-ordered view.
/// Returns the field whose header was clicked this frame, if any;
/// the caller feeds that back into the view model.
pub(crate) fn render_token_table(
    ui: &mut Ui,
    view: &[&TokenRecord],
    directive: &SortDirective,
) -> Option<SortField> {
    let mut requested = None;
    let colors = &UI_CONFIG.colors;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(36.0)) // rank
        .column(Column::remainder().at_least(170.0)) // token
        .column(Column::auto().at_least(110.0)) // price
        .column(Column::auto().at_least(70.0)) // 24h
        .column(Column::auto().at_least(90.0)) // liquidity
        .column(Column::auto().at_least(90.0)) // fdv
        .column(Column::auto().at_least(50.0)) // age
        .column(Column::auto().at_least(95.0)) // volume 5m
        .header(24.0, |mut header| {
            header.col(|ui| {
                ui.label(RichText::new("#").color(colors.text_subdued).small());
            });
            for field in SortField::iter() {
                header.col(|ui| {
                    sort_header(ui, field, directive, &mut requested);
                });
            }
        })
        .body(|body| {
            body.rows(UI_CONFIG.table_row_height, view.len(), |mut row| {
                let index = row.index();
                let token = view[index];

                row.col(|ui| {
                    ui.label(RichText::new(format!("{}", index + 1)).color(colors.text_subdued));
                });
                row.col(|ui| {
                    token_cell(ui, token);
                });
                row.col(|ui| {
                    price_cell(ui, token);
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(format_signed_pct(token.change_24h))
                            .color(change_color(token.change_24h))
                            .monospace(),
                    );
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(format_compact_currency(token.liquidity))
                            .color(colors.label),
                    );
                });
                row.col(|ui| {
                    ui.label(RichText::new(format_compact_currency(token.fdv)).color(colors.label));
                });
                row.col(|ui| {
                    ui.label(RichText::new(&token.age).color(colors.label));
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(format_compact_currency(token.volume_5m))
                            .color(colors.label),
                    );
                });
            });
        });

    requested
}

fn sort_header(
    ui: &mut Ui,
    field: SortField,
    directive: &SortDirective,
    requested: &mut Option<SortField>,
) {
    let active = directive.field == Some(field);
    let mut text = field.label().to_string();
    if let Some(arrow) = directive.indicator(field) {
        text.push(' ');
        text.push_str(arrow);
    }

    let color = if active {
        UI_CONFIG.colors.heading
    } else {
        UI_CONFIG.colors.text_subdued
    };

    let response = ui
        .add(Label::new(RichText::new(text).color(color).small().strong()).sense(Sense::click()))
        .on_hover_text(field.hint());
    if response.clicked() {
        *requested = Some(field);
    }
}

fn token_cell(ui: &mut Ui, token: &TokenRecord) {
    let colors = &UI_CONFIG.colors;
    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 0.0;
        ui.label(RichText::new(&token.name).color(colors.heading));
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(&token.symbol).color(colors.text_subdued).small());
            ui.label(
                RichText::new(token.chain.to_string())
                    .color(chain_color(token.chain))
                    .small(),
            );
        });
    });
}

// Flash the cell for the one tick where price differs from last price.
fn price_cell(ui: &mut Ui, token: &TokenRecord) {
    let colors = &UI_CONFIG.colors;
    let text = RichText::new(format_price(token.price)).monospace();
    let text = match token.trend() {
        PriceTrend::Up => text
            .color(colors.price_up)
            .background_color(colors.flash_up_bg),
        PriceTrend::Down => text
            .color(colors.price_down)
            .background_color(colors.flash_down_bg),
        PriceTrend::Flat => text.color(colors.label),
    };
    ui.label(text);
}
