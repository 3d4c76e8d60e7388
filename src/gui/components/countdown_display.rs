//! Countdown display: title, target date and the four numeric boxes

use eframe::egui::{self, RichText};

use crate::countdown::CountdownEngine;

use super::super::constants::*;

/// Zero-padded two digit field text
pub fn format_field(value: i64) -> String {
    format!("{value:02}")
}

/// Renders the countdown and returns true when "Change Title/Date" was clicked
pub fn ui(ui: &mut egui::Ui, engine: &CountdownEngine) -> bool {
    ui.label(
        RichText::new(engine.title())
            .size(TITLE_SIZE)
            .strong()
            .color(TITLE_COLOR),
    );

    ui.horizontal(|ui| {
        ui.label(RichText::new("\u{1F4C5}").size(DATE_SIZE));
        ui.label(
            RichText::new(engine.formatted_target())
                .size(DATE_SIZE)
                .color(DATE_COLOR),
        );
    });

    ui.add_space(SECTION_SPACING);

    let values = engine.remaining().fields();
    ui.columns(FIELD_LABELS.len(), |columns| {
        for ((column, label), value) in columns.iter_mut().zip(FIELD_LABELS).zip(values) {
            field_box(column, label, value);
        }
    });

    ui.add_space(SECTION_SPACING);

    let mut clicked = false;
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let button = egui::Button::new(
            RichText::new("Change Title/Date")
                .size(CAPTION_SIZE)
                .strong()
                .color(TITLE_COLOR),
        )
        .fill(BUTTON_FILL)
        .corner_radius(egui::CornerRadius::same(BUTTON_RADIUS));

        if ui.add(button).clicked() {
            clicked = true;
        }
    });

    clicked
}

fn field_box(ui: &mut egui::Ui, label: &str, value: i64) {
    egui::Frame::new()
        .fill(BOX_FILL)
        .corner_radius(egui::CornerRadius::same(BOX_RADIUS))
        .inner_margin(egui::Margin::same(BOX_MARGIN))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format_field(value))
                        .size(NUMBER_SIZE)
                        .strong()
                        .color(NUMBER_COLOR),
                );
                ui.label(RichText::new(label).size(CAPTION_SIZE).color(CAPTION_COLOR));
            });
        });
}
