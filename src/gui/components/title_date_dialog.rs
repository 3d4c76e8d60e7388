//! Modal dialog for editing the countdown title and target date

use eframe::egui;
use egui_extras::DatePickerButton;

use crate::edit::Draft;

use super::super::constants::{DIALOG_MIN_WIDTH, ITEM_SPACING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Open,
    Committed,
    Cancelled,
}

/// Shows the dialog bound to `draft` and reports how the user resolved it.
/// Escape counts as Cancel.
pub fn show(ctx: &egui::Context, draft: &mut Draft) -> DialogOutcome {
    let modal = egui::Modal::new(egui::Id::new("title_date_dialog")).show(ctx, |ui| {
        ui.set_min_width(DIALOG_MIN_WIDTH);
        let mut outcome = DialogOutcome::Open;

        ui.label(egui::RichText::new("Set Countdown Title and Date").heading().strong());
        ui.add_space(ITEM_SPACING);

        ui.label("Title:");
        ui.add(
            egui::TextEdit::singleline(&mut draft.title)
                .hint_text("Enter countdown title")
                .desired_width(f32::INFINITY),
        );

        ui.add_space(ITEM_SPACING);

        ui.label("Date:");
        ui.add(
            DatePickerButton::new(&mut draft.date)
                .id_salt("countdown_target_date")
                .calendar_week(false),
        );

        ui.add_space(ITEM_SPACING);
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                outcome = DialogOutcome::Committed;
            }
            if ui.button("Cancel").clicked() {
                outcome = DialogOutcome::Cancelled;
            }
        });

        outcome
    });

    if modal.inner == DialogOutcome::Open && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        return DialogOutcome::Cancelled;
    }
    modal.inner
}
