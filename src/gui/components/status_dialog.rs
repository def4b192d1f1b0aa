// src/gui/components/status_dialog.rs
//
// Picker over the distinct status labels in the roster. OK bulk-marks
// every machine with a checked status; Cancel discards. Marking is
// additive, a machine already present stays present.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(picks) = app.status_pick.as_mut() else {
        return;
    };

    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Mark by status")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            for (label, checked) in picks.iter_mut() {
                let text = if label.is_empty() { "(no status)" } else { label.as_str() };
                ui.checkbox(checked, text);
            }
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    confirmed = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        let statuses: Vec<String> = app
            .status_pick
            .take()
            .unwrap_or_default()
            .into_iter()
            .filter(|(_, checked)| *checked)
            .map(|(label, _)| label)
            .collect();
        let added = app.session.mark_present_by_statuses(&statuses);
        logf!("UI: Mark by status {:?} → {} new", statuses, added);
        app.status(format!("Marked {added} machines present"));
    } else if cancelled {
        app.status_pick = None;
    }
}
