// src/gui/components/mode_bar.rs
//
// "Machine list" / "Missing" switch plus the bulk-mark entry point.
// Fills mirror the handheld original: green list button, red missing.

use eframe::egui::{self, Align, Button, Color32, Layout, RichText};

use crate::gui::{actions, app::App};

const LIST_FILL: Color32 = Color32::from_rgb(0xA8, 0xE6, 0xA3);
const MISSING_FILL: Color32 = Color32::from_rgb(0xFF, 0xA3, 0xA3);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let showing_missing = app.state.gui.show_missing;

        if mode_button(ui, "Machine list", !showing_missing, LIST_FILL).clicked()
            && showing_missing
        {
            app.state.gui.show_missing = false;
            logf!("UI: View → machine list");
            app.status("Machine list");
        }

        if mode_button(ui, "Missing", showing_missing, MISSING_FILL).clicked()
            && !showing_missing
        {
            app.state.gui.show_missing = true;
            logf!("UI: View → missing");
            app.status("Missing machines");
        }

        if ui.button("Mark by status…").clicked() {
            actions::open_status_pick(app);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(format!(
                "{} of {} present",
                app.session.present_count(),
                app.session.roster().len()
            ));
        });
    });
}

/// The active mode gets its fill color; the inactive one stays plain.
fn mode_button(ui: &mut egui::Ui, text: &str, active: bool, fill: Color32) -> egui::Response {
    if active {
        ui.add(Button::new(RichText::new(text).color(Color32::BLACK).strong()).fill(fill))
    } else {
        ui.button(text)
    }
}
