// src/gui/components/file_bar.rs
//
// Path field + Load button + the one-line status label. The load itself
// runs on a worker thread (see actions::load); the spinner shows while
// it is in flight.

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("File:");

        let field = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.file_path_text)
                .font(egui::TextStyle::Monospace)
                .hint_text("path/to/export.html")
                .desired_width(ui.available_width() - 80.0),
        );
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let button_load = ui.add_enabled(!app.running, egui::Button::new("Load"));
        if button_load.clicked() || submitted {
            actions::load(app);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }
    });

    let status = app.status.lock().unwrap().clone();
    ui.label(status);
}
