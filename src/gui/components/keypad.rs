// src/gui/components/keypad.rs
//
// Digit pad for id entry, phone-pad order like the handheld original.
// The buttons edit the same query string as the text field above them;
// the query narrows the machine list view only, never the missing view.

use eframe::egui::{self, Button, Vec2};

use crate::gui::app::App;

const KEY_SIZE: Vec2 = Vec2::new(56.0, 34.0);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Id:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.query)
                .font(egui::TextStyle::Monospace)
                .hint_text("id contains…"),
        );
    });

    let keys: [[&str; 3]; 4] = [
        ["7", "8", "9"],
        ["4", "5", "6"],
        ["1", "2", "3"],
        ["C", "0", "⌫"],
    ];

    for row in keys {
        ui.horizontal(|ui| {
            for key in row {
                if !ui.add(Button::new(key).min_size(KEY_SIZE)).clicked() {
                    continue;
                }
                match key {
                    "C" => app.state.gui.query.clear(),
                    "⌫" => {
                        app.state.gui.query.pop();
                    }
                    digit => app.state.gui.query.push_str(digit),
                }
                logd!("UI: Query → {:?}", app.state.gui.query);
            }
        });
    }
}
