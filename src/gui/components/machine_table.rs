// src/gui/components/machine_table.rs
//
// Draws the active view (filtered list or missing list) and applies row
// clicks straight to the session. Present rows get the same green fill
// the handheld original used.

use eframe::egui::{self, RichText, Sense};
use egui_extras::{Column, TableBuilder};

use crate::gui::{actions, app::App};
use crate::machines::Machine;

const PRESENT_FILL: egui::Color32 = egui::Color32::from_rgb(0xA8, 0xE6, 0xA3);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Rows are cloned out of the session so clicks can borrow `app`
    // mutably after the table closes over them.
    let rows: Vec<Machine> = if app.state.gui.show_missing {
        // The missing view ignores the id query on purpose.
        app.session.missing().into_iter().cloned().collect()
    } else {
        app.session
            .filter_by_id(&app.state.gui.query)
            .into_iter()
            .cloned()
            .collect()
    };

    if rows.is_empty() {
        if app.session.roster().is_empty() {
            ui.label("No machines loaded");
        } else if app.state.gui.show_missing {
            ui.label("Nothing missing");
        } else {
            ui.label(format!("No ids match \"{}\"", app.state.gui.query));
        }
        return;
    }

    // Row selection doubles as the present highlight.
    {
        let visuals = &mut ui.style_mut().visuals;
        visuals.selection.bg_fill = PRESENT_FILL;
        visuals.selection.stroke.color = egui::Color32::BLACK;
    }

    let mut clicked: Option<String> = None;

    TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .column(Column::auto().at_least(60.0))  // Id
        .column(Column::remainder().clip(true)) // Name
        .column(Column::auto().at_least(90.0))  // Category
        .column(Column::auto().at_least(80.0))  // Status
        .min_scrolled_height(0.0)
        .header(24.0, |mut header| {
            for title in ["Id", "Name", "Category", "Status"] {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(22.0, rows.len(), |mut row| {
                let m = &rows[row.index()];
                row.set_selected(app.session.is_present(&m.id));
                row.col(|ui| {
                    ui.label(&m.id);
                });
                row.col(|ui| {
                    ui.label(&m.name);
                });
                row.col(|ui| {
                    ui.label(&m.category);
                });
                row.col(|ui| {
                    ui.label(&m.status);
                });
                if row.response().clicked() {
                    clicked = Some(m.id.clone());
                }
            });
        });

    if let Some(id) = clicked {
        actions::row_clicked(app, &id);
    }
}
