// src/gui/actions.rs
use std::path::PathBuf;

use super::app::App;
use crate::{file, import};

/// Kick off a background read+parse of the file named in the path field.
/// The worker fills `app.pending`; `App::poll_load` applies it.
pub fn load(app: &mut App) {
    if app.running { return; }

    let text = app.state.gui.file_path_text.trim();
    if text.is_empty() {
        app.status("Enter a file path first");
        return;
    }
    let path = PathBuf::from(text);

    app.running = true;
    app.status(format!("Reading {}", path.display()));
    logf!("Load: Begin {}", path.display());

    let pending = app.pending.clone();
    let opts = app.state.options.import.clone();
    std::thread::spawn(move || {
        let outcome = file::read_document(&path)
            .and_then(|html| import::parse_with(&html, &opts));
        *pending.lock().unwrap() = Some(outcome);
    });
}

/// A row click: toggle in the list view, straight mark in the missing
/// view (the row disappears from it, so a second click can't undo).
pub fn row_clicked(app: &mut App, id: &str) {
    if app.state.gui.show_missing {
        if app.session.mark_present(id) {
            logf!("UI: Marked present {}", id);
            app.status(format!("Machine {id} marked present"));
        }
    } else {
        let now_present = app.session.toggle(id);
        let label = app
            .session
            .find_by_id(id)
            .map(|m| m.label())
            .unwrap_or_else(|| s!(id));
        logd!("UI: Toggle {} → present={}", label, now_present);
    }
}

/// Open the bulk-mark picker over the statuses the roster actually has.
pub fn open_status_pick(app: &mut App) {
    let picks: Vec<(String, bool)> = app
        .session
        .distinct_statuses()
        .into_iter()
        .map(|s| (s, false))
        .collect();

    if picks.is_empty() {
        app.status("No statuses to mark by — load a file first");
        return;
    }
    app.status_pick = Some(picks);
}
