// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    import::ImportError,
    machines::Machine,
    session::InventorySession,
};

use super::components;

/// Result of one background file load, handed back to the UI thread.
pub type LoadOutcome = Result<Vec<Machine>, ImportError>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Stocktake",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // roster + present marks for the running stocktake
    pub session: InventorySession,

    // status line (the load worker's messages land here too)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // one-shot slot the load worker fills; polled every frame
    pub pending: Arc<Mutex<Option<LoadOutcome>>>,

    // open "mark by status" picker, if any: (label, checked)
    pub status_pick: Option<Vec<(String, bool)>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: fresh session");
        Self {
            state,
            session: InventorySession::new(),
            status: Arc::new(Mutex::new(s!("No file loaded"))),
            running: false,
            pending: Arc::new(Mutex::new(None)),
            status_pick: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Apply a finished background load, if one is waiting.
    fn poll_load(&mut self) {
        let outcome = self.pending.lock().unwrap().take();
        let Some(outcome) = outcome else { return };

        self.running = false;
        match outcome {
            Ok(machines) => {
                let n = machines.len();
                self.session.reset(machines);
                self.state.gui.query.clear();
                self.state.gui.show_missing = false;
                self.status_pick = None;
                logf!("Load: OK machines={}", n);
                self.status(format!("Loaded {n} machines"));
            }
            Err(e) => {
                // Failed import: current roster and marks stay as they were.
                loge!("Load: {}", e);
                self.status(format!("{e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::top("file_bar").show(ctx, |ui| {
            components::file_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("keypad").show(ctx, |ui| {
            components::keypad::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::mode_bar::draw(ui, self);
            ui.separator();
            components::machine_table::draw(ui, self);
        });

        components::status_dialog::draw(ctx, self);

        if self.running {
            // keep polling the load slot while the worker runs
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
