// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Id substring the keypad and query field build up.
    pub query: String,

    /// True while the missing-machines view is active.
    pub show_missing: bool,

    /// Path text for the export to load.
    pub file_path_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            query: s!(),
            show_missing: false,
            file_path_text: s!(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
