// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Output text field UX; parsed into ExportOptions on export.
    pub out_dir_text: String,

    /// Show the raw standings grid under the chart.
    pub show_grid: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            out_dir_text: s!(),
            show_grid: false,
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
