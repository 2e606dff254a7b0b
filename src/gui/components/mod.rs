// src/gui/components/mod.rs
pub mod aesthetics_panel;
pub mod chart_view;
pub mod export_bar;
pub mod highlight_panel;
pub mod league_panel;
pub mod standings_grid;
