//! GUI module for the gomoku desktop frontend
//!
//! Built with egui/eframe. Contains:
//! - `app`: main application window and CPU turn scheduling
//! - `board_view`: board rendering and click handling
//! - `theme`: colors and layout constants

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
