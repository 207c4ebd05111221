//! Gomoku desktop application entry point

use std::path::Path;

use gomoku_duel::config::{AppConfig, CONFIG_FILE};
use gomoku_duel::ui::GomokuApp;

fn main() -> Result<(), eframe::Error> {
    let config = match AppConfig::load_or_default(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading {CONFIG_FILE}: {err}");
            AppConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 720.0])
            .with_min_inner_size([760.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
}
