mod app;
mod config;
mod data;
mod error;
mod state;
mod ui;

use app::GraphVisualizerApp;
use config::AppConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::default();
    let options = config.native_options();
    let title = config.window_title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(GraphVisualizerApp::new(config)))),
    )
}
