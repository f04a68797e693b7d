use eframe::egui;

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// Compile-time defaults for the window and the chart.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    /// Heading drawn above every plot.
    pub plot_title: String,
    /// Approximate number of major ticks on the Y axis.
    pub y_tick_target: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Graph Visualizer".to_string(),
            inner_size: [1600.0, 800.0],
            min_inner_size: [600.0, 400.0],
            plot_title: "Selected Columns".to_string(),
            y_tick_target: 10,
        }
    }
}

impl AppConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(&self.window_title)
                .with_inner_size(self.inner_size)
                .with_min_inner_size(self.min_inner_size)
                .with_resizable(true),
            ..Default::default()
        }
    }
}
