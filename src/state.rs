use std::path::Path;

use anyhow::Result;

use crate::config::AppConfig;
use crate::data::filter::PlotSeries;
use crate::data::loader::load_csv;
use crate::data::model::Dataset;
use crate::data::selection::{Axis, ColumnSelection};
use crate::error::PlotError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// X / Y toggle records for the current dataset.
    pub selection: ColumnSelection,

    /// The last successful plot. Only replaced by a successful plot request.
    pub plot: Option<PlotSeries>,

    /// Set when `plot` was replaced so the chart drops its old zoom/pan.
    pub reset_plot_view: bool,

    /// Whether `plot` was drawn from the current dataset.
    pub plot_is_current: bool,

    /// A refused plot request, shown in a modal until dismissed.
    pub plot_error: Option<PlotError>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            dataset: None,
            selection: ColumnSelection::default(),
            plot: None,
            reset_plot_view: false,
            plot_is_current: false,
            plot_error: None,
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset and regenerate the toggles.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.selection.rebuild(&dataset.column_names());
        self.status_message = None;
        self.plot_is_current = false;
        self.dataset = Some(dataset);
    }

    /// Load `path` and make it the current dataset. On failure the previous
    /// dataset and selection are left untouched.
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let dataset = load_csv(path)?;
        log::info!(
            "Loaded {} rows with columns {:?} from {}",
            dataset.len(),
            dataset.column_names(),
            path.display()
        );
        self.set_dataset(dataset);
        Ok(())
    }

    pub fn toggle(&mut self, axis: Axis, index: usize) {
        self.selection.toggle(axis, index);
        log::debug!(
            "{axis} axis selection is now {:?}",
            self.selection.group(axis).selected_label()
        );
    }

    /// Rebuild the plot from the current selection. The existing plot is
    /// kept when either axis is unset, and the refusal is stored in
    /// `plot_error`.
    pub fn request_plot(&mut self) -> Result<(), PlotError> {
        let x = self.selection.x.selected();
        let y = self.selection.y.selected();

        let series = match (&self.dataset, self.selection.both_selected()) {
            (Some(ds), Some((x_idx, y_idx))) => {
                PlotSeries::from_columns(ds, x_idx, y_idx, &self.config.plot_title)
            }
            _ => None,
        };

        let Some(series) = series else {
            log::warn!("Plot requested with x={x:?} y={y:?}");
            let error = PlotError::missing_axis(x.is_none(), y.is_none());
            self.plot_error = Some(error.clone());
            return Err(error);
        };

        log::info!(
            "Plotting {} against {}: {} points, {} rows dropped",
            series.y_label,
            series.x_label,
            series.points.len(),
            series.dropped_rows
        );
        self.plot = Some(series);
        self.reset_plot_view = true;
        self.plot_is_current = true;
        self.plot_error = None;
        Ok(())
    }

    pub fn dismiss_plot_error(&mut self) {
        self.plot_error = None;
    }

    /// One-line summary for the menu bar.
    pub fn summary(&self) -> Option<String> {
        let ds = self.dataset.as_ref()?;
        let mut text = format!(
            "{}: {} rows, {} columns",
            ds.display_name(),
            ds.len(),
            ds.columns.len()
        );
        if ds.is_empty() {
            text.push_str(" (no data rows)");
        }
        if let Some(plot) = self.plot.as_ref().filter(|_| self.plot_is_current) {
            text.push_str(&format!(
                " | plotted {} points ({} rows dropped)",
                plot.points.len(),
                plot.dropped_rows
            ));
        }
        Some(text)
    }
}
