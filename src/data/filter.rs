use super::model::Dataset;

// ---------------------------------------------------------------------------
// Paired-null filtering
// ---------------------------------------------------------------------------

/// Zip two columns into plot points, dropping every row where either side is
/// null. Row order is kept.
pub fn paired_points(x: &[Option<f64>], y: &[Option<f64>]) -> Vec<[f64; 2]> {
    x.iter()
        .zip(y.iter())
        .filter_map(|(xi, yi)| Some([(*xi)?, (*yi)?]))
        .collect()
}

// ---------------------------------------------------------------------------
// PlotSeries – everything the chart needs for one draw
// ---------------------------------------------------------------------------

/// A fully derived line plot. Rebuilt on every plot request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<[f64; 2]>,
    /// Axis values are epoch seconds and should be labelled as dates.
    pub x_is_time: bool,
    pub y_is_time: bool,
    /// Rows removed because X or Y was null.
    pub dropped_rows: usize,
}

impl PlotSeries {
    /// Build the series for columns `x_idx` / `y_idx`. Returns `None` if
    /// either index is out of range.
    pub fn from_columns(dataset: &Dataset, x_idx: usize, y_idx: usize, title: &str) -> Option<Self> {
        let x_col = dataset.column(x_idx)?;
        let y_col = dataset.column(y_idx)?;

        let points = paired_points(&x_col.values_f64(), &y_col.values_f64());
        Some(PlotSeries {
            title: title.to_string(),
            x_label: x_col.name.clone(),
            y_label: y_col.name.clone(),
            dropped_rows: dataset.len() - points.len(),
            points,
            x_is_time: x_col.is_timestamp(),
            y_is_time: y_col.is_timestamp(),
        })
    }
}
