use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{GridInput, GridMark, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Column plot (central panel)
// ---------------------------------------------------------------------------

/// Render the current plot in the central panel.
pub fn column_plot(ui: &mut Ui, state: &mut AppState) {
    let Some(series) = &state.plot else {
        ui.centered_and_justified(|ui: &mut Ui| {
            if state.dataset.is_some() {
                ui.heading("Select an X and a Y column, then press Plot");
            } else {
                ui.heading("Open a file to plot its columns  (File → Open…)");
            }
        });
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(series.title.as_str());
    });

    let y_target = state.config.y_tick_target;
    let mut plot = Plot::new("column_plot")
        .x_axis_label(series.x_label.as_str())
        .y_axis_label(series.y_label.as_str())
        .show_grid(true)
        .y_grid_spacer(move |input: GridInput| {
            let (min, max) = input.bounds;
            nice_ticks(min, max, y_target)
                .into_iter()
                .map(|(value, step_size)| GridMark { value, step_size })
                .collect()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if series.x_is_time {
        plot = plot.x_axis_formatter(|mark: GridMark, range: &RangeInclusive<f64>| {
            format_timestamp(mark.value, range.end() - range.start())
        });
    }
    if series.y_is_time {
        plot = plot.y_axis_formatter(|mark: GridMark, range: &RangeInclusive<f64>| {
            format_timestamp(mark.value, range.end() - range.start())
        });
    }
    if state.reset_plot_view {
        plot = plot.reset();
        state.reset_plot_view = false;
    }

    let points: PlotPoints = series.points.iter().copied().collect();
    let line = Line::new(points)
        .name(&series.y_label)
        .color(Color32::LIGHT_BLUE)
        .width(1.5);

    plot.show(ui, |plot_ui| {
        plot_ui.line(line);
    });
}

// ---------------------------------------------------------------------------
// Axis helpers
// ---------------------------------------------------------------------------

/// Up to `target` evenly spaced "nice" tick values covering `[min, max]`,
/// each paired with the step size. Steps are 1, 2, 2.5 or 5 times a power
/// of ten.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<(f64, f64)> {
    if !min.is_finite() || !max.is_finite() || max <= min || target == 0 {
        return Vec::new();
    }

    let raw_step = (max - min) / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| (i as f64 * step, step)).collect()
}

/// Label for an epoch-seconds axis value. `span` is the visible width in
/// seconds and picks the precision.
pub fn format_timestamp(value: f64, span: f64) -> String {
    let secs = value.floor() as i64;
    let nsecs = ((value - secs as f64) * 1e9) as u32;
    let Some(dt) = chrono::DateTime::from_timestamp(secs, nsecs) else {
        return String::new();
    };

    let fmt = if span < 60.0 {
        "%H:%M:%S%.3f"
    } else if span < 86_400.0 {
        "%H:%M:%S"
    } else if span < 30.0 * 86_400.0 {
        "%Y-%m-%d %H:%M"
    } else {
        "%Y-%m-%d"
    };
    dt.format(fmt).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(ticks: &[(f64, f64)]) -> Vec<f64> {
        ticks.iter().map(|(v, _)| *v).collect()
    }

    #[test]
    fn test_nice_ticks_unit_range() {
        let ticks = nice_ticks(0.0, 10.0, 10);
        assert_eq!(values(&ticks), (0..=10).map(f64::from).collect::<Vec<_>>());
        assert!(ticks.iter().all(|(_, step)| *step == 1.0));
    }

    #[test]
    fn test_nice_ticks_picks_round_step() {
        let ticks = nice_ticks(0.0, 45.0, 10);
        assert_eq!(ticks[0], (0.0, 5.0));
        assert_eq!(ticks.last().copied(), Some((45.0, 5.0)));
        assert!(ticks.len() <= 11);
    }

    #[test]
    fn test_nice_ticks_offset_range() {
        let ticks = nice_ticks(-3.3, 7.1, 10);
        assert_eq!(values(&ticks), vec![-2.0, 0.0, 2.0, 4.0, 6.0]);
        assert!(ticks.iter().all(|(_, step)| *step == 2.0));
    }

    #[test]
    fn test_nice_ticks_degenerate() {
        assert!(nice_ticks(1.0, 1.0, 10).is_empty());
        assert!(nice_ticks(2.0, 1.0, 10).is_empty());
        assert!(nice_ticks(f64::NAN, 1.0, 10).is_empty());
        assert!(nice_ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_format_timestamp_by_span() {
        // 2026-02-07T17:00:00Z
        let ts = 1_770_483_600.0;
        assert_eq!(format_timestamp(ts, 10.0), "17:00:00.000");
        assert_eq!(format_timestamp(ts, 3_600.0), "17:00:00");
        assert_eq!(format_timestamp(ts, 86_400.0 * 2.0), "2026-02-07 17:00");
        assert_eq!(format_timestamp(ts, 86_400.0 * 365.0), "2026-02-07");
    }
}
