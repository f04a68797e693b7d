/// Data layer: table model, loading, column selection, and filtering.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (first column timestamp, rest f64)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐       ┌───────────┐
///   │  Dataset  │ ────▶ │ selection │  one X / one Y toggle per column
///   └──────────┘       └───────────┘
///        │                   │
///        ▼                   ▼
///   ┌──────────┐
///   │  filter   │  paired-null filtering → PlotSeries
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod selection;
