use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::model::{Column, ColumnData, Dataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a comma-delimited file with a header row.
///
/// The first column is coerced to a timestamp, every other column to `f64`.
/// Cells that fail coercion become `None`; no row is ever dropped. Rows
/// shorter than the header are padded with `None`, extra cells are ignored.
///
/// Only structural problems (unreadable file, missing header, invalid UTF-8)
/// fail the load.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if h.is_empty() {
                format!("Unnamed: {i}")
            } else {
                h.to_string()
            }
        })
        .collect();

    if headers.is_empty() {
        bail!("CSV file {} has no header row", path.display());
    }

    let mut timestamps: Vec<Option<NaiveDateTime>> = Vec::new();
    let mut numeric: Vec<Vec<Option<f64>>> = vec![Vec::new(); headers.len() - 1];
    let mut ragged_rows = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.len() != headers.len() {
            ragged_rows += 1;
        }

        timestamps.push(record.get(0).and_then(parse_timestamp));
        for (col_idx, cells) in numeric.iter_mut().enumerate() {
            cells.push(record.get(col_idx + 1).and_then(parse_numeric));
        }
    }

    if ragged_rows > 0 {
        log::warn!(
            "{}: {ragged_rows} row(s) did not match the {} header columns",
            path.display(),
            headers.len()
        );
    }

    let mut names = headers.into_iter();
    let mut columns = Vec::with_capacity(numeric.len() + 1);
    if let Some(first) = names.next() {
        columns.push(Column {
            name: first,
            data: ColumnData::Timestamp(timestamps),
        });
    }
    columns.extend(names.zip(numeric).map(|(name, cells)| Column {
        name,
        data: ColumnData::Numeric(cells),
    }));

    Ok(Dataset::new(path, columns))
}

// ---------------------------------------------------------------------------
// Cell coercion
// ---------------------------------------------------------------------------

/// Coerce a numeric cell. Non-finite values count as null.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    if cell.eq_ignore_ascii_case("true") {
        return Some(1.0);
    }
    if cell.eq_ignore_ascii_case("false") {
        return Some(0.0);
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce a timestamp cell, trying each supported layout in turn.
pub fn parse_timestamp(cell: &str) -> Option<NaiveDateTime> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }

    try_parse_with_offset(cell)
        .or_else(|| try_parse_datetime(cell))
        .or_else(|| try_parse_date_only(cell))
        .or_else(|| try_parse_epoch_nanos(cell))
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// RFC 3339 with an explicit offset, normalised to UTC.
fn try_parse_with_offset(cell: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(cell)
        .ok()
        .map(|dt| dt.naive_utc())
}

fn try_parse_datetime(cell: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(cell, fmt).ok())
}

/// A bare integer counts nanoseconds since the Unix epoch.
fn try_parse_epoch_nanos(cell: &str) -> Option<NaiveDateTime> {
    cell.parse::<i64>()
        .ok()
        .map(|nanos| DateTime::from_timestamp_nanos(nanos).naive_utc())
}

fn try_parse_date_only(cell: &str) -> Option<NaiveDateTime> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cell, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
