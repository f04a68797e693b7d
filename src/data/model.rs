use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// ColumnData – the coerced cells of one column
// ---------------------------------------------------------------------------

/// Typed cell storage for a single column. `None` is the null marker for a
/// cell that failed coercion (or was missing from a short row).
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// The first column of every file, interpreted as a timestamp.
    Timestamp(Vec<Option<NaiveDateTime>>),
    /// Every other column.
    Numeric(Vec<Option<f64>>),
}

impl ColumnData {
    pub fn cell_count(&self) -> usize {
        match self {
            ColumnData::Timestamp(v) => v.len(),
            ColumnData::Numeric(v) => v.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn is_timestamp(&self) -> bool {
        matches!(self.data, ColumnData::Timestamp(_))
    }

    /// The column as plottable numbers. Timestamps become seconds since the
    /// Unix epoch (UTC, with sub-second precision).
    pub fn values_f64(&self) -> Vec<Option<f64>> {
        match &self.data {
            ColumnData::Numeric(v) => v.clone(),
            ColumnData::Timestamp(v) => v
                .iter()
                .map(|ts| ts.map(|t| t.and_utc().timestamp_millis() as f64 / 1000.0))
                .collect(),
        }
    }

    /// Number of null cells.
    pub fn null_count(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Timestamp(v) => v.iter().filter(|c| c.is_none()).count(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// One loaded CSV file. Columns keep the order and names of the header row;
/// every column holds exactly `row_count` cells.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub source: PathBuf,
    pub columns: Vec<Column>,
    pub row_count: usize,
    /// Null cells per column, counted once at construction.
    null_counts: Vec<usize>,
}

impl Dataset {
    pub fn new(source: &Path, columns: Vec<Column>) -> Self {
        let row_count = columns.first().map(|c| c.data.cell_count()).unwrap_or(0);
        debug_assert!(columns.iter().all(|c| c.data.cell_count() == row_count));
        let null_counts = columns.iter().map(Column::null_count).collect();
        Dataset {
            source: source.to_path_buf(),
            columns,
            row_count,
            null_counts,
        }
    }

    /// Column names in header order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Cached null count of column `index` (0 for unknown columns).
    pub fn null_count(&self, index: usize) -> usize {
        self.null_counts.get(index).copied().unwrap_or(0)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.row_count
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// File name for display in the status line.
    pub fn display_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamps_convert_to_epoch_seconds() {
        let t = NaiveDate::from_ymd_opt(1970, 1, 2)
            .unwrap()
            .and_hms_milli_opt(0, 0, 1, 500)
            .unwrap();
        let col = Column {
            name: "t".into(),
            data: ColumnData::Timestamp(vec![Some(t), None]),
        };
        assert_eq!(col.values_f64(), vec![Some(86_401.5), None]);
        assert_eq!(col.null_count(), 1);
        assert!(col.is_timestamp());
    }

    #[test]
    fn dataset_reports_names_in_order() {
        let ds = Dataset::new(
            Path::new("/tmp/data.csv"),
            vec![
                Column {
                    name: "t".into(),
                    data: ColumnData::Timestamp(vec![None, None]),
                },
                Column {
                    name: "b".into(),
                    data: ColumnData::Numeric(vec![Some(1.0), None]),
                },
                Column {
                    name: "a".into(),
                    data: ColumnData::Numeric(vec![None, None]),
                },
            ],
        );
        assert_eq!(ds.column_names(), vec!["t", "b", "a"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.display_name(), "data.csv");
        assert!(ds.column(3).is_none());
        assert_eq!(ds.null_count(0), 2);
        assert_eq!(ds.null_count(1), 1);
        assert_eq!(ds.null_count(2), 2);
        assert_eq!(ds.null_count(3), 0);
    }
}
