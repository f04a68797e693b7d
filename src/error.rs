//! Errors surfaced to the user.

use thiserror::Error;

/// Why a plot request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    #[error("Please select at least one X-axis and one Y-axis column.")]
    MissingAxis { x_missing: bool, y_missing: bool },
}

impl PlotError {
    pub fn missing_axis(x_missing: bool, y_missing: bool) -> Self {
        Self::MissingAxis {
            x_missing,
            y_missing,
        }
    }

    /// The axes that still need a selection, e.g. `"X and Y"`.
    pub fn missing_axes(&self) -> &'static str {
        match self {
            Self::MissingAxis {
                x_missing: true,
                y_missing: true,
            } => "X and Y",
            Self::MissingAxis {
                x_missing: true,
                y_missing: false,
            } => "X",
            Self::MissingAxis {
                x_missing: false,
                y_missing: true,
            } => "Y",
            Self::MissingAxis {
                x_missing: false,
                y_missing: false,
            } => "no",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_axes() {
        assert_eq!(PlotError::missing_axis(true, true).missing_axes(), "X and Y");
        assert_eq!(PlotError::missing_axis(true, false).missing_axes(), "X");
        assert_eq!(PlotError::missing_axis(false, true).missing_axes(), "Y");
        assert_eq!(PlotError::missing_axis(false, false).missing_axes(), "no");
    }
}
