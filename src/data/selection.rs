use std::fmt;

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

// ---------------------------------------------------------------------------
// ToggleButton / AxisGroup
// ---------------------------------------------------------------------------

/// One toggle in an axis group. The UI draws these records directly; no
/// selection state lives in the widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleButton {
    pub label: String,
    pub selected: bool,
}

/// A row of mutually-exclusive toggles, one per dataset column.
///
/// At most one button is selected at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisGroup {
    buttons: Vec<ToggleButton>,
}

impl AxisGroup {
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AxisGroup {
            buttons: labels
                .into_iter()
                .map(|label| ToggleButton {
                    label: label.into(),
                    selected: false,
                })
                .collect(),
        }
    }

    /// Press the button at `index`: an unselected button becomes the only
    /// selected one, a selected button is released. Unknown indices are
    /// ignored.
    pub fn toggle(&mut self, index: usize) {
        let Some(was_selected) = self.buttons.get(index).map(|b| b.selected) else {
            return;
        };
        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.selected = i == index && !was_selected;
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.selected)
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected().map(|i| self.buttons[i].label.as_str())
    }

    pub fn buttons(&self) -> &[ToggleButton] {
        &self.buttons
    }
}

// ---------------------------------------------------------------------------
// ColumnSelection – both axis groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection {
    pub x: AxisGroup,
    pub y: AxisGroup,
}

impl ColumnSelection {
    /// Discard every toggle and rebuild both groups, all unselected.
    pub fn rebuild(&mut self, column_names: &[String]) {
        self.x = AxisGroup::from_labels(column_names.iter().cloned());
        self.y = AxisGroup::from_labels(column_names.iter().cloned());
    }

    pub fn group(&self, axis: Axis) -> &AxisGroup {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn toggle(&mut self, axis: Axis, index: usize) {
        match axis {
            Axis::X => self.x.toggle(index),
            Axis::Y => self.y.toggle(index),
        }
    }

    /// `(x_index, y_index)` when both axes have a selection.
    pub fn both_selected(&self) -> Option<(usize, usize)> {
        Some((self.x.selected()?, self.y.selected()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_toggle_per_column_in_order() {
        let mut sel = ColumnSelection::default();
        sel.rebuild(&names(&["t", "a", "b", "c"]));

        for axis in [Axis::X, Axis::Y] {
            let labels: Vec<&str> = sel
                .group(axis)
                .buttons()
                .iter()
                .map(|b| b.label.as_str())
                .collect();
            assert_eq!(labels, vec!["t", "a", "b", "c"]);
            assert_eq!(sel.group(axis).selected(), None);
        }
    }

    #[test]
    fn test_double_toggle_unsets() {
        let mut group = AxisGroup::from_labels(["a", "b"]);
        group.toggle(1);
        assert_eq!(group.selected_label(), Some("b"));
        group.toggle(1);
        assert_eq!(group.selected(), None);
    }

    #[test]
    fn test_new_selection_replaces_old() {
        let mut group = AxisGroup::from_labels(["a", "b", "c"]);
        group.toggle(0);
        group.toggle(2);
        assert_eq!(group.selected(), Some(2));
        assert_eq!(group.buttons().iter().filter(|b| b.selected).count(), 1);
    }

    #[test]
    fn test_axes_are_independent() {
        let mut sel = ColumnSelection::default();
        sel.rebuild(&names(&["t", "a", "b"]));
        sel.toggle(Axis::X, 1);
        sel.toggle(Axis::Y, 1);
        sel.toggle(Axis::Y, 2);

        assert_eq!(sel.x.selected(), Some(1));
        assert_eq!(sel.y.selected(), Some(2));
        assert_eq!(sel.both_selected(), Some((1, 2)));
    }

    #[test]
    fn test_duplicate_labels_select_by_index() {
        let mut group = AxisGroup::from_labels(["a", "a"]);
        group.toggle(1);
        assert_eq!(group.selected(), Some(1));
        assert!(!group.buttons()[0].selected);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut group = AxisGroup::from_labels(["a"]);
        group.toggle(0);
        group.toggle(5);
        assert_eq!(group.selected(), Some(0));
    }

    #[test]
    fn test_rebuild_clears_selection() {
        let mut sel = ColumnSelection::default();
        sel.rebuild(&names(&["t", "a"]));
        sel.toggle(Axis::X, 0);
        sel.toggle(Axis::Y, 1);
        sel.rebuild(&names(&["t", "a"]));
        assert_eq!(sel.both_selected(), None);
        assert_eq!(sel.x.selected(), None);
        assert_eq!(sel.y.selected(), None);
    }
}
