/// Cursor over a collection rendered in rows of `columns` cells.
///
/// List layouts use one column; grid layouts move vertically by a whole row.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn clear(&mut self) {
        self.selected_index = None;
    }

    pub fn next(&mut self, len: usize) {
        self.step_forward(1, len);
    }

    pub fn prev(&mut self, len: usize) {
        self.step_back(1, len);
    }

    pub fn down(&mut self, columns: usize, len: usize) {
        self.step_forward(columns.max(1), len);
    }

    pub fn up(&mut self, columns: usize, len: usize) {
        self.step_back(columns.max(1), len);
    }

    /// Keeps the selection valid after the collection shrank or grew.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (Some(idx), len) => Some(idx.min(len - 1)),
            (None, _) => Some(0),
        };
    }

    pub fn jump_to_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    fn step_forward(&mut self, step: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) if idx + step < len => idx + step,
            Some(idx) => idx,
            None => 0,
        });
    }

    fn step_back(&mut self, step: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.checked_sub(step).unwrap_or(idx),
            None => 0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stops_at_end() {
        let mut selection = SelectionState::new();
        selection.next(2);
        assert_eq!(selection.get(), Some(0));
        selection.next(2);
        selection.next(2);
        assert_eq!(selection.get(), Some(1));
    }

    #[test]
    fn test_empty_collection_keeps_none() {
        let mut selection = SelectionState::new();
        selection.next(0);
        selection.down(2, 0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_grid_moves_by_row() {
        let mut selection = SelectionState::new();
        selection.set(Some(1));
        selection.down(2, 5);
        assert_eq!(selection.get(), Some(3));
        // no cell below index 3 in a five item, two column grid
        selection.down(2, 5);
        assert_eq!(selection.get(), Some(3));
        selection.up(2, 5);
        assert_eq!(selection.get(), Some(1));
        selection.up(2, 5);
        assert_eq!(selection.get(), Some(1));
    }

    #[test]
    fn test_clamp_after_delete() {
        let mut selection = SelectionState::new();
        selection.set(Some(2));
        selection.clamp(2);
        assert_eq!(selection.get(), Some(1));
        selection.clamp(0);
        assert_eq!(selection.get(), None);
        selection.clamp(3);
        assert_eq!(selection.get(), Some(0));
    }
}
