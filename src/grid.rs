//! Grid composition: a coordinate-addressed key grid plus the generic matrix
//! helpers the generators use to derive layouts from per-item templates.
//!
//! Coordinates are `(column, row)`, both zero-based, matching the `"col,row"`
//! keys of a profile manifest. Rows may differ in length.

use std::sync::Arc;

use crate::action::Action;

/// One key slot. `None` is an empty key.
///
/// Actions are shared, so a template repeated across rows or profiles is
/// referenced rather than copied.
pub type Cell = Option<Arc<Action>>;

/// Wraps an action for placement in a grid.
pub fn cell(action: Action) -> Cell {
    Some(Arc::new(action))
}

/// A key grid, stored row-major.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid from explicit rows.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Makes sure at least `n` rows exist, appending empty rows as needed.
    pub fn ensure_row(&mut self, n: usize) -> &mut Self {
        if self.rows.len() < n {
            self.rows.resize_with(n, Vec::new);
        }
        self
    }

    /// Places `cell` at `(col, row)`, growing the grid with empty keys as needed.
    pub fn set_cell(&mut self, col: usize, row: usize, cell: Cell) -> &mut Self {
        self.ensure_row(row + 1);
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, None);
        }
        cells[col] = cell;
        self
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Vec<Cell>) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// Returns the action at `(col, row)`, if any.
    pub fn get(&self, col: usize, row: usize) -> Option<&Arc<Action>> {
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// All rows, including empty keys.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Iterates over occupied keys as `(col, row, action)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Arc<Action>)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.as_ref().map(|a| (col, row, a)))
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::from_rows(rows)
    }
}

/// Returns `times` copies of `template`. Negative counts yield nothing.
///
/// Layout code computes counts like `height - 3`, which go negative on small
/// devices.
pub fn repeat_row<T: Clone>(times: isize, template: &T) -> Vec<T> {
    let n = usize::try_from(times).unwrap_or(0);
    vec![template.clone(); n]
}

/// Transposes a matrix.
///
/// The column count comes from the first row: an empty matrix is returned
/// unchanged, and a matrix whose first row is empty transposes to `[]`.
/// Rows shorter than the first are padded with `T::default()`.
pub fn transpose<T: Clone + Default>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let Some(first) = matrix.first() else {
        return Vec::new();
    };
    (0..first.len())
        .map(|col| {
            matrix
                .iter()
                .map(|row| row.get(col).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Returns page `page_index` of `items`, `page_size` items per page.
///
/// Pages past the end, and any page of size zero, are empty.
pub fn paginate<T>(items: &[T], page_size: usize, page_index: usize) -> &[T] {
    let Some(start) = page_size.checked_mul(page_index) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
