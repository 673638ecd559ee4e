//! Boolean reachability masks over the board.

use super::Position;

/// An rows x columns boolean grid marking squares a piece could move to,
/// before the self-check filter is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveMask {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl MoveMask {
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        MoveMask {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether the mask marks `pos`. Out-of-grid positions are unmarked.
    #[inline]
    #[must_use]
    pub fn is_marked(&self, pos: Position) -> bool {
        if pos.row() >= self.rows || pos.column() >= self.columns {
            return false;
        }
        self.cells[pos.row() * self.columns + pos.column()]
    }

    #[inline]
    pub(crate) fn mark(&mut self, pos: Position) {
        self.cells[pos.row() * self.columns + pos.column()] = true;
    }

    /// Whether any square is marked
    #[must_use]
    pub fn any(&self) -> bool {
        self.cells.iter().any(|&c| c)
    }

    /// Iterate over the marked positions in row-major order
    pub fn marked(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, &set)| {
            set.then(|| Position(i / self.columns, i % self.columns))
        })
    }
}
