//! Board container: a fixed grid of optional piece occupants plus the
//! piece inventory behind the [`PieceId`] handles.
//!
//! Placement only ever changes through [`Board::place_piece`] and
//! [`Board::remove_piece`]; both keep each piece's recorded position in
//! lockstep with the cell that holds it.

use super::error::BoardError;
use super::types::{Color, PieceId, PieceKind, Position};

/// A piece in the match inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    move_count: u32,
    position: Option<Position>,
}

impl Piece {
    #[inline]
    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// How many times this piece has been relocated. Castling and the pawn
    /// double step are only offered while this is zero.
    #[inline]
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Current square, or `None` once captured or not yet placed
    #[inline]
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub(crate) fn increase_move_count(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn decrease_move_count(&mut self) {
        self.move_count -= 1;
    }
}

/// The playing grid. Cells hold at most one [`PieceId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    grid: Vec<Option<PieceId>>,
    pieces: Vec<Piece>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    /// Fails with [`BoardError::InvalidDimension`] if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows < 1 || columns < 1 {
            return Err(BoardError::InvalidDimension { rows, columns });
        }
        Ok(Board {
            rows,
            columns,
            grid: vec![None; rows * columns],
            pieces: Vec::new(),
        })
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

    /// Whether `pos` lies on the board
    #[inline]
    #[must_use]
    pub fn position_exists(&self, pos: Position) -> bool {
        pos.row() < self.rows && pos.column() < self.columns
    }

    /// The occupant of `pos`, if any.
    ///
    /// # Errors
    /// Fails with [`BoardError::InvalidPosition`] if `pos` is off the board.
    pub fn piece_at(&self, pos: Position) -> Result<Option<PieceId>, BoardError> {
        if !self.position_exists(pos) {
            return Err(BoardError::InvalidPosition {
                row: pos.row(),
                column: pos.column(),
            });
        }
        Ok(self.grid[self.cell(pos)])
    }

    /// Whether `pos` holds a piece.
    ///
    /// # Errors
    /// Fails with [`BoardError::InvalidPosition`] if `pos` is off the board.
    pub fn there_is_a_piece(&self, pos: Position) -> Result<bool, BoardError> {
        Ok(self.piece_at(pos)?.is_some())
    }

    /// Look up a piece by id.
    ///
    /// # Panics
    /// Panics if `id` did not come from this board's inventory.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.as_index()]
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.as_index()]
    }

    /// Add a new piece to the inventory, off-board until placed
    pub(crate) fn new_piece(&mut self, kind: PieceKind, color: Color) -> PieceId {
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(Piece {
            kind,
            color,
            move_count: 0,
            position: None,
        });
        id
    }

    /// Place a piece on an empty cell and record its position.
    ///
    /// # Errors
    /// Fails with [`BoardError::InvalidPosition`] if `pos` is off the board,
    /// or [`BoardError::OccupiedPosition`] if the cell is non-empty.
    pub fn place_piece(&mut self, id: PieceId, pos: Position) -> Result<(), BoardError> {
        if self.there_is_a_piece(pos)? {
            return Err(BoardError::OccupiedPosition {
                row: pos.row(),
                column: pos.column(),
            });
        }
        let cell = self.cell(pos);
        self.grid[cell] = Some(id);
        self.piece_mut(id).position = Some(pos);
        Ok(())
    }

    /// Remove and return the occupant of `pos`, clearing its position.
    ///
    /// # Errors
    /// Fails with [`BoardError::InvalidPosition`] if `pos` is off the board.
    pub fn remove_piece(&mut self, pos: Position) -> Result<Option<PieceId>, BoardError> {
        let Some(id) = self.piece_at(pos)? else {
            return Ok(None);
        };
        let cell = self.cell(pos);
        self.grid[cell] = None;
        self.piece_mut(id).position = None;
        Ok(Some(id))
    }

    /// Offset `pos` by signed deltas, `None` if the result leaves the board
    pub(crate) fn offset(&self, pos: Position, dr: isize, dc: isize) -> Option<Position> {
        let row = pos.row() as isize + dr;
        let column = pos.column() as isize + dc;
        if row >= 0
            && (row as usize) < self.rows
            && column >= 0
            && (column as usize) < self.columns
        {
            Some(Position(row as usize, column as usize))
        } else {
            None
        }
    }

    /// Occupant of `pos`, `None` for empty or off-board cells
    pub(crate) fn occupant(&self, pos: Position) -> Option<PieceId> {
        if !self.position_exists(pos) {
            return None;
        }
        self.grid[self.cell(pos)]
    }

    /// Whether `pos` holds a piece of the opposing color
    pub(crate) fn is_opponent_at(&self, pos: Position, color: Color) -> bool {
        self.occupant(pos)
            .is_some_and(|id| self.piece(id).color() != color)
    }

    /// Ids of every piece of `color` currently on the board
    pub(crate) fn live_pieces(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces.iter().enumerate().filter_map(move |(i, p)| {
            (p.color == color && p.position.is_some()).then_some(PieceId(i as u32))
        })
    }

    #[inline]
    fn cell(&self, pos: Position) -> usize {
        pos.row() * self.columns + pos.column()
    }
}
