//! Match state: turn bookkeeping, piece inventory, and read-only accessors.

use super::board::{Board, Piece};
use super::types::{Color, Coord, MoveMask, PieceId, PieceKind, Position};
use super::MoveContext;

/// A single two-player chess game.
///
/// The match owns the board and piece inventory and is the only component
/// that mutates them once play begins. It lives for exactly one game:
/// construct, drive with [`perform_move`](ChessMatch::perform_move) (and
/// [`replace_promoted_piece`](ChessMatch::replace_promoted_piece) when a
/// promotion is pending), read state through the accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChessMatch {
    pub(crate) board: Board,
    pub(crate) turn: u32,
    pub(crate) current_player: Color,
    pub(crate) check: bool,
    pub(crate) checkmate: bool,
    pub(crate) en_passant_vulnerable: Option<PieceId>,
    pub(crate) promotion_pending: Option<PieceId>,
    pub(crate) captured_pieces: Vec<PieceId>,
}

impl ChessMatch {
    /// Start a match from the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let board = Board::new(8, 8).expect("8x8 is a valid dimension");
        let mut game = ChessMatch {
            board,
            turn: 1,
            current_player: Color::White,
            check: false,
            checkmate: false,
            en_passant_vulnerable: None,
            promotion_pending: None,
            captured_pieces: Vec::new(),
        };
        game.initial_setup();
        game
    }

    fn initial_setup(&mut self) {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        // row 7 is White's back rank (rank 1), row 0 is Black's (rank 8)
        for (file, &kind) in back_rank.iter().enumerate() {
            self.place_new(Position(7, file), Color::White, kind);
            self.place_new(Position(6, file), Color::White, PieceKind::Pawn);
            self.place_new(Position(0, file), Color::Black, kind);
            self.place_new(Position(1, file), Color::Black, PieceKind::Pawn);
        }
    }

    pub(crate) fn place_new(&mut self, pos: Position, color: Color, kind: PieceKind) {
        let id = self.board.new_piece(kind, color);
        self.board
            .place_piece(id, pos)
            .expect("setup square is empty");
    }

    /// Turn number, starting at 1
    #[inline]
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The side to move
    #[inline]
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Whether the side to move is in check
    #[inline]
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.check
    }

    /// Whether the match ended in checkmate
    #[inline]
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// The winner, once the match is over.
    ///
    /// After checkmate the current player is the mated side, so the winner
    /// is its opponent.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.checkmate.then_some(self.current_player.opponent())
    }

    /// The pawn that may be captured en passant this ply, if any
    #[inline]
    #[must_use]
    pub fn en_passant_vulnerable(&self) -> Option<PieceId> {
        self.en_passant_vulnerable
    }

    /// The pawn awaiting a promotion choice, if any
    #[inline]
    #[must_use]
    pub fn promotion_pending(&self) -> Option<PieceId> {
        self.promotion_pending
    }

    /// Captured pieces in capture order
    #[must_use]
    pub fn captured_pieces(&self) -> &[PieceId] {
        &self.captured_pieces
    }

    /// Look up a piece by id (captured pieces stay addressable)
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        self.board.piece(id)
    }

    /// Read-only view of the board
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshot of the grid as rows of optional (kind, color) occupants
    #[must_use]
    pub fn pieces(&self) -> Vec<Vec<Option<(PieceKind, Color)>>> {
        (0..self.board.rows())
            .map(|row| {
                (0..self.board.columns())
                    .map(|column| {
                        self.board
                            .occupant(Position(row, column))
                            .map(|id| (self.piece(id).kind(), self.piece(id).color()))
                    })
                    .collect()
            })
            .collect()
    }

    /// Convert an internal position to its algebraic coordinate
    #[must_use]
    pub fn coord_of(&self, pos: Position) -> Coord {
        Coord::from_position(pos)
    }

    pub(crate) fn context(&self) -> MoveContext {
        MoveContext {
            en_passant_vulnerable: self.en_passant_vulnerable,
            check: self.check,
        }
    }

    pub(crate) fn mask_for(&self, id: PieceId) -> MoveMask {
        super::movegen::possible_moves(&self.board, id, &self.context())
    }
}

impl Default for ChessMatch {
    fn default() -> Self {
        ChessMatch::new()
    }
}
