//! Fluent builder for constructing match positions.
//!
//! Lets tests and analysis set up arbitrary positions piece by piece
//! instead of playing out a full game.
//!
//! # Example
//! ```
//! use chess_rules::game::{Color, MatchBuilder, PieceKind};
//!
//! let game = MatchBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, PieceKind::King)
//!     .piece("e8".parse().unwrap(), Color::Black, PieceKind::King)
//!     .piece("a2".parse().unwrap(), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(!game.is_check());
//! ```

use super::state::ChessMatch;
use super::board::Board;
use super::types::{Color, Coord, PieceKind};

/// A fluent builder for [`ChessMatch`] positions.
#[derive(Clone, Debug)]
pub struct MatchBuilder {
    pieces: Vec<(Coord, Color, PieceKind)>,
    side_to_move: Color,
    en_passant_vulnerable: Option<Coord>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchBuilder {
    /// Create a builder for an empty 8x8 board, White to move.
    #[must_use]
    pub fn new() -> Self {
        MatchBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            en_passant_vulnerable: None,
        }
    }

    /// Place a piece, replacing any piece already on that coordinate.
    /// Placed pieces start with a move count of zero.
    #[must_use]
    pub fn piece(mut self, at: Coord, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(c, _, _)| *c != at);
        self.pieces.push((at, color, kind));
        self
    }

    /// Remove a piece from a coordinate.
    #[must_use]
    pub fn clear(mut self, at: Coord) -> Self {
        self.pieces.retain(|(c, _, _)| *c != at);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Mark the pawn on `at` as capturable en passant this ply.
    #[must_use]
    pub const fn en_passant_vulnerable(mut self, at: Coord) -> Self {
        self.en_passant_vulnerable = Some(at);
        self
    }

    /// Build the match.
    ///
    /// The check flag is computed for the side to move, so both kings are
    /// expected to be on the board.
    ///
    /// # Panics
    /// Panics if the side to move has no king.
    #[must_use]
    pub fn build(self) -> ChessMatch {
        let board = Board::new(8, 8).expect("8x8 is a valid dimension");
        let mut game = ChessMatch {
            board,
            turn: 1,
            current_player: self.side_to_move,
            check: false,
            checkmate: false,
            en_passant_vulnerable: None,
            promotion_pending: None,
            captured_pieces: Vec::new(),
        };

        for (at, color, kind) in self.pieces {
            game.place_new(at.to_position(), color, kind);
        }

        if let Some(at) = self.en_passant_vulnerable {
            game.en_passant_vulnerable = game.board.occupant(at.to_position());
        }

        game.check = game.test_check(game.current_player);
        game
    }
}
