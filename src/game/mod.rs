//! Chess rules engine: board state, move generation, and match orchestration.
//!
//! The engine validates and executes moves for a two-player game, including
//! the special moves (castling, en passant, promotion) and check/checkmate
//! detection. Rendering and input parsing live outside this crate; callers
//! drive a match through [`ChessMatch::perform_move`] and the read-only
//! accessors.
//!
//! # Example
//! ```
//! use chess_rules::game::ChessMatch;
//!
//! let mut game = ChessMatch::new();
//! let captured = game.perform_move("e2".parse().unwrap(), "e4".parse().unwrap()).unwrap();
//! assert!(captured.is_none());
//! assert_eq!(game.turn(), 2);
//! ```

mod board;
mod builder;
mod error;
mod make_unmake;
mod movegen;
pub mod prelude;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use board::{Board, Piece};
pub use builder::MatchBuilder;
pub use error::{BoardError, CoordError, MoveError};
pub use state::ChessMatch;
pub use types::{Color, Coord, MoveMask, PieceId, PieceKind, Position};

pub(crate) use movegen::MoveContext;
