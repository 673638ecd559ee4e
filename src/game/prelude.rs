//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::game::prelude::*;
//! ```

pub use super::{
    Board, BoardError, ChessMatch, Color, Coord, CoordError, MatchBuilder, MoveError, MoveMask,
    Piece, PieceId, PieceKind, Position,
};
