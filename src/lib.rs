pub mod game;

pub use game::{
    Board, BoardError, ChessMatch, Color, Coord, CoordError, MatchBuilder, MoveError, MoveMask,
    Piece, PieceId, PieceKind, Position,
};
