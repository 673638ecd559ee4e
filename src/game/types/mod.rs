//! Core value types.
//!
//! - `PieceKind` and `Color` - piece kinds and player colors
//! - `PieceId` - stable identity of a piece within one match
//! - `Position` - internal (row, column) board cell
//! - `Coord` - external algebraic coordinate ("a1".."h8")
//! - `MoveMask` - boolean reachability grid

mod mask;
mod piece;
mod position;

pub use mask::MoveMask;
pub use piece::{Color, PieceId, PieceKind};
pub use position::{Coord, Position};

pub(crate) use piece::PROMOTION_KINDS;
