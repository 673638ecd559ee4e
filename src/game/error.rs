//! Error types for board primitives, coordinate parsing, and move validation.

use std::fmt;

use super::types::{Coord, PieceKind};

/// Error type for board-primitive misuse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board constructed with fewer than 1 row or column
    InvalidDimension { rows: usize, columns: usize },
    /// Position outside the board
    InvalidPosition { row: usize, column: usize },
    /// Placement onto a non-empty cell
    OccupiedPosition { row: usize, column: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimension { rows, columns } => {
                write!(f, "Invalid board dimension {rows}x{columns}, need at least 1x1")
            }
            BoardError::InvalidPosition { row, column } => {
                write!(f, "Position ({row}, {column}) is not on the board")
            }
            BoardError::OccupiedPosition { row, column } => {
                write!(f, "Position ({row}, {column}) is already occupied")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for algebraic coordinate parsing failures.
///
/// These are format errors, distinct from the rules errors in [`MoveError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Coordinate text is not exactly one file letter and one rank digit
    InvalidNotation { notation: String },
    /// File outside 'a'..='h'
    FileOutOfRange { file: char },
    /// Rank outside 1..=8
    RankOutOfRange { rank: u8 },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidNotation { notation } => {
                write!(f, "Invalid coordinate '{notation}', expected a1 to h8")
            }
            CoordError::FileOutOfRange { file } => {
                write!(f, "File '{file}' out of range (must be a-h)")
            }
            CoordError::RankOutOfRange { rank } => {
                write!(f, "Rank {rank} out of range (must be 1-8)")
            }
        }
    }
}

impl std::error::Error for CoordError {}

/// Error type for rejected match operations.
///
/// Every rejection leaves the match exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the source square
    NoPieceAtSource { at: Coord },
    /// The piece on the source square belongs to the opponent
    NotYourPiece { at: Coord },
    /// The chosen piece has no marked destination at all
    NoLegalMoveForPiece { at: Coord },
    /// The target square is not in the chosen piece's move mask
    IllegalTarget { from: Coord, to: Coord },
    /// The move would leave the mover's own king in check
    SelfCheck,
    /// A promotion must be resolved before the next move
    PromotionPending,
    /// No promotion is pending
    NoPromotionPending,
    /// Promotion kind outside queen/rook/bishop/knight
    InvalidPromotionKind { kind: PieceKind },
    /// The match ended in checkmate; no further moves are accepted
    MatchOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAtSource { at } => {
                write!(f, "There is no piece on {at}")
            }
            MoveError::NotYourPiece { at } => {
                write!(f, "The piece on {at} is not yours")
            }
            MoveError::NoLegalMoveForPiece { at } => {
                write!(f, "There are no possible moves for the piece on {at}")
            }
            MoveError::IllegalTarget { from, to } => {
                write!(f, "The piece on {from} cannot move to {to}")
            }
            MoveError::SelfCheck => {
                write!(f, "You cannot put your own king in check")
            }
            MoveError::PromotionPending => {
                write!(f, "A pawn promotion must be resolved first")
            }
            MoveError::NoPromotionPending => {
                write!(f, "There is no pawn waiting to be promoted")
            }
            MoveError::InvalidPromotionKind { kind } => {
                write!(f, "Cannot promote a pawn to {kind}")
            }
            MoveError::MatchOver => {
                write!(f, "The match is over")
            }
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_dimension() {
        let err = BoardError::InvalidDimension { rows: 0, columns: 8 };
        assert!(err.to_string().contains("0x8"));
    }

    #[test]
    fn test_board_error_invalid_position() {
        let err = BoardError::InvalidPosition { row: 9, column: 2 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_coord_error_notation() {
        let err = CoordError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }

    #[test]
    fn test_coord_error_file() {
        let err = CoordError::FileOutOfRange { file: 'x' };
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_move_error_no_piece() {
        let at = "e4".parse().unwrap();
        let err = MoveError::NoPieceAtSource { at };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_move_error_illegal_target() {
        let from = "e2".parse().unwrap();
        let to = "e5".parse().unwrap();
        let err = MoveError::IllegalTarget { from, to };
        assert!(err.to_string().contains("e2"));
        assert!(err.to_string().contains("e5"));
    }

    #[test]
    fn test_move_error_promotion_kind() {
        let err = MoveError::InvalidPromotionKind {
            kind: PieceKind::King,
        };
        assert!(err.to_string().contains("King"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = MoveError::SelfCheck;
        let err2 = MoveError::SelfCheck;
        assert_eq!(err1, err2);
    }
}
