//! Per-kind move-mask generation.
//!
//! Each function is pure: (piece, board, match context) in, reachability
//! mask out. Masks ignore whether a move would leave the mover's own king
//! in check; that filter belongs to the match engine.

use super::board::Board;
use super::types::{Color, MoveMask, PieceId, PieceKind, Position};

/// Match state the piece generators need but must not own.
///
/// Passed explicitly so pieces hold no back-reference to the match.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MoveContext {
    /// The pawn that just made a double step, if any
    pub(crate) en_passant_vulnerable: Option<PieceId>,
    /// Whether the side to move is currently in check (gates castling)
    pub(crate) check: bool,
}

const ORTHOGONALS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];

const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
];

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
];

/// Compute the move mask for the piece `id`.
///
/// # Panics
/// Panics if the piece is not on the board.
pub(crate) fn possible_moves(board: &Board, id: PieceId, ctx: &MoveContext) -> MoveMask {
    let piece = board.piece(id);
    let from = piece
        .position()
        .expect("possible_moves for an off-board piece");
    let color = piece.color();

    match piece.kind() {
        PieceKind::Pawn => pawn_moves(board, from, color, piece.move_count(), ctx),
        PieceKind::Knight => step_moves(board, from, color, &KNIGHT_OFFSETS),
        PieceKind::Bishop => sliding_moves(board, from, color, &DIAGONALS),
        PieceKind::Rook => sliding_moves(board, from, color, &ORTHOGONALS),
        PieceKind::Queen => sliding_moves(board, from, color, &ALL_DIRECTIONS),
        PieceKind::King => king_moves(board, from, color, piece.move_count(), ctx),
    }
}

/// Walk each ray: mark empty squares, stop at the first occupant and mark
/// it only when it belongs to the opponent.
fn sliding_moves(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(isize, isize)],
) -> MoveMask {
    let mut mask = MoveMask::new(board.rows(), board.columns());
    for &(dr, dc) in directions {
        let mut cursor = board.offset(from, dr, dc);
        while let Some(pos) = cursor {
            match board.occupant(pos) {
                None => {
                    mask.mark(pos);
                    cursor = board.offset(pos, dr, dc);
                }
                Some(blocker) => {
                    if board.piece(blocker).color() != color {
                        mask.mark(pos);
                    }
                    break;
                }
            }
        }
    }
    mask
}

/// Mark each fixed offset that is on-board and not held by a same-color piece
fn step_moves(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(isize, isize)],
) -> MoveMask {
    let mut mask = MoveMask::new(board.rows(), board.columns());
    for &(dr, dc) in offsets {
        if let Some(pos) = board.offset(from, dr, dc) {
            let own_blocker = board
                .occupant(pos)
                .is_some_and(|id| board.piece(id).color() == color);
            if !own_blocker {
                mask.mark(pos);
            }
        }
    }
    mask
}

fn pawn_moves(
    board: &Board,
    from: Position,
    color: Color,
    move_count: u32,
    ctx: &MoveContext,
) -> MoveMask {
    let mut mask = MoveMask::new(board.rows(), board.columns());
    let forward = color.forward();

    // single step onto an empty square
    if let Some(one) = board.offset(from, forward, 0) {
        if board.occupant(one).is_none() {
            mask.mark(one);

            // double step needs an unmoved pawn and both squares empty
            if move_count == 0 {
                if let Some(two) = board.offset(one, forward, 0) {
                    if board.occupant(two).is_none() {
                        mask.mark(two);
                    }
                }
            }
        }
    }

    // diagonal captures
    for dc in [-1, 1] {
        if let Some(diag) = board.offset(from, forward, dc) {
            if board.is_opponent_at(diag, color) {
                mask.mark(diag);
            }
        }
    }

    // en passant, only from the pawn's own fourth advancing rank
    if from.row() == color.en_passant_row() {
        for dc in [-1, 1] {
            if let Some(beside) = board.offset(from, 0, dc) {
                let vulnerable = board
                    .occupant(beside)
                    .is_some_and(|id| {
                        board.piece(id).color() != color
                            && ctx.en_passant_vulnerable == Some(id)
                    });
                if vulnerable {
                    if let Some(behind) = board.offset(beside, forward, 0) {
                        mask.mark(behind);
                    }
                }
            }
        }
    }

    mask
}

fn king_moves(
    board: &Board,
    from: Position,
    color: Color,
    move_count: u32,
    ctx: &MoveContext,
) -> MoveMask {
    let mut mask = step_moves(board, from, color, &ALL_DIRECTIONS);

    // castling candidates, only for an unmoved king that is not in check.
    // Only the king's current square is tested for safety; a landing into
    // check is still rejected later by the match engine's rollback.
    if move_count == 0 && !ctx.check {
        // kingside: rook three files away, two empty squares between
        if let Some(rook_pos) = board.offset(from, 0, 3) {
            if is_castling_rook(board, rook_pos, color) {
                let between = [board.offset(from, 0, 1), board.offset(from, 0, 2)];
                if between.iter().all(|p| p.is_some_and(|p| board.occupant(p).is_none())) {
                    mask.mark(Position(from.row(), from.column() + 2));
                }
            }
        }
        // queenside: rook four files away, three empty squares between
        if let Some(rook_pos) = board.offset(from, 0, -4) {
            if is_castling_rook(board, rook_pos, color) {
                let between = [
                    board.offset(from, 0, -1),
                    board.offset(from, 0, -2),
                    board.offset(from, 0, -3),
                ];
                if between.iter().all(|p| p.is_some_and(|p| board.occupant(p).is_none())) {
                    mask.mark(Position(from.row(), from.column() - 2));
                }
            }
        }
    }

    mask
}

/// An unmoved rook of the castling side's own color
fn is_castling_rook(board: &Board, pos: Position, color: Color) -> bool {
    board.occupant(pos).is_some_and(|id| {
        let piece = board.piece(id);
        piece.kind() == PieceKind::Rook && piece.color() == color && piece.move_count() == 0
    })
}
