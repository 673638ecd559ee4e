//! Speculative move application and its exact inverse.
//!
//! `make_move`/`undo_move` serve both committed moves and the probe moves
//! of the legality and checkmate tests. A probe that is undone must be
//! indistinguishable from a move that never happened: occupancy, move
//! counters, and the capture ledger are all restored.

use super::state::ChessMatch;
use super::types::{PieceId, PieceKind, Position};

/// Everything needed to reverse one applied move.
#[derive(Clone, Debug)]
pub(crate) struct UndoInfo {
    pub(crate) source: Position,
    pub(crate) target: Position,
    pub(crate) mover: PieceId,
    pub(crate) captured: Option<PieceId>,
    /// Where the captured piece stood; differs from `target` on en passant
    pub(crate) captured_from: Option<Position>,
    /// Castling rook relocation as (rook, original square, hop square)
    pub(crate) rook_hop: Option<(PieceId, Position, Position)>,
}

impl ChessMatch {
    /// Apply a move the mask already allows. Handles the rook hop on
    /// castling and the sideways pawn removal on en passant.
    pub(crate) fn make_move(&mut self, source: Position, target: Position) -> UndoInfo {
        let mover = self
            .board
            .remove_piece(source)
            .expect("source is on the board")
            .expect("make_move source is empty");
        self.board.piece_mut(mover).increase_move_count();

        let mut captured = self
            .board
            .remove_piece(target)
            .expect("target is on the board");
        let mut captured_from = captured.map(|_| target);

        self.board
            .place_piece(mover, target)
            .expect("target was just cleared");

        let kind = self.board.piece(mover).kind();
        let column_delta = target.column() as isize - source.column() as isize;

        // castling: hop the rook over the king
        let mut rook_hop = None;
        if kind == PieceKind::King && column_delta.abs() == 2 {
            let (rook_from, rook_to) = if column_delta > 0 {
                (
                    Position(source.row(), source.column() + 3),
                    Position(source.row(), source.column() + 1),
                )
            } else {
                (
                    Position(source.row(), source.column() - 4),
                    Position(source.row(), source.column() - 1),
                )
            };
            let rook = self
                .board
                .remove_piece(rook_from)
                .expect("rook square is on the board")
                .expect("castling without a rook");
            self.board
                .place_piece(rook, rook_to)
                .expect("rook hop square is empty");
            self.board.piece_mut(rook).increase_move_count();
            rook_hop = Some((rook, rook_from, rook_to));
        }

        // en passant: a sideways pawn move that captured nothing on the
        // target square took the pawn standing beside it
        if kind == PieceKind::Pawn && source.column() != target.column() && captured.is_none() {
            let beside = Position(source.row(), target.column());
            captured = self
                .board
                .remove_piece(beside)
                .expect("en passant square is on the board");
            captured_from = captured.map(|_| beside);
        }

        if let Some(id) = captured {
            self.captured_pieces.push(id);
        }

        UndoInfo {
            source,
            target,
            mover,
            captured,
            captured_from,
            rook_hop,
        }
    }

    /// Reverse a move applied by [`make_move`](ChessMatch::make_move).
    pub(crate) fn undo_move(&mut self, undo: &UndoInfo) {
        if let Some((rook, rook_from, rook_to)) = undo.rook_hop {
            self.board
                .remove_piece(rook_to)
                .expect("rook hop square is on the board")
                .expect("undo: castled rook is missing");
            self.board
                .place_piece(rook, rook_from)
                .expect("rook's original square is empty");
            self.board.piece_mut(rook).decrease_move_count();
        }

        self.board
            .remove_piece(undo.target)
            .expect("target is on the board")
            .expect("undo: moved piece is missing");
        self.board
            .place_piece(undo.mover, undo.source)
            .expect("source square is empty again");
        self.board.piece_mut(undo.mover).decrease_move_count();

        if let Some(id) = undo.captured {
            let back_to = undo
                .captured_from
                .expect("captured piece has a recorded square");
            self.board
                .place_piece(id, back_to)
                .expect("captured piece's square is empty");
            let popped = self.captured_pieces.pop();
            debug_assert_eq!(popped, Some(id));
        }
    }
}
