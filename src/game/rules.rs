//! The legality pipeline and the check/checkmate search.
//!
//! A requested move is validated against the mask, applied speculatively,
//! tested for self-check, and either committed or rolled back. The
//! checkmate test is an exhaustive one-ply simulate-and-undo over every
//! marked square of every piece of the side in check.

use super::error::MoveError;
use super::state::ChessMatch;
use super::types::{Color, Coord, MoveMask, PieceId, PieceKind, Position, PROMOTION_KINDS};

impl ChessMatch {
    /// Move mask for the piece on `source`.
    ///
    /// # Errors
    /// Fails with the same source-validation errors as
    /// [`perform_move`](ChessMatch::perform_move).
    pub fn possible_moves(&self, source: Coord) -> Result<MoveMask, MoveError> {
        if self.checkmate {
            return Err(MoveError::MatchOver);
        }
        let (_, mask) = self.validate_source(source)?;
        Ok(mask)
    }

    /// Validate and execute a move, returning the captured piece if any.
    ///
    /// The speculative apply, check test, and rollback happen inside this
    /// call; a rejected move leaves the match exactly as it was. When the
    /// moved pawn reaches the last rank the match stops in the
    /// promotion-pending state and the turn completes only once
    /// [`replace_promoted_piece`](ChessMatch::replace_promoted_piece)
    /// supplies the new kind.
    ///
    /// # Errors
    /// Any [`MoveError`]; see the variants for the individual rejections.
    pub fn perform_move(
        &mut self,
        source: Coord,
        target: Coord,
    ) -> Result<Option<PieceId>, MoveError> {
        if self.checkmate {
            return Err(MoveError::MatchOver);
        }
        if self.promotion_pending.is_some() {
            return Err(MoveError::PromotionPending);
        }

        let (mover, mask) = self.validate_source(source)?;
        let target_pos = target.to_position();
        if !mask.is_marked(target_pos) {
            return Err(MoveError::IllegalTarget {
                from: source,
                to: target,
            });
        }

        let undo = self.make_move(source.to_position(), target_pos);
        if self.test_check(self.current_player) {
            self.undo_move(&undo);
            return Err(MoveError::SelfCheck);
        }

        let captured = undo.captured;
        let piece = self.board.piece(mover);
        let double_step =
            piece.kind() == PieceKind::Pawn && undo.source.row().abs_diff(undo.target.row()) == 2;

        #[cfg(feature = "logging")]
        log::debug!(
            "{} moves {} from {} to {}",
            self.current_player,
            piece.kind(),
            source,
            target
        );

        if piece.kind() == PieceKind::Pawn && target_pos.row() == piece.color().promotion_row() {
            // the turn stays open until the promotion kind arrives
            self.promotion_pending = Some(mover);
        } else {
            self.finish_turn(mover, double_step);
        }

        Ok(captured)
    }

    /// Resolve a pending promotion: destroy the pawn, create the chosen
    /// piece on its square with a fresh move counter, and complete the turn.
    ///
    /// # Errors
    /// Fails with [`MoveError::NoPromotionPending`] if no promotion is
    /// pending, or [`MoveError::InvalidPromotionKind`] for a kind outside
    /// queen/rook/bishop/knight.
    pub fn replace_promoted_piece(&mut self, kind: PieceKind) -> Result<PieceId, MoveError> {
        let Some(pawn) = self.promotion_pending else {
            return Err(MoveError::NoPromotionPending);
        };
        if !PROMOTION_KINDS.contains(&kind) {
            return Err(MoveError::InvalidPromotionKind { kind });
        }

        let pos = self
            .board
            .piece(pawn)
            .position()
            .expect("pending pawn is on the board");
        let color = self.board.piece(pawn).color();

        self.board
            .remove_piece(pos)
            .expect("promotion square is on the board");
        let promoted = self.board.new_piece(kind, color);
        self.board
            .place_piece(promoted, pos)
            .expect("promotion square was just cleared");

        #[cfg(feature = "logging")]
        log::debug!("{color} promotes the pawn on {} to {kind}", Coord::from_position(pos));

        self.promotion_pending = None;
        self.finish_turn(promoted, false);
        Ok(promoted)
    }

    /// Close out a committed half-move: recompute check and checkmate for
    /// the opponent, pass the turn, and reset the en-passant eligibility
    /// for the ply. On checkmate the hand still passes to the mated side
    /// (so state reads "White to move, mated") but the turn counter stops.
    fn finish_turn(&mut self, moved: PieceId, double_step: bool) {
        let opponent = self.current_player.opponent();
        self.check = self.test_check(opponent);
        if self.test_checkmate(opponent) {
            self.checkmate = true;
        } else {
            self.turn += 1;
        }
        self.current_player = opponent;
        self.en_passant_vulnerable = double_step.then_some(moved);
    }

    fn validate_source(&self, source: Coord) -> Result<(PieceId, MoveMask), MoveError> {
        let pos = source.to_position();
        let Some(id) = self.board.occupant(pos) else {
            return Err(MoveError::NoPieceAtSource { at: source });
        };
        if self.board.piece(id).color() != self.current_player {
            return Err(MoveError::NotYourPiece { at: source });
        }
        let mask = self.mask_for(id);
        if !mask.any() {
            return Err(MoveError::NoLegalMoveForPiece { at: source });
        }
        Ok((id, mask))
    }

    /// Whether `color`'s king square is marked by any opposing piece's mask
    pub(crate) fn test_check(&self, color: Color) -> bool {
        let king_pos = self.king_position(color);
        let ctx = self.context();
        self.board.live_pieces(color.opponent()).any(|id| {
            super::movegen::possible_moves(&self.board, id, &ctx).is_marked(king_pos)
        })
    }

    /// Exhaustive escape search: `color` is mated iff it is in check and
    /// every marked move of every one of its pieces still leaves it in
    /// check after a speculative apply. Each probe is rolled back.
    fn test_checkmate(&mut self, color: Color) -> bool {
        if !self.test_check(color) {
            return false;
        }
        let ids: Vec<PieceId> = self.board.live_pieces(color).collect();
        for id in ids {
            let source = self
                .board
                .piece(id)
                .position()
                .expect("live piece has a position");
            let mask = self.mask_for(id);
            for target in mask.marked() {
                let undo = self.make_move(source, target);
                let still_in_check = self.test_check(color);
                self.undo_move(&undo);
                if !still_in_check {
                    return false;
                }
            }
        }
        true
    }

    fn king_position(&self, color: Color) -> Position {
        self.board
            .live_pieces(color)
            .find(|&id| self.board.piece(id).kind() == PieceKind::King)
            .and_then(|id| self.board.piece(id).position())
            .unwrap_or_else(|| panic!("there is no {color} king on the board"))
    }
}
