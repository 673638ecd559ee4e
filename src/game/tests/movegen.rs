//! Move-mask generation tests.

use crate::game::{ChessMatch, Color, Coord, MatchBuilder, MoveError, MoveMask, PieceKind};

fn c(s: &str) -> Coord {
    s.parse().unwrap()
}

fn mask_of(game: &ChessMatch, at: &str) -> MoveMask {
    let id = game
        .board
        .occupant(c(at).to_position())
        .expect("piece at coordinate");
    game.mask_for(id)
}

fn marks(mask: &MoveMask, at: &str) -> bool {
    mask.is_marked(c(at).to_position())
}

fn kings() -> MatchBuilder {
    MatchBuilder::new()
        .piece(c("e1"), Color::White, PieceKind::King)
        .piece(c("e8"), Color::Black, PieceKind::King)
}

#[test]
fn test_pawn_initial_two_steps() {
    let game = ChessMatch::new();
    let mask = mask_of(&game, "e2");
    assert!(marks(&mask, "e3"));
    assert!(marks(&mask, "e4"));
    assert_eq!(mask.marked().count(), 2);
}

#[test]
fn test_pawn_blocked_has_no_moves() {
    let game = kings()
        .piece(c("e2"), Color::White, PieceKind::Pawn)
        .piece(c("e3"), Color::Black, PieceKind::Rook)
        .build();
    assert!(!mask_of(&game, "e2").any());
    assert_eq!(
        game.possible_moves(c("e2")).unwrap_err(),
        MoveError::NoLegalMoveForPiece { at: c("e2") }
    );
}

#[test]
fn test_pawn_double_step_blocked_at_destination() {
    let game = kings()
        .piece(c("e2"), Color::White, PieceKind::Pawn)
        .piece(c("e4"), Color::Black, PieceKind::Rook)
        .build();
    let mask = mask_of(&game, "e2");
    assert!(marks(&mask, "e3"));
    assert!(!marks(&mask, "e4"));
}

#[test]
fn test_pawn_captures_diagonally() {
    let game = kings()
        .piece(c("e4"), Color::White, PieceKind::Pawn)
        .piece(c("d5"), Color::Black, PieceKind::Knight)
        .piece(c("f5"), Color::Black, PieceKind::Knight)
        .piece(c("e5"), Color::Black, PieceKind::Rook)
        .build();
    let mask = mask_of(&game, "e4");
    assert!(marks(&mask, "d5"));
    assert!(marks(&mask, "f5"));
    // forward is blocked, and a pawn never captures straight ahead
    assert!(!marks(&mask, "e5"));
}

#[test]
fn test_pawn_no_double_step_after_moving() {
    let mut game = ChessMatch::new();
    game.perform_move(c("e2"), c("e3")).unwrap();
    game.perform_move(c("a7"), c("a6")).unwrap();
    let mask = mask_of(&game, "e3");
    assert!(marks(&mask, "e4"));
    assert_eq!(mask.marked().count(), 1);
}

#[test]
fn test_black_pawn_moves_down() {
    let game = kings()
        .piece(c("d7"), Color::Black, PieceKind::Pawn)
        .side_to_move(Color::Black)
        .build();
    let mask = mask_of(&game, "d7");
    assert!(marks(&mask, "d6"));
    assert!(marks(&mask, "d5"));
}

#[test]
fn test_knight_from_start() {
    let game = ChessMatch::new();
    let mask = mask_of(&game, "b1");
    assert!(marks(&mask, "a3"));
    assert!(marks(&mask, "c3"));
    // d2 holds an own pawn
    assert!(!marks(&mask, "d2"));
    assert_eq!(mask.marked().count(), 2);
}

#[test]
fn test_knight_in_corner() {
    let game = kings().piece(c("a1"), Color::White, PieceKind::Knight).build();
    let mask = mask_of(&game, "a1");
    assert!(marks(&mask, "b3"));
    assert!(marks(&mask, "c2"));
    assert_eq!(mask.marked().count(), 2);
}

#[test]
fn test_rook_open_board() {
    let game = kings().piece(c("d4"), Color::White, PieceKind::Rook).build();
    let mask = mask_of(&game, "d4");
    assert_eq!(mask.marked().count(), 14);
    assert!(marks(&mask, "d8"));
    assert!(marks(&mask, "a4"));
    assert!(!marks(&mask, "e5"));
}

#[test]
fn test_sliding_ray_stops_at_own_piece() {
    let game = kings()
        .piece(c("d4"), Color::White, PieceKind::Rook)
        .piece(c("d6"), Color::White, PieceKind::Pawn)
        .build();
    let mask = mask_of(&game, "d4");
    assert!(marks(&mask, "d5"));
    assert!(!marks(&mask, "d6"));
    assert!(!marks(&mask, "d7"));
}

#[test]
fn test_sliding_ray_captures_blocker() {
    let game = kings()
        .piece(c("d4"), Color::White, PieceKind::Rook)
        .piece(c("d6"), Color::Black, PieceKind::Pawn)
        .build();
    let mask = mask_of(&game, "d4");
    assert!(marks(&mask, "d5"));
    assert!(marks(&mask, "d6"));
    assert!(!marks(&mask, "d7"));
}

#[test]
fn test_bishop_diagonals_only() {
    let game = kings().piece(c("c4"), Color::White, PieceKind::Bishop).build();
    let mask = mask_of(&game, "c4");
    assert!(marks(&mask, "a6"));
    assert!(marks(&mask, "f7"));
    assert!(marks(&mask, "e2"));
    assert!(!marks(&mask, "c5"));
    assert!(!marks(&mask, "b4"));
}

#[test]
fn test_queen_is_rook_plus_bishop() {
    let game = MatchBuilder::new()
        .piece(c("h1"), Color::White, PieceKind::King)
        .piece(c("h8"), Color::Black, PieceKind::King)
        .piece(c("d4"), Color::White, PieceKind::Queen)
        .build();
    let mask = mask_of(&game, "d4");
    // 14 orthogonal + 13 diagonal on an otherwise clear board
    assert_eq!(mask.marked().count(), 27);
}

#[test]
fn test_king_adjacent_squares() {
    let game = MatchBuilder::new()
        .piece(c("e4"), Color::White, PieceKind::King)
        .piece(c("a8"), Color::Black, PieceKind::King)
        .build();
    let mask = mask_of(&game, "e4");
    assert_eq!(mask.marked().count(), 8);
    for target in ["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"] {
        assert!(marks(&mask, target), "king should reach {target}");
    }
}

#[test]
fn test_masks_never_mark_own_pieces() {
    let game = ChessMatch::new();
    for file in 'a'..='h' {
        for rank in [1u8, 2] {
            let at = Coord::new(file, rank).unwrap();
            let id = game.board.occupant(at.to_position()).unwrap();
            let mask = game.mask_for(id);
            for target in mask.marked() {
                let occupant = game.board.occupant(target);
                assert!(
                    occupant.is_none()
                        || game.piece(occupant.unwrap()).color() != Color::White,
                    "mask of {at} marks an own-colored square"
                );
            }
        }
    }
}

#[test]
fn test_castling_offered_both_sides() {
    let game = kings()
        .piece(c("a1"), Color::White, PieceKind::Rook)
        .piece(c("h1"), Color::White, PieceKind::Rook)
        .build();
    let mask = mask_of(&game, "e1");
    assert!(marks(&mask, "g1"));
    assert!(marks(&mask, "c1"));
}

#[test]
fn test_castling_blocked_path() {
    let game = kings()
        .piece(c("a1"), Color::White, PieceKind::Rook)
        .piece(c("h1"), Color::White, PieceKind::Rook)
        .piece(c("b1"), Color::White, PieceKind::Knight)
        .piece(c("g1"), Color::White, PieceKind::Knight)
        .build();
    let mask = mask_of(&game, "e1");
    assert!(!marks(&mask, "g1"));
    assert!(!marks(&mask, "c1"));
}

#[test]
fn test_castling_requires_unmoved_rook() {
    let mut game = kings()
        .piece(c("h1"), Color::White, PieceKind::Rook)
        .build();
    game.perform_move(c("h1"), c("h2")).unwrap();
    game.perform_move(c("e8"), c("e7")).unwrap();
    game.perform_move(c("h2"), c("h1")).unwrap();
    game.perform_move(c("e7"), c("e8")).unwrap();
    // same geometry as the start, but the rook's move counter is 2
    let mask = mask_of(&game, "e1");
    assert!(!marks(&mask, "g1"));
}

#[test]
fn test_castling_denied_while_in_check() {
    let game = kings()
        .piece(c("h1"), Color::White, PieceKind::Rook)
        .piece(c("e5"), Color::Black, PieceKind::Rook)
        .build();
    assert!(game.is_check());
    let mask = mask_of(&game, "e1");
    assert!(!marks(&mask, "g1"));
    // ordinary escapes stay available
    assert!(marks(&mask, "d1"));
}

#[test]
fn test_castling_requires_own_rook() {
    // an opposing rook on h1 must not enable kingside castling
    let game = kings()
        .piece(c("h1"), Color::Black, PieceKind::Rook)
        .build();
    let mask = mask_of(&game, "e1");
    assert!(!marks(&mask, "g1"));
}

#[test]
fn test_en_passant_marked_for_vulnerable_pawn_only() {
    let game = kings()
        .piece(c("e5"), Color::White, PieceKind::Pawn)
        .piece(c("d5"), Color::Black, PieceKind::Pawn)
        .en_passant_vulnerable(c("d5"))
        .build();
    let mask = mask_of(&game, "e5");
    assert!(marks(&mask, "d6"));

    let stale = kings()
        .piece(c("e5"), Color::White, PieceKind::Pawn)
        .piece(c("d5"), Color::Black, PieceKind::Pawn)
        .build();
    let mask = mask_of(&stale, "e5");
    assert!(!marks(&mask, "d6"));
}

#[test]
fn test_en_passant_black_side() {
    let game = kings()
        .piece(c("d4"), Color::Black, PieceKind::Pawn)
        .piece(c("e4"), Color::White, PieceKind::Pawn)
        .en_passant_vulnerable(c("e4"))
        .side_to_move(Color::Black)
        .build();
    let mask = mask_of(&game, "d4");
    assert!(marks(&mask, "e3"));
}
