//! Serialization round trips (enabled with the `serde` feature).

use crate::game::{Color, Coord, PieceKind, Position};

#[test]
fn test_coord_round_trip() {
    let coord: Coord = "e2".parse().unwrap();
    let json = serde_json::to_string(&coord).unwrap();
    let back: Coord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, coord);
}

#[test]
fn test_color_round_trip() {
    for color in Color::BOTH {
        let json = serde_json::to_string(&color).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}

#[test]
fn test_piece_kind_round_trip() {
    for kind in PieceKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        let back: PieceKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn test_position_round_trip() {
    let position = Position(6, 4);
    let json = serde_json::to_string(&position).unwrap();
    let back: Position = serde_json::from_str(&json).unwrap();
    assert_eq!(back, position);
}
