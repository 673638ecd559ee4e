//! Game module tests.
//!
//! Tests are organized into separate files by category:
//! - `board.rs` - board primitive behavior and errors
//! - `movegen.rs` - per-kind move masks, castling and en passant marking
//! - `make_unmake.rs` - apply/undo exactness
//! - `scenarios.rs` - full-game scenarios (Fool's Mate, castling, promotion)
//! - `edge_cases.rs` - coordinate parsing and rejection edge cases
//! - `proptest.rs` - property-based tests
//! - `serde.rs` - serde round trips (feature-gated)

mod movegen;
#[cfg(feature = "serde")]
mod serde;
