//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts against reference positions
//! - `draw.rs` - Material and clock rules behind draw detection
//! - `edge_cases.rs` - Castling, en passant and promotion corner cases
//! - `proptest.rs` - Property-based tests over random playouts

mod edge_cases;
mod proptest;
