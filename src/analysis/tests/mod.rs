//! Analysis module tests.
//!
//! - `positions.rs` - named positions with known annotations
//! - `proptest.rs` - invariants over random piece placements

mod proptest;
