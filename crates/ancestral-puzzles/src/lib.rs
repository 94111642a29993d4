//! Ancestral Hall — Puzzle state machines.
//!
//! Each overlay the renderer can open is an [`ActiveView`]: a tagged variant
//! carrying the transient local state of its puzzle (dial positions, stone
//! order, chair symbols, tablet slots, drawer toggle). The machines know
//! nothing about flags or inventory; they only report when their own
//! solved-predicate holds, and they report it once per opening.

pub mod domain;

pub use domain::active::{ActiveView, CompletionLatch, ViewState};
pub use domain::input::{InputOutcome, PuzzleInput, PuzzlePayload};
pub use domain::kind::ViewKind;
