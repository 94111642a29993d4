//! Ancestral Hall — Narrative timing.
//!
//! Responsible for the effects that land some time after the intent that
//! caused them: the debounced completion of a solved puzzle, the blackout
//! after the stones, and the ending cutscene after the candles are lit.
//! Each session owns one [`Scheduler`]; dropping it drops every pending task.

pub mod domain;

pub use domain::effects::{DeferredEffect, Timings};
pub use domain::scheduler::{CancellationToken, ScheduledTask, Scheduler};
