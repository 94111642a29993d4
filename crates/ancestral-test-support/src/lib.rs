//! Shared test utilities for the Ancestral Hall engine.

mod clock;

pub use clock::{FixedClock, ManualClock, fixed_now};
