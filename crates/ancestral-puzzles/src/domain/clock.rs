//! The western clock: two dials that must read two o'clock.

use serde::Serialize;

/// Dial positions. Hours run 1..=12, minutes 0..=55 in steps of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockPuzzle {
    hour: u8,
    minute: u8,
}

impl ClockPuzzle {
    pub const START: (u8, u8) = (12, 30);
    pub const SOLUTION: (u8, u8) = (2, 0);
    const MINUTE_STEP: u8 = 5;

    #[must_use]
    pub fn new() -> Self {
        Self {
            hour: Self::START.0,
            minute: Self::START.1,
        }
    }

    pub fn hour_up(&mut self) {
        self.hour = wrap_hour(self.hour + 1);
    }

    pub fn hour_down(&mut self) {
        self.hour = wrap_hour(self.hour + 11);
    }

    pub fn minute_up(&mut self) {
        self.minute = (self.minute + Self::MINUTE_STEP) % 60;
    }

    pub fn minute_down(&mut self) {
        self.minute = (self.minute + 60 - Self::MINUTE_STEP) % 60;
    }

    #[must_use]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        (self.hour, self.minute) == Self::SOLUTION
    }
}

impl Default for ClockPuzzle {
    fn default() -> Self {
        Self::new()
    }
}

/// Twelve-hour dial arithmetic: zero reads as twelve.
fn wrap_hour(raw: u8) -> u8 {
    match raw % 12 {
        0 => 12,
        hour => hour,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_half_past_twelve() {
        let clock = ClockPuzzle::new();

        assert_eq!((clock.hour(), clock.minute()), (12, 30));
        assert!(!clock.is_solved());
    }

    #[test]
    fn test_hour_dial_wraps_between_twelve_and_one() {
        let mut clock = ClockPuzzle::new();

        clock.hour_up();
        assert_eq!(clock.hour(), 1);

        clock.hour_down();
        assert_eq!(clock.hour(), 12);

        clock.hour_down();
        assert_eq!(clock.hour(), 11);
    }

    #[test]
    fn test_minute_dial_wraps_in_steps_of_five() {
        let mut clock = ClockPuzzle::new();
        for _ in 0..6 {
            clock.minute_up();
        }
        assert_eq!(clock.minute(), 0);

        clock.minute_down();
        assert_eq!(clock.minute(), 55);
    }

    #[test]
    fn test_solved_only_at_two_o_clock() {
        // Arrange
        let mut clock = ClockPuzzle::new();
        clock.hour_up();
        clock.hour_up();
        for _ in 0..7 {
            clock.minute_up();
        }
        assert_eq!((clock.hour(), clock.minute()), (2, 5));

        // Act / Assert
        assert!(!clock.is_solved());
        clock.minute_down();
        assert!(clock.is_solved());
    }
}
