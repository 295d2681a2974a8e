//! Render-time clock access.
//!
//! The footer copyright year is read from the clock at render time rather
//! than stored, and the GUI takes the clock as a trait object so tests can
//! pin the year.

use chrono::Datelike;

/// Source of the current calendar year.
pub trait Clock {
    /// Returns the current year in local time.
    fn current_year(&self) -> i32;
}

/// System clock backed by [`chrono::Local`].
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Clock pinned to a fixed year, for tests.
#[derive(Debug)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_returns_plausible_year() {
        let year = SystemClock.current_year();
        assert!(year >= 2025);
    }

    #[test]
    fn test_fixed_clock_returns_pinned_year() {
        assert_eq!(FixedClock(2031).current_year(), 2031);
    }
}
