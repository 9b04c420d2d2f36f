//! Wall-clock side of the watchface: the seconds-to-angle mapping, the
//! clock readout text and the once-per-second ticker.

use std::time::Duration;

use chrono::{Local, NaiveDateTime, Timelike};

use crate::geometry::FULL_TURN;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Angle units the horizon turns per second.
pub const ANGLE_PER_SECOND: i32 = FULL_TURN / 60;

/// Horizon rotation for a seconds-of-minute value.
///
/// One minute sweeps one full turn in discrete steps of `FULL_TURN / 60`.
/// The step is truncated, so 30 s lands a few units short of a half turn.
pub fn rotation_for_seconds(seconds: u32) -> i32 {
    (seconds % 60) as i32 * ANGLE_PER_SECOND
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourStyle {
    #[default]
    TwentyFour,
    Twelve,
}

/// Formats `time` as `"HH:MM Mon DD"`, e.g. `"17:05 Mar 09"`.
pub fn format_clock(time: &NaiveDateTime, style: HourStyle) -> String {
    let pattern = match style {
        HourStyle::TwentyFour => "%H:%M %b %d",
        HourStyle::Twelve => "%I:%M %b %d",
    };
    time.format(pattern).to_string()
}

// ============================================================================
// TIME SOURCES
// ============================================================================

pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

/// The system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Detects wall-clock second boundaries.
#[derive(Debug, Clone, Default)]
pub struct SecondTicker {
    last_second: Option<i64>,
}

impl SecondTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `now` falls in a different second than the previous poll.
    /// The first poll always ticks so the face is populated immediately.
    pub fn poll(&mut self, now: &NaiveDateTime) -> bool {
        let second = now.and_utc().timestamp();
        if self.last_second == Some(second) {
            return false;
        }
        self.last_second = Some(second);
        true
    }

    pub fn until_next_second(&self, now: &NaiveDateTime) -> Duration {
        // Leap seconds report nanoseconds past one full second.
        let nanos = now.nanosecond() % NANOS_PER_SECOND;
        Duration::from_nanos(u64::from(NANOS_PER_SECOND - nanos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    fn at(hour: u32, minute: u32, second: u32, milli: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(hour, minute, second, milli)
            .unwrap()
    }

    #[test]
    fn test_rotation_for_seconds() {
        assert_eq!(rotation_for_seconds(0), 0);
        assert_eq!(rotation_for_seconds(1), 1092);
        assert_eq!(rotation_for_seconds(15), 16380);
        assert_eq!(rotation_for_seconds(30), 32760);
        assert_eq!(rotation_for_seconds(59), 64428);
        assert_eq!(rotation_for_seconds(60), 0);
        assert_eq!(rotation_for_seconds(61), rotation_for_seconds(1));
        assert!(rotation_for_seconds(59) < FULL_TURN);
    }

    #[test]
    fn test_half_minute_falls_just_short_of_half_turn() {
        let shortfall = FULL_TURN / 2 - rotation_for_seconds(30);
        assert_eq!(shortfall, 8);
        assert!(shortfall < ANGLE_PER_SECOND);
    }

    #[test]
    fn test_rotation_steps_increase_within_a_minute() {
        let steps: Vec<i32> = (0..60).map(rotation_for_seconds).collect();
        assert!(steps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_format_twenty_four_hour() {
        assert_eq!(
            format_clock(&at(17, 5, 0, 0), HourStyle::TwentyFour),
            "17:05 Mar 09"
        );
        assert_eq!(
            format_clock(&at(8, 0, 0, 0).with_month(12).unwrap(), HourStyle::TwentyFour),
            "08:00 Dec 09"
        );
    }

    #[test]
    fn test_format_twelve_hour() {
        assert_eq!(format_clock(&at(17, 5, 0, 0), HourStyle::Twelve), "05:05 Mar 09");
        assert_eq!(format_clock(&at(0, 30, 0, 0), HourStyle::Twelve), "12:30 Mar 09");
    }

    #[test]
    fn test_ticker_fires_once_per_second() {
        let mut ticker = SecondTicker::new();
        assert!(ticker.poll(&at(10, 0, 1, 0)));
        assert!(!ticker.poll(&at(10, 0, 1, 400)));
        assert!(!ticker.poll(&at(10, 0, 1, 999)));
        assert!(ticker.poll(&at(10, 0, 2, 0)));
        assert!(ticker.poll(&at(10, 1, 2, 0)));
    }

    struct FixedClock(NaiveDateTime);

    impl TimeSource for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    #[test]
    fn test_ticker_over_a_stopped_clock_ticks_once() {
        let clock = FixedClock(at(23, 59, 59, 500));
        let mut ticker = SecondTicker::new();
        let ticks = (0..5).filter(|_| ticker.poll(&clock.now())).count();
        assert_eq!(ticks, 1);
        assert_eq!(
            ticker.until_next_second(&clock.now()),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn test_wait_until_next_second() {
        let ticker = SecondTicker::new();
        assert_eq!(
            ticker.until_next_second(&at(10, 0, 1, 250)),
            Duration::from_millis(750)
        );
        assert_eq!(
            ticker.until_next_second(&at(10, 0, 1, 0)),
            Duration::from_secs(1)
        );
    }
}
