//! Countdown engine: remaining time until a target calendar day
//!
//! The engine is a pure function of the target date and the current
//! wall-clock time. Every tick recomputes from absolute time, so a skipped
//! tick never accumulates drift.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::config::CountdownConfig;
use crate::constants::{format, time};

/// Remaining duration split into display fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeLeft {
    pub const ZERO: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a non-negative second count using 24/60/60 truncating division
    pub fn from_seconds(total: i64) -> Self {
        if total <= 0 {
            return Self::ZERO;
        }
        let days = total / time::SECONDS_PER_DAY;
        let rem = total % time::SECONDS_PER_DAY;
        Self {
            days,
            hours: (rem / time::SECONDS_PER_HOUR) as u32,
            minutes: ((rem % time::SECONDS_PER_HOUR) / time::SECONDS_PER_MINUTE) as u32,
            seconds: (rem % time::SECONDS_PER_MINUTE) as u32,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * time::SECONDS_PER_DAY
            + i64::from(self.hours) * time::SECONDS_PER_HOUR
            + i64::from(self.minutes) * time::SECONDS_PER_MINUTE
            + i64::from(self.seconds)
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Values in display order: days, hours, minutes, seconds
    pub fn fields(&self) -> [i64; 4] {
        [
            self.days,
            i64::from(self.hours),
            i64::from(self.minutes),
            i64::from(self.seconds),
        ]
    }
}

/// Midnight at the start of `date`
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Time remaining from `now` until midnight of `target`, floored at zero.
///
/// Sub-second residue is truncated. Once the target has passed every field
/// reads zero; there is no separate overdue state.
pub fn time_left(target: NaiveDate, now: NaiveDateTime) -> TimeLeft {
    let delta = midnight(target) - now;
    if delta < TimeDelta::zero() {
        return TimeLeft::ZERO;
    }
    TimeLeft::from_seconds(delta.num_seconds())
}

/// Owns the active countdown configuration and the last computed value
#[derive(Debug)]
pub struct CountdownEngine {
    config: CountdownConfig,
    remaining: TimeLeft,
}

impl CountdownEngine {
    pub fn new(config: CountdownConfig) -> Self {
        Self {
            config,
            remaining: TimeLeft::ZERO,
        }
    }

    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn target_datetime(&self) -> NaiveDateTime {
        midnight(self.config.target_date)
    }

    /// Target rendered as "Weekday, Month DD, YYYY at HH:MM AM/PM"
    pub fn formatted_target(&self) -> String {
        self.target_datetime()
            .format(format::DISPLAY_TARGET)
            .to_string()
    }

    /// Recompute the remaining time against `now` and cache it
    pub fn tick(&mut self, now: NaiveDateTime) -> TimeLeft {
        self.remaining = time_left(self.config.target_date, now);
        self.remaining
    }

    /// Value computed by the most recent tick
    pub fn remaining(&self) -> TimeLeft {
        self.remaining
    }

    /// Install a new configuration; the next tick reflects it
    pub fn replace(&mut self, config: CountdownConfig) {
        self.config = config;
    }
}
