//! Interval value types.
//!
//! An interval carries one sign for the whole value; every component is a
//! non-negative magnitude.

use chrono::TimeDelta;
use std::fmt;

use crate::error::{Error, Result};
use crate::protocol::constants::{TNS_MONTHS_PER_YEAR, TNS_NANOS_PER_MICRO, TNS_SECONDS_PER_DAY};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Overall sign of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Sign of the first nonzero component, in priority order.
    ///
    /// All-zero components are positive.
    pub fn of_first_nonzero(components: &[i32]) -> Self {
        match components.iter().find(|c| **c != 0) {
            Some(c) if *c < 0 => Sign::Negative,
            _ => Sign::Positive,
        }
    }

    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    /// Apply this sign to a magnitude.
    pub fn apply(self, magnitude: i64) -> i64 {
        match self {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Positive => write!(f, "+"),
            Sign::Negative => write!(f, "-"),
        }
    }
}

/// INTERVAL YEAR TO MONTH value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntervalYM {
    pub sign: Sign,
    pub years: u32,
    pub months: u8,
}

impl IntervalYM {
    pub fn new(sign: Sign, years: u32, months: u8) -> Self {
        Self {
            sign,
            years,
            months,
        }
    }

    /// Signed length of the interval in months.
    pub fn total_months(&self) -> i64 {
        self.sign
            .apply(i64::from(self.years) * TNS_MONTHS_PER_YEAR + i64::from(self.months))
    }
}

/// Formats as `+YY-MM`; years are padded to two digits and never truncated.
impl fmt::Display for IntervalYM {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}-{:02}", self.sign, self.years, self.months)
    }
}

/// INTERVAL DAY TO SECOND value.
///
/// The wire format carries nanoseconds; display truncates to microseconds.
/// Server values keep `nanoseconds` below one second. The 4-byte field can
/// still carry more, and such a value prints more than six fraction digits
/// and is refused by `encode_interval_ds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntervalDS {
    pub sign: Sign,
    pub days: u32,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub nanoseconds: u32,
}

impl IntervalDS {
    pub fn new(
        sign: Sign,
        days: u32,
        hours: u8,
        minutes: u8,
        seconds: u8,
        nanoseconds: u32,
    ) -> Self {
        Self {
            sign,
            days,
            hours,
            minutes,
            seconds,
            nanoseconds,
        }
    }

    /// Fractional seconds in microseconds, sub-microsecond digits dropped.
    pub fn microseconds(&self) -> u32 {
        self.nanoseconds / TNS_NANOS_PER_MICRO
    }

    /// Convert to a signed `chrono::TimeDelta`.
    ///
    /// Every field combination fits: the largest is about 3.7e14 seconds,
    /// well inside the `TimeDelta` range.
    pub fn to_duration(&self) -> TimeDelta {
        let nanos = i64::from(self.nanoseconds);
        let secs = i64::from(self.days) * TNS_SECONDS_PER_DAY
            + i64::from(self.hours) * 3600
            + i64::from(self.minutes) * 60
            + i64::from(self.seconds)
            + nanos / NANOS_PER_SECOND;

        let delta = TimeDelta::new(secs, (nanos % NANOS_PER_SECOND) as u32)
            .unwrap_or(TimeDelta::MAX);
        match self.sign {
            Sign::Positive => delta,
            Sign::Negative => -delta,
        }
    }

    /// Build an interval from a signed `chrono::TimeDelta`.
    ///
    /// # Errors
    /// Returns `Error::TypeConversion` if the day count does not fit the
    /// 4-byte day field.
    pub fn from_duration(delta: TimeDelta) -> Result<Self> {
        let sign = if delta < TimeDelta::zero() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let abs = delta.abs();
        let secs = abs.num_seconds();
        let days = secs / TNS_SECONDS_PER_DAY;
        let days = u32::try_from(days)
            .ok()
            .filter(|d| *d <= i32::MAX as u32)
            .ok_or_else(|| {
                Error::type_conversion(format!("Interval of {} days out of range", days))
            })?;
        let rem = secs % TNS_SECONDS_PER_DAY;

        Ok(Self {
            sign,
            days,
            hours: (rem / 3600) as u8,
            minutes: (rem % 3600 / 60) as u8,
            seconds: (rem % 60) as u8,
            nanoseconds: abs.subsec_nanos() as u32,
        })
    }
}

/// Formats as `+DD HH:MM:SS.ffffff`.
impl fmt::Display for IntervalDS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:02} {:02}:{:02}:{:02}.{:06}",
            self.sign,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
            self.microseconds()
        )
    }
}
