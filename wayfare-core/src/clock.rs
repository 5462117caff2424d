//! Clock-time arithmetic on whole-minute offsets.
//!
//! Schedules are computed on a monotonic minute counter measured from the
//! midnight that opens a day. Display wraps that counter modulo 24 hours, so
//! a schedule that runs past midnight prints early-morning times.
//! [`ClockTime::crosses_midnight`] lets callers detect that case, and the
//! serialised form keeps the day offset.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1440;

const MINUTES_PER_HOUR: u32 = 60;

/// A point in a day's schedule, stored as minutes after midnight.
///
/// The counter is not wrapped, so arithmetic stays monotonic across
/// midnight. [`Display`](fmt::Display) renders the wrapped `HH:MM` form.
///
/// # Examples
/// ```
/// use wayfare_core::ClockTime;
///
/// let start: ClockTime = "09:00".parse().expect("valid clock time");
/// let later = start.add_minutes(75);
/// assert_eq!(later.to_string(), "10:15");
/// assert_eq!(later.elapsed_since(start), 75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u32);

/// Errors returned when strictly parsing a clock string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockParseError {
    /// The input was empty or only whitespace.
    #[error("clock time is empty")]
    Empty,
    /// The input was not of the form `H:MM` or `HH:MM`.
    #[error("clock time '{input}' is not in HH:MM form")]
    Malformed {
        /// The rejected input.
        input: String,
    },
    /// The hour component was above 23.
    #[error("hour {hour} is out of range")]
    HourOutOfRange {
        /// The rejected hour.
        hour: u32,
    },
    /// The minute component was above 59.
    #[error("minute {minute} is out of range")]
    MinuteOutOfRange {
        /// The rejected minute.
        minute: u32,
    },
}

impl ClockTime {
    /// Midnight at the start of the day.
    pub const MIDNIGHT: Self = Self(0);

    /// Construct a clock time from minutes after midnight.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Minutes after the opening midnight, unwrapped.
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// Advance by `minutes`, saturating at `u32::MAX`.
    #[must_use]
    pub const fn add_minutes(self, minutes: u32) -> Self {
        Self(self.0.saturating_add(minutes))
    }

    /// Minutes elapsed since `earlier`, or zero if `earlier` is later.
    pub const fn elapsed_since(self, earlier: Self) -> u32 {
        self.0.saturating_sub(earlier.0)
    }

    /// Whether this time lies on or after the following midnight.
    pub const fn crosses_midnight(self) -> bool {
        self.0 >= MINUTES_PER_DAY
    }

    /// Parse a clock string, returning midnight for malformed input.
    ///
    /// This is the tolerant counterpart of [`FromStr`]; use it only where a
    /// bad value must not halt schedule composition.
    pub fn parse_lenient(clock: &str) -> Self {
        clock.parse().unwrap_or(Self::MIDNIGHT)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wrapped = self.0.rem_euclid(MINUTES_PER_DAY);
        let hours = wrapped.div_euclid(MINUTES_PER_HOUR);
        let minutes = wrapped.rem_euclid(MINUTES_PER_HOUR);
        write!(f, "{hours:02}:{minutes:02}")
    }
}

impl FromStr for ClockTime {
    type Err = ClockParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ClockParseError::Empty);
        }
        let malformed = || ClockParseError::Malformed {
            input: trimmed.to_owned(),
        };
        let (hour_text, minute_text) = trimmed.split_once(':').ok_or_else(malformed)?;
        let well_formed = (1..=2).contains(&hour_text.len())
            && minute_text.len() == 2
            && hour_text.chars().all(|c| c.is_ascii_digit())
            && minute_text.chars().all(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(malformed());
        }
        let hour: u32 = hour_text.parse().map_err(|_| malformed())?;
        let minute: u32 = minute_text.parse().map_err(|_| malformed())?;
        if hour >= 24 {
            return Err(ClockParseError::HourOutOfRange { hour });
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(ClockParseError::MinuteOutOfRange { minute });
        }
        Ok(Self(hour * MINUTES_PER_HOUR + minute))
    }
}

/// Serialised as `HH:MM`, with a `+N` suffix once the counter has run past
/// `N` midnights, so `"00:45+1"` is a quarter to one on the following day.
#[cfg(feature = "serde")]
impl serde::Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.div_euclid(MINUTES_PER_DAY) {
            0 => serializer.collect_str(self),
            days => serializer.collect_str(&format_args!("{self}+{days}")),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ClockTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        let text = String::deserialize(deserializer)?;
        let (clock, days) = match text.trim().split_once('+') {
            Some((clock, days)) => {
                let days: u32 = days
                    .parse()
                    .map_err(|_| D::Error::custom(format!("day offset in '{text}' is invalid")))?;
                (clock, days)
            }
            None => (text.as_str(), 0),
        };
        let time: Self = clock.parse().map_err(D::Error::custom)?;
        days
            .checked_mul(MINUTES_PER_DAY)
            .and_then(|offset| time.0.checked_add(offset))
            .map(Self)
            .ok_or_else(|| D::Error::custom(format!("day offset in '{text}' is too large")))
    }
}

/// Convert an `HH:MM` clock string to minutes after midnight.
///
/// Malformed input yields `0` rather than an error.
///
/// # Examples
/// ```
/// use wayfare_core::time_to_minutes;
///
/// assert_eq!(time_to_minutes("09:30"), 570);
/// assert_eq!(time_to_minutes("half past nine"), 0);
/// ```
pub fn time_to_minutes(clock: &str) -> u32 {
    ClockTime::parse_lenient(clock).minutes()
}

/// Render minutes after midnight as an `HH:MM` clock string.
///
/// Values of a day or more wrap modulo 1440.
///
/// # Examples
/// ```
/// use wayfare_core::minutes_to_time;
///
/// assert_eq!(minutes_to_time(570), "09:30");
/// assert_eq!(minutes_to_time(1445), "00:05");
/// ```
pub fn minutes_to_time(minutes: u32) -> String {
    ClockTime::from_minutes(minutes).to_string()
}
