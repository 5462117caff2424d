//! Visit-duration parsing and formatting.
//!
//! Place data often describes how long people stay as free text ("1-2
//! hours", "45 min"). Parsed text is clamped so a malformed description
//! cannot produce an empty or day-long visit.

use std::ops::RangeInclusive;

/// Shortest visit a parsed text duration may produce.
pub const MIN_PARSED_MINUTES: u32 = 15;

/// Longest visit a parsed text duration may produce.
pub const MAX_PARSED_MINUTES: u32 = 240;

/// Default clamp applied to parsed text durations.
pub const PARSED_MINUTES_BOUNDS: RangeInclusive<u32> = MIN_PARSED_MINUTES..=MAX_PARSED_MINUTES;

const MINUTES_PER_HOUR: u32 = 60;

/// A duration as supplied by place data: either whole minutes or free text.
///
/// With the `serde` feature the value deserialises from a JSON number or
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum DurationText {
    /// Whole minutes, used verbatim.
    Minutes(u32),
    /// Free text such as `"2 hours"` or `"45m"`.
    Text(String),
}

impl From<u32> for DurationText {
    fn from(minutes: u32) -> Self {
        Self::Minutes(minutes)
    }
}

impl From<&str> for DurationText {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DurationText {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Resolve a [`DurationText`] to minutes.
///
/// Numbers pass through unchanged; text is parsed with
/// [`parse_duration_text`] and clamped to [`PARSED_MINUTES_BOUNDS`].
///
/// # Examples
/// ```
/// use wayfare_core::{DurationText, parse_duration};
///
/// assert_eq!(parse_duration(&DurationText::from("1.5 hours")), 90);
/// assert_eq!(parse_duration(&DurationText::from("45m")), 45);
/// assert_eq!(parse_duration(&DurationText::from("")), 15);
/// assert_eq!(parse_duration(&DurationText::Minutes(5)), 5);
/// ```
pub fn parse_duration(value: &DurationText) -> u32 {
    parse_duration_within(value, &PARSED_MINUTES_BOUNDS)
}

/// Resolve a [`DurationText`] to minutes, clamping text to `bounds`.
pub fn parse_duration_within(value: &DurationText, bounds: &RangeInclusive<u32>) -> u32 {
    match value {
        DurationText::Minutes(minutes) => *minutes,
        DurationText::Text(text) => parse_duration_text_within(text, bounds),
    }
}

/// Parse free-text hours and minutes, clamped to [`PARSED_MINUTES_BOUNDS`].
pub fn parse_duration_text(text: &str) -> u32 {
    parse_duration_text_within(text, &PARSED_MINUTES_BOUNDS)
}

/// Parse free-text hours and minutes, clamped to `bounds`.
///
/// Recognised units are hours (`h`, `hr`, `hrs`, `hour`, `hours`) and
/// minutes (`m`, `min`, `mins`, `minute`, `minutes`). Numbers may carry a
/// decimal part. A range such as `"1-2 hours"` counts as its upper bound.
/// Numbers without one of these units are ignored, unless the whole text is a
/// single number, which counts as minutes. Text with no durations yields the
/// lower bound.
pub fn parse_duration_text_within(text: &str, bounds: &RangeInclusive<u32>) -> u32 {
    let bare_minutes = text.trim().parse::<f64>().ok().filter(|v| v.is_finite());
    let total = bare_minutes.unwrap_or_else(|| {
        DurationTokens::new(text).fold(0.0_f64, |acc, (value, unit)| {
            acc + match unit {
                Unit::Hours => value * f64::from(MINUTES_PER_HOUR),
                Unit::Minutes => value,
            }
        })
    });
    let lower = f64::from(*bounds.start());
    let upper = f64::from(*bounds.end());
    // Clamped into u32 range before the cast.
    total.round().clamp(lower, upper) as u32
}

/// Format minutes as a compact duration, e.g. `"1h 30m"`.
///
/// # Examples
/// ```
/// use wayfare_core::format_duration;
///
/// assert_eq!(format_duration(90), "1h 30m");
/// assert_eq!(format_duration(120), "2h");
/// assert_eq!(format_duration(45), "45m");
/// ```
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes.div_euclid(MINUTES_PER_HOUR);
    let rest = minutes.rem_euclid(MINUTES_PER_HOUR);
    match (hours, rest) {
        (0, _) => format!("{rest}m"),
        (_, 0) => format!("{hours}h"),
        _ => format!("{hours}h {rest}m"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Hours,
    Minutes,
}

impl Unit {
    fn classify(word: &str) -> Option<Self> {
        match word {
            "h" | "hr" | "hrs" | "hour" | "hours" => Some(Self::Hours),
            "m" | "min" | "mins" | "minute" | "minutes" => Some(Self::Minutes),
            _ => None,
        }
    }
}

/// Iterator over `(value, unit)` pairs found in duration text.
struct DurationTokens {
    chars: Vec<char>,
    pos: usize,
}

impl DurationTokens {
    fn new(text: &str) -> Self {
        Self {
            chars: text.to_lowercase().chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut taken = String::new();
        while let Some(c) = self.peek().filter(|c| predicate(*c)) {
            taken.push(c);
            self.pos += 1;
        }
        taken
    }

    fn number(&mut self) -> Option<f64> {
        let digits = self.take_while(|c| c.is_ascii_digit() || c == '.');
        digits.parse().ok()
    }

    /// Consume `- N` or `to N` after a number, returning the upper bound.
    fn range_upper(&mut self) -> Option<f64> {
        let checkpoint = self.pos;
        self.skip_whitespace();
        let joined = match self.peek() {
            Some('-' | '\u{2013}') => {
                self.pos += 1;
                true
            }
            Some('t') if self.chars.get(self.pos + 1) == Some(&'o') => {
                self.pos += 2;
                true
            }
            _ => false,
        };
        if joined {
            self.skip_whitespace();
            if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return self.number();
            }
        }
        self.pos = checkpoint;
        None
    }
}

impl Iterator for DurationTokens {
    type Item = (f64, Unit);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = self.peek()?;
            if !c.is_ascii_digit() {
                self.pos += 1;
                continue;
            }
            let Some(first) = self.number() else {
                continue;
            };
            let value = self.range_upper().unwrap_or(first);
            self.skip_whitespace();
            let checkpoint = self.pos;
            let word = self.take_while(char::is_alphabetic);
            if let Some(unit) = Unit::classify(&word) {
                return Some((value, unit));
            }
            // A bare number inside text is not a duration.
            self.pos = checkpoint;
        }
    }
}
