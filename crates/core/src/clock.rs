// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock times of day and the spans between them.
//!
//! All arithmetic stays within a single day: there is no rollover past
//! midnight, and a span that would be negative clamps to zero.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(
        || match Regex::new(r"^([01]?\d|2[0-3]):([0-5]\d)(?::([0-5]\d))?$") {
            Ok(re) => re,
            Err(_) => unreachable!("static regex pattern"),
        },
    );
static SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^(\d{1,3}):([0-5]\d)(?::([0-5]\d))?$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// A time of day as entered by the user: `HH:MM` or `HH:MM:SS`.
///
/// Remembers whether seconds were supplied, so that `"14:00"` and
/// `"14:00:00"` render back the way they were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallClock {
    hour: u8,
    minute: u8,
    second: Option<u8>,
}

impl WallClock {
    /// Builds a time of day, returning `None` when out of range.
    pub fn new(hour: u8, minute: u8, second: Option<u8>) -> Option<Self> {
        if hour > 23 || minute > 59 || second.is_some_and(|s| s > 59) {
            return None;
        }
        Some(WallClock {
            hour,
            minute,
            second,
        })
    }

    /// Parses a user-entered time, naming `field` in the error.
    pub fn parse(field: &'static str, value: &str) -> Result<Self> {
        let invalid = || Error::InvalidTime {
            field,
            value: value.to_string(),
        };
        let caps = TIME_RE.captures(value.trim()).ok_or_else(invalid)?;
        let number = |idx: usize| caps.get(idx).and_then(|m| m.as_str().parse::<u8>().ok());
        let hour = number(1).ok_or_else(invalid)?;
        let minute = number(2).ok_or_else(invalid)?;
        let second = caps.get(3).map(|_| number(3).ok_or_else(invalid)).transpose()?;
        WallClock::new(hour, minute, second).ok_or_else(invalid)
    }

    /// Extracts the time of day from a server datetime.
    ///
    /// Accepts `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM[:SS]` or a bare
    /// time. Fractional seconds are dropped.
    pub fn from_datetime(field: &'static str, value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let time_part = trimmed.rsplit([' ', 'T']).next().unwrap_or(trimmed);
        let time_part = time_part.split('.').next().unwrap_or(time_part);
        WallClock::parse(field, time_part).map_err(|_| Error::InvalidTime {
            field,
            value: value.to_string(),
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> Option<u8> {
        self.second
    }

    /// Minutes since midnight. Seconds are ignored.
    pub fn minutes_of_day(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Seconds since midnight, counting a missing seconds field as zero.
    pub fn seconds_of_day(&self) -> u32 {
        self.minutes_of_day() * 60 + u32::from(self.second.unwrap_or(0))
    }

    /// Whole minutes from `self` to `later`, clamped to zero.
    pub fn minutes_until(&self, later: &WallClock) -> Span {
        Span::from_minutes(later.minutes_of_day().saturating_sub(self.minutes_of_day()))
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)?;
        if let Some(second) = self.second {
            write!(f, ":{:02}", second)?;
        }
        Ok(())
    }
}

impl FromStr for WallClock {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        WallClock::parse("time", s)
    }
}

impl Serialize for WallClock {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WallClock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A non-negative elapsed time, rendered `HH:MM:SS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    secs: u32,
}

impl Span {
    pub const ZERO: Span = Span { secs: 0 };

    pub fn from_minutes(minutes: u32) -> Self {
        Span { secs: minutes * 60 }
    }

    pub fn from_secs(secs: u32) -> Self {
        Span { secs }
    }

    pub fn as_secs(&self) -> u32 {
        self.secs
    }

    /// Whole minutes, truncating any leftover seconds.
    pub fn whole_minutes(&self) -> u32 {
        self.secs / 60
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.secs / 3600;
        let minutes = (self.secs % 3600) / 60;
        let seconds = self.secs % 60;
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl FromStr for Span {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDuration(s.to_string());
        let caps = SPAN_RE.captures(s.trim()).ok_or_else(invalid)?;
        let number = |idx: usize| -> Result<u32> {
            match caps.get(idx) {
                Some(m) => m.as_str().parse::<u32>().map_err(|_| invalid()),
                None => Ok(0),
            }
        };
        Ok(Span::from_secs(number(1)? * 3600 + number(2)? * 60 + number(3)?))
    }
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Span {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
