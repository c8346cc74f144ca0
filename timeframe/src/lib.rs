//! timeframe — weekly availability windows.
//!
//! Decide whether "now" falls inside a set of recurring weekly time-frames
//! such as `"Sun-Thu@08:00-18:00&Fri@08:00-14:30"`, and when it does not,
//! find the next moment that does. All datetimes are civil (zone-less) and
//! minute-granular.
//!
//! # Examples
//!
//! ```
//! use timeframe::{Evaluation, Schedule};
//!
//! let schedule: Schedule = "Sun-Thu@08:00-18:00&Fri@08:00-14:30".parse().unwrap();
//! let now = jiff::civil::datetime(2019, 11, 5, 7, 7, 0, 0); // a Tuesday
//! let verdict = schedule.evaluate(now).unwrap();
//! assert_eq!(verdict.to_string(), "2019-11-05 08:00");
//! ```

pub mod display;
pub mod error;
pub mod eval;
pub mod grammar;
pub mod parser;
pub mod schedule;

pub use error::TimeframeError;
pub use eval::Evaluation;
pub use schedule::{Interval, Schedule, TimeOfDay, Weekday};

use jiff::civil::DateTime;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// --- Schedule convenience methods ---

impl Schedule {
    /// Parse a time-frames string, validating it against the grammar.
    pub fn parse(input: &str) -> Result<Self, TimeframeError> {
        parser::parse(input)
    }

    /// Check whether `time` on `day` is inside any frame.
    pub fn is_within(&self, day: Weekday, time: TimeOfDay) -> bool {
        eval::is_within(self, day, time)
    }

    /// Compute the next valid instant after `now`, assuming `now` is outside
    /// every frame.
    pub fn next_from(&self, now: DateTime) -> Result<DateTime, TimeframeError> {
        eval::next_from(self, now)
    }

    /// The one-shot query: [`Evaluation::Now`] when `now` is inside a frame,
    /// otherwise the next valid instant.
    pub fn evaluate(&self, now: DateTime) -> Result<Evaluation, TimeframeError> {
        eval::evaluate(self, now)
    }
}

impl FromStr for Schedule {
    type Err = TimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(None)?;
        for (day, frames) in self.days() {
            let frames: Vec<String> = frames.iter().map(|frame| frame.to_string()).collect();
            map.serialize_entry(day.token(), &frames)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Deserialize from the time-frames string form
        let s = String::deserialize(deserializer)?;
        Schedule::parse(&s).map_err(serde::de::Error::custom)
    }
}
