//! Querying a parsed schedule: containment of "now" and forward search for
//! the next valid instant.
//!
//! "Now" is sampled once by the caller and decomposed here into a weekday
//! and a minute-granular time of day; nothing re-reads the clock.

use jiff::civil::DateTime;

use crate::error::TimeframeError;
use crate::schedule::{Schedule, TimeOfDay, Weekday};

/// Result of one evaluation: send now, or reschedule to a later instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Now,
    Next(DateTime),
}

/// Check whether `time` on `day` falls inside any of the day's frames.
///
/// Bounds are inclusive on both ends. A day absent from the schedule never
/// matches. First match wins, which makes overlap irrelevant here.
pub fn is_within(schedule: &Schedule, day: Weekday, time: TimeOfDay) -> bool {
    schedule
        .intervals(day)
        .iter()
        .any(|frame| frame.contains(time))
}

/// Find the chronologically nearest valid instant strictly governed by the
/// schedule, assuming `now` is outside every frame (see [`is_within`]).
///
/// Scans day offsets 0 through 7 — a full week plus the wrap back to today's
/// weekday, so a frame that already elapsed today is found again next week.
/// On offset 0, frames whose end lies strictly before the current time are
/// skipped. Within a day, frames are tried in stored input order and the
/// first qualifying start wins, even when a later entry starts earlier.
pub fn next_from(schedule: &Schedule, now: DateTime) -> Result<DateTime, TimeframeError> {
    let today = Weekday::from_civil(now.date().weekday());
    let time = TimeOfDay::from_civil(now.time());

    for offset in 0u8..=7 {
        let day = today.offset(offset);
        for frame in schedule.intervals(day) {
            if offset == 0 && frame.end < time {
                continue;
            }
            let date = now
                .date()
                .checked_add(jiff::Span::new().days(i64::from(offset)))
                .map_err(|e| {
                    TimeframeError::exhausted(format!("cannot advance date by {offset} days: {e}"))
                })?;
            let next = date.to_datetime(frame.start.to_civil());
            tracing::debug!(%next, offset, "found next valid instant");
            return Ok(next);
        }
    }

    // Unreachable for a non-empty schedule, hence fatal.
    Err(TimeframeError::exhausted(
        "no valid time-frame within the next week",
    ))
}

/// The whole query: containment test first, forward search otherwise.
pub fn evaluate(schedule: &Schedule, now: DateTime) -> Result<Evaluation, TimeframeError> {
    let day = Weekday::from_civil(now.date().weekday());
    let time = TimeOfDay::from_civil(now.time());
    tracing::debug!(%now, day = day.token(), "evaluating");

    if is_within(schedule, day, time) {
        tracing::info!("within a valid time-frame");
        Ok(Evaluation::Now)
    } else {
        let next = next_from(schedule, now)?;
        tracing::info!(%next, "outside all time-frames, rescheduling");
        Ok(Evaluation::Next(next))
    }
}
