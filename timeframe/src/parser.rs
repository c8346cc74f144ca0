//! Expansion of scanned segments into the per-weekday interval table.

use crate::error::TimeframeError;
use crate::grammar;
use crate::schedule::Schedule;

/// Parse a raw time-frames string into a [`Schedule`].
///
/// A day range walks weekday indices from its start day, wrapping Saturday
/// back to Sunday, inclusive of both ends — `Fri-Sun` covers Fri, Sat, Sun
/// and nothing else. Segments targeting the same day accumulate their
/// intervals in input order.
pub fn parse(input: &str) -> Result<Schedule, TimeframeError> {
    let segments = grammar::scan(input)?;
    let mut schedule = Schedule::default();
    for segment in &segments {
        tracing::debug!(?segment, "expanding segment");
        let end = segment.end_day.index();
        let mut day = segment.start_day.index();
        loop {
            schedule.table[usize::from(day)].push(segment.interval);
            if day == end {
                break;
            }
            day = (day + 1) % 7;
        }
    }
    tracing::debug!(?schedule, "parsed time-frames");
    Ok(schedule)
}
