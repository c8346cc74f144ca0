use std::fmt;

use crate::eval::Evaluation;
use crate::schedule::{Interval, Schedule, TimeOfDay, Weekday};

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Canonical expanded form: one segment per stored frame, days in
/// Sunday-first order. Day ranges are gone by this point, so the output is
/// grammatical but not necessarily the string that was parsed.
impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (day, frames) in self.days() {
            for frame in frames {
                if !first {
                    write!(f, "&")?;
                }
                first = false;
                write!(f, "{day}@{frame}")?;
            }
        }
        Ok(())
    }
}

/// The external answer format: the literal `Now`, or a zone-less
/// `YYYY-MM-DD HH:mm` at minute precision.
impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Now => f.write_str("Now"),
            Evaluation::Next(next) => write!(f, "{}", next.strftime("%Y-%m-%d %H:%M")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use jiff::civil::datetime;

    #[test]
    fn single_segment_round_trips() {
        let schedule = parse("Sun@09:00-18:00").unwrap();
        assert_eq!(schedule.to_string(), "Sun@09:00-18:00");
    }

    #[test]
    fn day_range_displays_expanded() {
        let schedule = parse("Fri-Sun@10:00-18:00").unwrap();
        assert_eq!(
            schedule.to_string(),
            "Sun@10:00-18:00&Fri@10:00-18:00&Sat@10:00-18:00"
        );
    }

    #[test]
    fn display_output_reparses_to_the_same_schedule() {
        let schedule = parse("Sun-Mon@09:00-15:00&Mon@18:00-19:30").unwrap();
        let reparsed = parse(&schedule.to_string()).unwrap();
        assert_eq!(schedule, reparsed);
    }

    #[test]
    fn evaluation_formats_now_and_next() {
        assert_eq!(Evaluation::Now.to_string(), "Now");
        let next = Evaluation::Next(datetime(2019, 11, 10, 9, 0, 0, 0));
        assert_eq!(next.to_string(), "2019-11-10 09:00");
    }

    #[test]
    fn single_digit_fields_are_zero_padded() {
        let next = Evaluation::Next(datetime(2026, 1, 2, 3, 4, 0, 0));
        assert_eq!(next.to_string(), "2026-01-02 03:04");
    }
}
