//! Scanner for the weekly time-frames grammar:
//!
//! ```text
//! spec      := segment ('&' segment)*
//! segment   := dayspec '@' timerange
//! dayspec   := DAY ('-' DAY)?
//! timerange := TIME '-' TIME
//! DAY       := Sun | Mon | Tue | Wed | Thu | Fri | Sat   (exact case)
//! TIME      := zero-padded 24-hour HH:MM
//! ```
//!
//! No whitespace is permitted anywhere and the whole input must match end to
//! end. Scanning and validation are one pass: a successful scan yields the
//! raw segments, so later stages never re-validate.

use crate::error::{Span, TimeframeError};
use crate::schedule::{Interval, TimeOfDay, Weekday};

/// One raw `<Day>[-Day]@<time>-<time>` unit, before day-range expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment {
    pub start_day: Weekday,
    pub end_day: Weekday,
    pub interval: Interval,
}

/// Check a raw time-frames string against the grammar.
pub fn validate(input: &str) -> Result<(), TimeframeError> {
    scan(input).map(|_| ())
}

pub(crate) fn scan(input: &str) -> Result<Vec<Segment>, TimeframeError> {
    Scanner::new(input).scan()
}

struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn scan(mut self) -> Result<Vec<Segment>, TimeframeError> {
        if self.bytes.is_empty() {
            return Err(self.invalid("empty time-frames string", Span::new(0, 0), None));
        }
        let mut segments = vec![self.segment()?];
        while self.pos < self.bytes.len() {
            self.expect(b'&', "'&' between segments")?;
            segments.push(self.segment()?);
        }
        Ok(segments)
    }

    fn segment(&mut self) -> Result<Segment, TimeframeError> {
        let start_day = self.day()?;
        let end_day = if self.peek() == Some(b'-') {
            self.pos += 1;
            self.day()?
        } else {
            start_day
        };
        self.expect(b'@', "'@' between days and times")?;
        let start = self.time()?;
        self.expect(b'-', "'-' between start and end times")?;
        let end = self.time()?;
        Ok(Segment {
            start_day,
            end_day,
            interval: Interval { start, end },
        })
    }

    fn day(&mut self) -> Result<Weekday, TimeframeError> {
        let start = self.pos;
        let end = (self.pos + 3).min(self.bytes.len());
        let span = Span::new(start, end);
        // get() rather than slicing: the input may not split on a char boundary.
        let token = match self.input.get(start..end) {
            Some(token) => token,
            None => {
                return Err(self.invalid(
                    "expected a weekday (Sun, Mon, Tue, Wed, Thu, Fri, Sat)",
                    span,
                    None,
                ));
            }
        };
        match Weekday::from_token(token) {
            Some(day) => {
                self.pos = end;
                Ok(day)
            }
            None => {
                let suggestion =
                    Weekday::from_token_ignore_case(token).map(|d| d.token().to_string());
                Err(self.invalid(
                    format!("expected a weekday (Sun, Mon, Tue, Wed, Thu, Fri, Sat), got \"{token}\""),
                    span,
                    suggestion,
                ))
            }
        }
    }

    fn time(&mut self) -> Result<TimeOfDay, TimeframeError> {
        let start = self.pos;
        if start + 5 > self.bytes.len() {
            return Err(self.invalid(
                "expected a time as zero-padded HH:MM",
                Span::new(start, self.bytes.len()),
                None,
            ));
        }
        let b = &self.bytes[start..start + 5];
        let shaped = b[0].is_ascii_digit()
            && b[1].is_ascii_digit()
            && b[2] == b':'
            && b[3].is_ascii_digit()
            && b[4].is_ascii_digit();
        if !shaped {
            return Err(self.invalid(
                "expected a time as zero-padded HH:MM",
                Span::new(start, start + 5),
                None,
            ));
        }
        let hour = (b[0] - b'0') * 10 + (b[1] - b'0');
        let minute = (b[3] - b'0') * 10 + (b[4] - b'0');
        if hour > 23 {
            return Err(self.invalid(
                format!("hour {hour} out of range (00-23)"),
                Span::new(start, start + 2),
                None,
            ));
        }
        if minute > 59 {
            return Err(self.invalid(
                format!("minute {minute} out of range (00-59)"),
                Span::new(start + 3, start + 5),
                None,
            ));
        }
        self.pos += 5;
        Ok(TimeOfDay::from_parts(hour, minute))
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn expect(&mut self, byte: u8, what: &str) -> Result<(), TimeframeError> {
        match self.peek() {
            Some(b) if b == byte => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.invalid(
                format!("expected {what}"),
                Span::new(self.pos, self.pos + 1),
                None,
            )),
        }
    }

    fn invalid(
        &self,
        message: impl Into<String>,
        span: Span,
        suggestion: Option<String>,
    ) -> TimeframeError {
        TimeframeError::invalid(message, span, self.input, suggestion)
    }
}
