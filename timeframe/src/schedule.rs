#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Weekday in the grammar's canonical Sunday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays, Sunday first — `ALL[d.index()] == d`.
    pub const ALL: [Weekday; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// The exact-case 3-letter token the grammar accepts.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }

    /// Exact-case token lookup. `"sun"` does not match.
    pub fn from_token(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.token() == s)
    }

    /// Case-insensitive token lookup, used only to suggest the exact form.
    pub(crate) fn from_token_ignore_case(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.token().eq_ignore_ascii_case(s))
    }

    /// Index with Sunday = 0 through Saturday = 6.
    pub fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The weekday `days` days later, wrapping Saturday back to Sunday.
    pub fn offset(self, days: u8) -> Self {
        Self::ALL[usize::from((self.index() + days % 7) % 7)]
    }

    pub fn from_civil(weekday: jiff::civil::Weekday) -> Self {
        match weekday {
            jiff::civil::Weekday::Sunday => Self::Sunday,
            jiff::civil::Weekday::Monday => Self::Monday,
            jiff::civil::Weekday::Tuesday => Self::Tuesday,
            jiff::civil::Weekday::Wednesday => Self::Wednesday,
            jiff::civil::Weekday::Thursday => Self::Thursday,
            jiff::civil::Weekday::Friday => Self::Friday,
            jiff::civil::Weekday::Saturday => Self::Saturday,
        }
    }
}

/// Time of day at minute granularity. Ordering is hour-then-minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Checked constructor: hour 0-23, minute 0-59.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Caller guarantees the ranges hold.
    pub(crate) fn from_parts(hour: u8, minute: u8) -> Self {
        debug_assert!(hour <= 23 && minute <= 59);
        Self { hour, minute }
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Truncates seconds and below.
    pub fn from_civil(time: jiff::civil::Time) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    pub fn to_civil(self) -> jiff::civil::Time {
        jiff::civil::time(self.hour as i8, self.minute as i8, 0, 0)
    }
}

#[cfg(feature = "serde")]
impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:02}:{:02}", self.hour, self.minute))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| serde::de::Error::custom("expected HH:MM"))?;
        let hour = hour
            .parse()
            .map_err(|_| serde::de::Error::custom("invalid hour"))?;
        let minute = minute
            .parse()
            .map_err(|_| serde::de::Error::custom("invalid minute"))?;
        TimeOfDay::new(hour, minute).ok_or_else(|| serde::de::Error::custom("time out of range"))
    }
}

/// One time-frame: inclusive [start, end] within a single day.
///
/// The grammar places no ordering constraint on the two times; a frame with
/// start > end is accepted and simply never contains any time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Interval {
    /// Inclusive at both bounds.
    pub fn contains(self, time: TimeOfDay) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Parsed weekly availability: per-weekday interval lists.
///
/// Intervals accumulate in input order — a day touched by several segments
/// keeps one entry per segment, overlapping or duplicate entries included.
/// The stored order is observable: the next-occurrence search returns the
/// first qualifying frame in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub(crate) table: [Vec<Interval>; 7],
}

impl Schedule {
    /// The frames for `day`, in input order. Empty for an absent day.
    pub fn intervals(&self, day: Weekday) -> &[Interval] {
        &self.table[usize::from(day.index())]
    }

    pub fn has_day(&self, day: Weekday) -> bool {
        !self.intervals(day).is_empty()
    }

    /// Populated days in canonical Sunday-first order.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[Interval])> + '_ {
        Weekday::ALL
            .iter()
            .map(|&day| (day, self.intervals(day)))
            .filter(|(_, frames)| !frames.is_empty())
    }

    /// Never true for a schedule built from a validated string.
    pub fn is_empty(&self) -> bool {
        self.table.iter().all(Vec::is_empty)
    }
}
