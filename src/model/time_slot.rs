use crate::interval::Interval;
use crate::SlotId;

use super::TimeSlotError;

/// Minutes in one day; the stride of the day-offset interval encoding.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Day of the week, ordered Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Zero-based position within the week (Monday = 0).
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// A bookable room/time range on one day of the week.
///
/// Times are minutes since midnight. Construction rejects empty ranges and
/// ranges running past midnight, so every slot maps to a valid half-open
/// interval in the week-wide encoding `day * 1440 + minute`. Slots on
/// different days land in disjoint numeric ranges and can never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeSlot {
    id: SlotId,
    day: DayOfWeek,
    start_minute: u16,
    end_minute: u16,
    room: String,
}

impl TimeSlot {
    pub fn new(
        id: SlotId,
        day: DayOfWeek,
        start_minute: u16,
        end_minute: u16,
        room: impl Into<String>,
    ) -> Result<Self, TimeSlotError> {
        if end_minute <= start_minute {
            return Err(TimeSlotError::Empty {
                start_minute,
                end_minute,
            });
        }
        if end_minute > MINUTES_PER_DAY {
            return Err(TimeSlotError::PastMidnight { end_minute });
        }
        Ok(Self {
            id,
            day,
            start_minute,
            end_minute,
            room: room.into(),
        })
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    pub fn start_minute(&self) -> u16 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u16 {
        self.end_minute
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    /// Week-encoded interval carrying `payload`.
    ///
    /// Infallible: the constructor already guarantees a non-empty range that
    /// stays within its day.
    pub fn to_interval<T>(&self, payload: T) -> Interval<T> {
        let day_offset = i64::from(self.day.index()) * i64::from(MINUTES_PER_DAY);
        Interval::new_unchecked(
            day_offset + i64::from(self.start_minute),
            day_offset + i64::from(self.end_minute),
            payload,
        )
    }

    /// True if both slots fall on the same day and their minute ranges
    /// intersect (half-open).
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day
            && self.start_minute < other.end_minute
            && other.start_minute < self.end_minute
    }
}

// Deserialization funnels through the constructor so invalid ranges are
// rejected with the same errors as direct construction.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            id: SlotId,
            day: DayOfWeek,
            start_minute: u16,
            end_minute: u16,
            room: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        TimeSlot::new(raw.id, raw.day, raw.start_minute, raw.end_minute, raw.room)
            .map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}-{:02}:{:02} ({})",
            self.day,
            self.start_minute / 60,
            self.start_minute % 60,
            self.end_minute / 60,
            self.end_minute % 60,
            self.room
        )
    }
}
