use thiserror::Error;

/// Errors raised when constructing a [`TimeSlot`](super::TimeSlot).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeSlotError {
    #[error("time slot must end after it starts ({start_minute}..{end_minute})")]
    Empty { start_minute: u16, end_minute: u16 },

    #[error("time slot end {end_minute} runs past midnight")]
    PastMidnight { end_minute: u16 },
}
