//! Explicit observer seam for scheduling progress.
//!
//! The engine has no process-wide logger; callers that want visibility
//! install an observer and route the events into whatever sink they own.

use crate::model::{Course, TimeSlot};

use super::AssignmentReason;

/// Receives scheduling events. Every method has a no-op default, so
/// implementors override only what they care about.
pub trait ScheduleObserver {
    /// A batch of `request_count` requests is about to be processed.
    fn on_batch_start(&mut self, _request_count: usize) {}

    /// `course` was committed to `slot`.
    fn on_assignment(&mut self, _course: &Course, _slot: &TimeSlot, _reason: AssignmentReason) {}

    /// No conflict-free slot existed for `course`.
    fn on_rejection(&mut self, _course: &Course) {}

    /// The batch finished with the given outcome counts.
    fn on_batch_end(&mut self, _assigned: usize, _rejected: usize) {}
}
