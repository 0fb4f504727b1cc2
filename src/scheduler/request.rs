//! Request and result types for the greedy timetabler.

use crate::model::{Course, TimeSlot};

/// One course awaiting a slot assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleRequest {
    course: Course,
    preferred_slot: Option<TimeSlot>,
    priority: i32,
}

impl ScheduleRequest {
    pub fn new(course: Course, preferred_slot: Option<TimeSlot>, priority: i32) -> Self {
        Self {
            course,
            preferred_slot,
            priority,
        }
    }

    /// Priority defaults to `credits * capacity`, weighting large mandatory
    /// courses ahead of small electives.
    pub fn with_default_priority(course: Course, preferred_slot: Option<TimeSlot>) -> Self {
        let priority = (course.credits() * course.capacity()) as i32;
        Self::new(course, preferred_slot, priority)
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn preferred_slot(&self) -> Option<&TimeSlot> {
        self.preferred_slot.as_ref()
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub(crate) fn into_parts(self) -> (Course, Option<TimeSlot>) {
        (self.course, self.preferred_slot)
    }
}

/// Why a request ended up where it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssignmentReason {
    /// The preferred slot was free and taken as-is.
    Preferred,
    /// The preferred slot was unavailable (or absent); the first conflict-free
    /// slot from the candidate pool was taken instead.
    Alternative,
    /// Every candidate slot conflicted with the committed schedule.
    NoSlotAvailable,
}

impl std::fmt::Display for AssignmentReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            AssignmentReason::Preferred => "preferred",
            AssignmentReason::Alternative => "alternative",
            AssignmentReason::NoSlotAvailable => "no available time slots",
        };
        f.write_str(text)
    }
}

/// Outcome of one scheduling attempt. Immutable once produced; a failed
/// result is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleResult {
    course: Course,
    assigned_slot: Option<TimeSlot>,
    success: bool,
    reason: AssignmentReason,
}

impl ScheduleResult {
    pub(crate) fn scheduled(course: Course, slot: TimeSlot, reason: AssignmentReason) -> Self {
        Self {
            course,
            assigned_slot: Some(slot),
            success: true,
            reason,
        }
    }

    pub(crate) fn failed(course: Course) -> Self {
        Self {
            course,
            assigned_slot: None,
            success: false,
            reason: AssignmentReason::NoSlotAvailable,
        }
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn assigned_slot(&self) -> Option<&TimeSlot> {
        self.assigned_slot.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn reason(&self) -> AssignmentReason {
        self.reason
    }
}

/// A committed (course, slot) pair, the unit handed back to the persistence
/// collaborator after a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledClass {
    course: Course,
    slot: TimeSlot,
}

impl ScheduledClass {
    pub(crate) fn new(course: Course, slot: TimeSlot) -> Self {
        Self { course, slot }
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn slot(&self) -> &TimeSlot {
        &self.slot
    }
}

impl std::fmt::Display for ScheduledClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.course.code(), self.slot)
    }
}
