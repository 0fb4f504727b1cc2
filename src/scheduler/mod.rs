//! Priority-greedy course timetabling.
//!
//! [`GreedyScheduler`] walks requests in priority order and commits each one
//! to its preferred slot when free, otherwise to the first conflict-free
//! slot from a pool pre-sorted by earliest end time. Committed assignments
//! go straight into an interval index, so every later request in the same
//! batch sees them. Single pass, no backtracking: a high-priority request
//! can claim a slot that would have let two lower-priority requests fit.
//! That tradeoff is the published behavior; a provably optimal assignment
//! would be a different algorithm, not a fix.

mod observer;
mod request;

#[cfg(test)]
mod tests;

pub use observer::ScheduleObserver;
pub use request::{AssignmentReason, ScheduleRequest, ScheduleResult, ScheduledClass};

use crate::interval::IntervalIndex;
use crate::model::{Course, TimeSlot};

use std::cmp::Ordering;

/// Greedy slot assigner over a fixed candidate pool.
///
/// Mutating calls must be serialized by the caller (wrap the scheduler in a
/// mutex if it is shared); batch runs are CPU-bound and run to completion.
///
/// # Example
///
/// ```
/// use cursus::model::{Course, DayOfWeek, TimeSlot};
/// use cursus::scheduler::{GreedyScheduler, ScheduleRequest};
///
/// let pool = vec![
///     TimeSlot::new(1, DayOfWeek::Monday, 9 * 60, 10 * 60, "A-101").unwrap(),
///     TimeSlot::new(2, DayOfWeek::Monday, 10 * 60, 11 * 60, "A-101").unwrap(),
/// ];
/// let mut scheduler = GreedyScheduler::new(pool);
///
/// let algebra = Course::new(1, "MATH-101", "Algebra", "", 3, 30, 1);
/// let results = scheduler.schedule_optimal(vec![ScheduleRequest::new(algebra, None, 10)]);
///
/// assert!(results[0].is_success());
/// assert!(!scheduler.has_conflicts());
/// ```
pub struct GreedyScheduler {
    available_slots: Vec<TimeSlot>,
    committed: IntervalIndex<ScheduledClass>,
    observer: Option<Box<dyn ScheduleObserver>>,
}

impl GreedyScheduler {
    /// Creates a scheduler over `pool`, sorted ascending by day and end time
    /// (the earliest-end-time-first greedy ordering).
    pub fn new(pool: Vec<TimeSlot>) -> Self {
        let mut available_slots = pool;
        available_slots.sort_by(|a, b| {
            a.day()
                .cmp(&b.day())
                .then_with(|| a.end_minute().cmp(&b.end_minute()))
        });
        Self {
            available_slots,
            committed: IntervalIndex::new(),
            observer: None,
        }
    }

    /// Installs an observer receiving batch and per-assignment events.
    pub fn set_observer(&mut self, observer: Box<dyn ScheduleObserver>) {
        self.observer = Some(observer);
    }

    /// The candidate pool in its greedy processing order.
    pub fn available_slots(&self) -> &[TimeSlot] {
        &self.available_slots
    }

    /// Schedules a batch of requests, highest priority first.
    ///
    /// Priority ties between two requests that both carry a preferred slot
    /// are broken by the earlier preferred end time; all other ties keep
    /// their relative order (the sort is stable). Results come back in
    /// processing order, not caller order; re-sort by course id if input
    /// order matters.
    pub fn schedule_optimal(&mut self, requests: Vec<ScheduleRequest>) -> Vec<ScheduleResult> {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_batch_start(requests.len());
        }

        let mut ordered = requests;
        ordered.sort_by(|a, b| {
            b.priority().cmp(&a.priority()).then_with(|| {
                match (a.preferred_slot(), b.preferred_slot()) {
                    (Some(x), Some(y)) => x.end_minute().cmp(&y.end_minute()),
                    _ => Ordering::Equal,
                }
            })
        });

        let mut results = Vec::with_capacity(ordered.len());
        for request in ordered {
            results.push(self.schedule_class(request));
        }

        if let Some(observer) = self.observer.as_mut() {
            let assigned = results.iter().filter(|r| r.is_success()).count();
            observer.on_batch_end(assigned, results.len() - assigned);
        }

        results
    }

    /// Schedules one request against the already-committed assignments.
    ///
    /// The preferred slot wins if it is conflict-free; otherwise the first
    /// conflict-free slot from the sorted pool is taken. On success the
    /// assignment is committed immediately and is visible to subsequent
    /// calls. On failure nothing is committed.
    pub fn schedule_class(&mut self, request: ScheduleRequest) -> ScheduleResult {
        let (course, preferred_slot) = request.into_parts();

        if let Some(slot) = preferred_slot {
            if self.can_schedule_at(&slot) {
                return self.commit(course, slot, AssignmentReason::Preferred);
            }
        }

        let alternative = self
            .available_slots
            .iter()
            .find(|slot| self.can_schedule_at(slot))
            .cloned();

        match alternative {
            Some(slot) => self.commit(course, slot, AssignmentReason::Alternative),
            None => {
                if let Some(observer) = self.observer.as_mut() {
                    observer.on_rejection(&course);
                }
                ScheduleResult::failed(course)
            }
        }
    }

    /// Committed (course, slot) pairs, ordered by week-encoded start time.
    pub fn scheduled_classes(&self) -> Vec<ScheduledClass> {
        self.committed
            .intervals()
            .into_iter()
            .map(|interval| interval.payload().clone())
            .collect()
    }

    /// Pairwise audit of the committed schedule, independent of the interval
    /// index. A true result signals a latent invariant violation and should
    /// be surfaced to the operator, never auto-corrected.
    pub fn has_conflicts(&self) -> bool {
        let intervals = self.committed.intervals();
        for i in 0..intervals.len() {
            for j in (i + 1)..intervals.len() {
                if intervals[i].overlaps(intervals[j]) {
                    return true;
                }
            }
        }
        false
    }

    /// Empties the committed schedule and its conflict index together.
    pub fn clear_schedule(&mut self) {
        self.committed.clear();
    }

    fn can_schedule_at(&self, slot: &TimeSlot) -> bool {
        !self.committed.has_overlap(&slot.to_interval(()))
    }

    fn commit(&mut self, course: Course, slot: TimeSlot, reason: AssignmentReason) -> ScheduleResult {
        let scheduled = ScheduledClass::new(course.clone(), slot.clone());
        self.committed.insert(slot.to_interval(scheduled));
        if let Some(observer) = self.observer.as_mut() {
            observer.on_assignment(&course, &slot, reason);
        }
        ScheduleResult::scheduled(course, slot, reason)
    }
}
