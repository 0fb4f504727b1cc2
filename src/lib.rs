//! cursus - course timetabling and student-enrollment analytics.
//!
//! An in-memory engine with two independent halves: a conflict-aware greedy
//! timetabler (interval index + priority-ordered slot assignment) and a
//! bipartite student/course graph supporting similarity search, community
//! detection, and course recommendations.

pub mod graph;
pub mod interval;
pub mod model;
pub mod scheduler;

pub use graph::EnrollmentGraph;
pub use interval::{Interval, IntervalIndex};
pub use scheduler::GreedyScheduler;

/// Identifier for a student, assigned by the caller.
pub type StudentId = u32;

/// Identifier for a course, assigned by the caller.
pub type CourseId = u32;

/// Identifier for a time slot, assigned by the caller.
pub type SlotId = u32;

/// Identifier for a teacher, assigned by the caller.
pub type TeacherId = u32;
