//! Bipartite student/course graph and the analytics built on it.
//!
//! [`EnrollmentGraph`] keeps entity lookup tables plus two mirrored
//! adjacency maps: student to courses and course to students. Every edge
//! mutation updates both sides, so the two relations are always exact
//! mirror images. Reads are lenient: unknown ids yield empty sets, never
//! errors.
//!
//! The analytic queries live in sibling modules: [`similarity`] (Jaccard
//! ranking of students), [`community`] (connected components of students
//! linked through shared courses), and [`recommend`] (course suggestions
//! aggregated from similar students).

pub mod community;
pub mod recommend;
pub mod similarity;


pub use recommend::CourseRecommendation;
pub use similarity::StudentSimilarity;

use crate::model::{Course, Student};
use crate::{CourseId, StudentId};

use std::collections::{BTreeSet, HashMap};

/// In-memory bipartite graph of students, courses, and enrollments.
///
/// Populated by the caller from already-loaded records; the graph never
/// touches storage. Mutations are not safe for concurrent callers; wrap
/// the graph in a mutex if it is shared.
///
/// # Example
///
/// ```
/// use cursus::graph::EnrollmentGraph;
/// use cursus::model::Student;
///
/// let mut graph = EnrollmentGraph::new();
/// graph.add_student(Student::new(1, "Ada", "Lovelace", "ada@example.edu"));
/// graph.add_student(Student::new(2, "Alan", "Turing", "alan@example.edu"));
/// graph.add_enrollment(1, 10);
/// graph.add_enrollment(1, 11);
/// graph.add_enrollment(2, 10);
///
/// let similar = graph.find_similar_students(1, 0.2);
/// assert_eq!(similar.len(), 1);
/// assert_eq!(similar[0].student_b().id(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnrollmentGraph {
    students: HashMap<StudentId, Student>,
    courses: HashMap<CourseId, Course>,
    student_to_courses: HashMap<StudentId, BTreeSet<CourseId>>,
    course_to_students: HashMap<CourseId, BTreeSet<StudentId>>,
}

impl EnrollmentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts a student record and ensures its adjacency entry exists.
    pub fn add_student(&mut self, student: Student) {
        self.student_to_courses.entry(student.id()).or_default();
        self.students.insert(student.id(), student);
    }

    /// Upserts a course record and ensures its adjacency entry exists.
    pub fn add_course(&mut self, course: Course) {
        self.course_to_students.entry(course.id()).or_default();
        self.courses.insert(course.id(), course);
    }

    /// Records an enrollment edge on both adjacency maps. Idempotent.
    pub fn add_enrollment(&mut self, student_id: StudentId, course_id: CourseId) {
        self.student_to_courses
            .entry(student_id)
            .or_default()
            .insert(course_id);
        self.course_to_students
            .entry(course_id)
            .or_default()
            .insert(student_id);
    }

    /// Removes an enrollment edge from both adjacency maps. Removing an
    /// edge that does not exist is a no-op.
    pub fn remove_enrollment(&mut self, student_id: StudentId, course_id: CourseId) {
        if let Some(courses) = self.student_to_courses.get_mut(&student_id) {
            courses.remove(&course_id);
        }
        if let Some(students) = self.course_to_students.get_mut(&course_id) {
            students.remove(&student_id);
        }
    }

    /// Courses the student is enrolled in; empty for unknown ids.
    pub fn student_courses(&self, student_id: StudentId) -> &BTreeSet<CourseId> {
        static EMPTY: BTreeSet<CourseId> = BTreeSet::new();
        self.student_to_courses.get(&student_id).unwrap_or(&EMPTY)
    }

    /// Students enrolled in the course; empty for unknown ids.
    pub fn course_students(&self, course_id: CourseId) -> &BTreeSet<StudentId> {
        static EMPTY: BTreeSet<StudentId> = BTreeSet::new();
        self.course_to_students.get(&course_id).unwrap_or(&EMPTY)
    }

    pub fn student(&self, student_id: StudentId) -> Option<&Student> {
        self.students.get(&student_id)
    }

    pub fn course(&self, course_id: CourseId) -> Option<&Course> {
        self.courses.get(&course_id)
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Total number of enrollment edges.
    pub fn enrollment_count(&self) -> usize {
        self.student_to_courses.values().map(BTreeSet::len).sum()
    }

    /// Empties all four maps.
    pub fn clear(&mut self) {
        self.students.clear();
        self.courses.clear();
        self.student_to_courses.clear();
        self.course_to_students.clear();
    }

    pub(crate) fn student_ids_sorted(&self) -> Vec<StudentId> {
        let mut ids: Vec<StudentId> = self.students.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
