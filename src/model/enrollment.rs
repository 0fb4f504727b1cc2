use crate::{CourseId, StudentId};

/// A student/course enrollment edge as delivered by the persistence layer.
///
/// The graph itself only needs the `(student_id, course_id)` pair; the grade
/// travels along for callers that render or aggregate it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enrollment {
    id: u32,
    student_id: StudentId,
    course_id: CourseId,
    grade: Option<String>,
}

impl Enrollment {
    pub fn new(id: u32, student_id: StudentId, course_id: CourseId, grade: Option<String>) -> Self {
        Self {
            id,
            student_id,
            course_id,
            grade,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn student_id(&self) -> StudentId {
        self.student_id
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn grade(&self) -> Option<&str> {
        self.grade.as_deref()
    }
}
