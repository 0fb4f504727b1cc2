//! Jaccard similarity ranking over student course sets.

use crate::model::Student;
use crate::{CourseId, StudentId};

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::EnrollmentGraph;

/// How alike two students' course loads are.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentSimilarity {
    student_a: Student,
    student_b: Student,
    similarity: f64,
    common_courses: BTreeSet<CourseId>,
}

impl StudentSimilarity {
    /// The student the query was made for.
    pub fn student_a(&self) -> &Student {
        &self.student_a
    }

    /// The compared student.
    pub fn student_b(&self) -> &Student {
        &self.student_b
    }

    /// Jaccard similarity of the two course sets, in `[0, 1]`.
    pub fn similarity(&self) -> f64 {
        self.similarity
    }

    pub fn common_courses(&self) -> &BTreeSet<CourseId> {
        &self.common_courses
    }
}

impl std::fmt::Display for StudentSimilarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} <-> {} ({:.1}% similar, {} common courses)",
            self.student_a.full_name(),
            self.student_b.full_name(),
            self.similarity * 100.0,
            self.common_courses.len()
        )
    }
}

/// Jaccard similarity `|A ∩ B| / |A ∪ B|`, defined as 0.0 for two empty
/// sets so the division is always guarded.
pub fn jaccard_similarity(a: &BTreeSet<CourseId>, b: &BTreeSet<CourseId>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

impl EnrollmentGraph {
    /// Ranks every other student by Jaccard similarity to `student_id`.
    ///
    /// Students with no courses are skipped on both sides; entries below
    /// `threshold` are dropped. Results sort by similarity descending, with
    /// the compared student's id ascending as the deterministic tie-break.
    pub fn find_similar_students(
        &self,
        student_id: StudentId,
        threshold: f64,
    ) -> Vec<StudentSimilarity> {
        let target_courses = self.student_courses(student_id);
        if target_courses.is_empty() {
            return Vec::new();
        }
        let target = match self.student(student_id) {
            Some(student) => student,
            None => return Vec::new(),
        };

        let mut similarities = Vec::new();
        for (&other_id, other) in &self.students {
            if other_id == student_id {
                continue;
            }
            let other_courses = self.student_courses(other_id);
            if other_courses.is_empty() {
                continue;
            }

            let similarity = jaccard_similarity(target_courses, other_courses);
            if similarity >= threshold {
                similarities.push(StudentSimilarity {
                    student_a: target.clone(),
                    student_b: other.clone(),
                    similarity,
                    common_courses: target_courses.intersection(other_courses).copied().collect(),
                });
            }
        }

        similarities.sort_by(|x, y| {
            y.similarity
                .partial_cmp(&x.similarity)
                .unwrap_or(Ordering::Equal)
                .then_with(|| x.student_b.id().cmp(&y.student_b.id()))
        });
        similarities
    }
}
