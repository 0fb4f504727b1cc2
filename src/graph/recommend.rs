//! Course recommendations aggregated from similar students.

use crate::model::Course;
use crate::{CourseId, StudentId};

use std::cmp::Ordering;
use std::collections::HashMap;

use super::EnrollmentGraph;

/// Minimum similarity a student must reach to contribute to scores.
const SIMILARITY_THRESHOLD: f64 = 0.3;

const RECOMMENDATION_REASON: &str = "Based on similar students' enrollments";

/// A suggested course with its accumulated evidence score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseRecommendation {
    course: Course,
    score: f64,
    reason: String,
}

impl CourseRecommendation {
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Sum of the similarities of every similar student taking the course.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl std::fmt::Display for CourseRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (score: {:.2}) - {}", self.course, self.score, self.reason)
    }
}

impl EnrollmentGraph {
    /// Suggests up to `max_recommendations` courses the student is not yet
    /// taking, scored by summing each similar student's similarity over the
    /// courses they take.
    ///
    /// Similarity uses a fixed 30% threshold. Courses sort by score
    /// descending with ascending course id as the deterministic tie-break.
    pub fn course_recommendations(
        &self,
        student_id: StudentId,
        max_recommendations: usize,
    ) -> Vec<CourseRecommendation> {
        let similar_students = self.find_similar_students(student_id, SIMILARITY_THRESHOLD);
        let taken = self.student_courses(student_id);

        let mut scores: HashMap<CourseId, f64> = HashMap::new();
        for similarity in &similar_students {
            for &course_id in self.student_courses(similarity.student_b().id()) {
                if !taken.contains(&course_id) {
                    *scores.entry(course_id).or_insert(0.0) += similarity.similarity();
                }
            }
        }

        let mut ranked: Vec<(CourseId, f64)> = scores.into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        ranked
            .into_iter()
            .take(max_recommendations)
            .filter_map(|(course_id, score)| {
                self.course(course_id).map(|course| CourseRecommendation {
                    course: course.clone(),
                    score,
                    reason: RECOMMENDATION_REASON.to_string(),
                })
            })
            .collect()
    }
}
