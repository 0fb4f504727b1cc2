//! Connected components of students linked through shared courses.

use crate::StudentId;

use std::collections::{BTreeSet, HashSet};

use super::EnrollmentGraph;

impl EnrollmentGraph {
    /// Groups students into communities: two students belong together when
    /// a chain of shared courses connects them.
    ///
    /// Traversal is an explicit-stack depth-first search, so community size
    /// is bounded by memory rather than call depth. The worklist iterates
    /// student ids ascending, making the component order deterministic
    /// (each community surfaces at its smallest member). Components with a
    /// single member are dropped.
    pub fn find_student_communities(&self) -> Vec<BTreeSet<StudentId>> {
        let mut visited: HashSet<StudentId> = HashSet::new();
        let mut communities = Vec::new();

        for student_id in self.student_ids_sorted() {
            if visited.contains(&student_id) {
                continue;
            }

            let mut community = BTreeSet::new();
            let mut stack = vec![student_id];
            visited.insert(student_id);

            while let Some(current) = stack.pop() {
                community.insert(current);
                for &course_id in self.student_courses(current) {
                    for &classmate in self.course_students(course_id) {
                        if visited.insert(classmate) {
                            stack.push(classmate);
                        }
                    }
                }
            }

            if community.len() > 1 {
                communities.push(community);
            }
        }

        communities
    }
}
