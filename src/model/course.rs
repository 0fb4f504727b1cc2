use crate::{CourseId, TeacherId};

/// Course record, keyed by a caller-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    id: CourseId,
    code: String,
    name: String,
    description: String,
    credits: u32,
    capacity: u32,
    teacher_id: TeacherId,
}

impl Course {
    pub fn new(
        id: CourseId,
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        credits: u32,
        capacity: u32,
        teacher_id: TeacherId,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            description: description.into(),
            credits,
            capacity,
            teacher_id,
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn teacher_id(&self) -> TeacherId {
        self.teacher_id
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}
