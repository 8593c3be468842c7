//! Course and enrollment models.
//!
//! # Responsibility
//! - Define the admin-mutable course record and its partial-update shape.
//! - Define the per-course enrollment record and its status lifecycle.
//!
//! # Invariants
//! - At most one `Enrollment` exists per course id.
//! - `EnrollmentStatus` transitions are free; no ordering is enforced.
//! - `Enrollment.course_id` is *not* guaranteed to resolve to a live course:
//!   deleting a course leaves its enrollment behind by design.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a course.
pub type CourseId = Uuid;

/// Difficulty tier of a digital course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    Basico,
    Intermedio,
    Avanzado,
}

/// Delivery modality of a digital course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseModality {
    Online,
    Presencial,
    Hibrido,
}

/// Admin-mutable course record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub level: CourseLevel,
    pub modality: CourseModality,
    /// Free-form duration label, e.g. "4 semanas".
    pub duration: String,
    /// Ordered learning objectives.
    pub objectives: Vec<String>,
    /// Free-form prerequisite text.
    pub requirements: String,
}

impl Course {
    /// Builds a course from draft input with a fresh stable id.
    pub fn from_draft(draft: CourseDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            level: draft.level,
            modality: draft.modality,
            duration: draft.duration,
            objectives: draft.objectives,
            requirements: draft.requirements,
        }
    }

    /// Applies a partial update field-by-field. Unset fields keep their
    /// current value; the id never changes.
    pub fn apply_patch(&mut self, patch: CoursePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(modality) = patch.modality {
            self.modality = modality;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(objectives) = patch.objectives {
            self.objectives = objectives;
        }
        if let Some(requirements) = patch.requirements {
            self.requirements = requirements;
        }
    }
}

/// Input shape for course creation; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub level: CourseLevel,
    pub modality: CourseModality,
    pub duration: String,
    pub objectives: Vec<String>,
    pub requirements: String,
}

/// Explicit partial-update shape for courses.
///
/// Every field is optional; set fields replace the stored value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub level: Option<CourseLevel>,
    pub modality: Option<CourseModality>,
    pub duration: Option<String>,
    pub objectives: Option<Vec<String>>,
    pub requirements: Option<String>,
}

/// Progress state of a course enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    Pending,
    InProgress,
    Completed,
}

/// Links the session to a course and tracks completion status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Course the enrollment points at. May dangle after course deletion.
    pub course_id: CourseId,
    pub status: EnrollmentStatus,
    /// Enrollment time in epoch milliseconds.
    pub enrolled_at: i64,
}

#[cfg(test)]
mod tests {
    use super::{Course, CourseDraft, CourseLevel, CourseModality, CoursePatch};

    fn draft() -> CourseDraft {
        CourseDraft {
            title: "Introducción a la Informática".to_string(),
            description: "Conceptos básicos".to_string(),
            level: CourseLevel::Basico,
            modality: CourseModality::Online,
            duration: "4 semanas".to_string(),
            objectives: vec!["Navegar por Internet".to_string()],
            requirements: "Ninguno".to_string(),
        }
    }

    #[test]
    fn patch_replaces_only_set_fields() {
        let mut course = Course::from_draft(draft());
        let original_id = course.id;

        course.apply_patch(CoursePatch {
            title: Some("Informática I".to_string()),
            modality: Some(CourseModality::Hibrido),
            ..CoursePatch::default()
        });

        assert_eq!(course.id, original_id);
        assert_eq!(course.title, "Informática I");
        assert_eq!(course.modality, CourseModality::Hibrido);
        assert_eq!(course.description, "Conceptos básicos");
        assert_eq!(course.level, CourseLevel::Basico);
    }

    #[test]
    fn empty_patch_is_a_noop() {
        let mut course = Course::from_draft(draft());
        let before = course.clone();
        course.apply_patch(CoursePatch::default());
        assert_eq!(course, before);
    }
}
