//! Course use-case service: catalog reads, admin CRUD and enrollments.
//!
//! # Responsibility
//! - Provide the course capability surface consumed by the shell.
//! - Stamp enrollment timestamps and join enrollments with their courses.
//!
//! # Invariants
//! - Enrolling is idempotent per course id; the second call is a no-op.
//! - Progress transitions are free; no ordering is enforced.
//! - Deleting a course leaves its enrollment dangling; `enrolled_courses`
//!   surfaces the gap as `course: None` instead of hiding the record.

use crate::model::course::{
    Course, CourseDraft, CourseId, CoursePatch, Enrollment, EnrollmentStatus,
};
use crate::repo::course_repo::CourseRepository;
use crate::repo::RepoResult;
use log::info;
use std::time::{SystemTime, UNIX_EPOCH};

/// An enrollment joined with its course, when the course still exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrolledCourse {
    pub enrollment: Enrollment,
    /// `None` when the course was deleted after enrollment.
    pub course: Option<Course>,
}

/// Course service facade over a repository implementation.
pub struct CourseService<R: CourseRepository> {
    repo: R,
}

impl<R: CourseRepository> CourseService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_courses(&self) -> RepoResult<Vec<Course>> {
        self.repo.list_courses()
    }

    pub fn get_course(&self, id: CourseId) -> RepoResult<Option<Course>> {
        self.repo.get_course(id)
    }

    /// Admin: creates a course with a fresh id.
    pub fn create_course(&self, draft: CourseDraft) -> RepoResult<Course> {
        let course = self.repo.create_course(draft)?;
        info!(
            "event=course_created module=courses status=ok course_id={}",
            course.id
        );
        Ok(course)
    }

    /// Admin: applies a partial update. `None` when no course matches.
    pub fn update_course(&self, id: CourseId, patch: CoursePatch) -> RepoResult<Option<Course>> {
        let updated = self.repo.update_course(id, patch)?;
        if updated.is_some() {
            info!("event=course_updated module=courses status=ok course_id={id}");
        }
        Ok(updated)
    }

    /// Admin: deletes exactly one course. Enrollments are left untouched.
    pub fn delete_course(&self, id: CourseId) -> RepoResult<bool> {
        let removed = self.repo.delete_course(id)?;
        if removed {
            info!("event=course_deleted module=courses status=ok course_id={id}");
        }
        Ok(removed)
    }

    /// Enrolls the session in a course with status `Pending`.
    ///
    /// Returns `false` when an enrollment for the course already exists
    /// (idempotent no-op).
    pub fn enroll(&self, course_id: CourseId) -> RepoResult<bool> {
        let inserted = self.repo.enroll(course_id, now_epoch_ms())?;
        if inserted {
            info!("event=course_enrolled module=courses status=ok course_id={course_id}");
        }
        Ok(inserted)
    }

    /// Rewrites enrollment status in place; `false` when not enrolled.
    pub fn update_progress(
        &self,
        course_id: CourseId,
        status: EnrollmentStatus,
    ) -> RepoResult<bool> {
        self.repo.set_enrollment_status(course_id, status)
    }

    pub fn enrollments(&self) -> RepoResult<Vec<Enrollment>> {
        self.repo.list_enrollments()
    }

    pub fn get_enrollment(&self, course_id: CourseId) -> RepoResult<Option<Enrollment>> {
        self.repo.get_enrollment(course_id)
    }

    /// Enrollments joined with their course records.
    pub fn enrolled_courses(&self) -> RepoResult<Vec<EnrolledCourse>> {
        let mut joined = Vec::new();
        for enrollment in self.repo.list_enrollments()? {
            let course = self.repo.get_course(enrollment.course_id)?;
            joined.push(EnrolledCourse { enrollment, course });
        }
        Ok(joined)
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
