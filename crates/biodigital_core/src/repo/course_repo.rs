//! Course and enrollment repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide admin CRUD over the `courses` table.
//! - Own the per-course enrollment lifecycle (`enrollments` table).
//!
//! # Invariants
//! - At most one enrollment row exists per course id (`INSERT OR IGNORE`
//!   against the primary key).
//! - Deleting a course never touches enrollments; dangling `course_id`
//!   references are expected and surfaced by read paths, not repaired.

use crate::model::course::{
    Course, CourseDraft, CourseId, CourseLevel, CourseModality, CoursePatch, Enrollment,
    EnrollmentStatus,
};
use crate::repo::{
    ensure_connection_ready, parse_string_list, parse_uuid_column, string_list_to_db, RepoResult,
};
use rusqlite::{params, Connection, Row};

const COURSE_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    level,
    modality,
    duration,
    objectives,
    requirements
FROM courses";

/// Repository interface for course CRUD and enrollment operations.
pub trait CourseRepository {
    fn list_courses(&self) -> RepoResult<Vec<Course>>;
    fn get_course(&self, id: CourseId) -> RepoResult<Option<Course>>;
    /// Creates a course with a fresh id and returns it.
    fn create_course(&self, draft: CourseDraft) -> RepoResult<Course>;
    /// Applies a partial update. Returns the updated course, or `None` as a
    /// no-op when no course matches.
    fn update_course(&self, id: CourseId, patch: CoursePatch) -> RepoResult<Option<Course>>;
    /// Deletes exactly one course. Returns `false` as a no-op when no course
    /// matches.
    fn delete_course(&self, id: CourseId) -> RepoResult<bool>;
    fn list_enrollments(&self) -> RepoResult<Vec<Enrollment>>;
    fn get_enrollment(&self, course_id: CourseId) -> RepoResult<Option<Enrollment>>;
    /// Inserts a pending enrollment unless one already exists for the course.
    /// Returns `false` when the call was an idempotent no-op.
    fn enroll(&self, course_id: CourseId, enrolled_at: i64) -> RepoResult<bool>;
    /// Rewrites the enrollment status in place. Returns `false` as a no-op
    /// when the course has no enrollment.
    fn set_enrollment_status(
        &self,
        course_id: CourseId,
        status: EnrollmentStatus,
    ) -> RepoResult<bool>;
}

/// SQLite-backed course/enrollment repository.
pub struct SqliteCourseRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCourseRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &["courses", "enrollments"])?;
        Ok(Self { conn })
    }
}

impl CourseRepository for SqliteCourseRepository<'_> {
    fn list_courses(&self) -> RepoResult<Vec<Course>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COURSE_SELECT_SQL} ORDER BY created_at ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut courses = Vec::new();
        while let Some(row) = rows.next()? {
            courses.push(parse_course_row(row)?);
        }
        Ok(courses)
    }

    fn get_course(&self, id: CourseId) -> RepoResult<Option<Course>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COURSE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_course_row(row)?));
        }
        Ok(None)
    }

    fn create_course(&self, draft: CourseDraft) -> RepoResult<Course> {
        let course = Course::from_draft(draft);
        insert_course(self.conn, &course)?;
        Ok(course)
    }

    fn update_course(&self, id: CourseId, patch: CoursePatch) -> RepoResult<Option<Course>> {
        let Some(mut course) = self.get_course(id)? else {
            return Ok(None);
        };
        course.apply_patch(patch);

        self.conn.execute(
            "UPDATE courses
             SET
                title = ?2,
                description = ?3,
                level = ?4,
                modality = ?5,
                duration = ?6,
                objectives = ?7,
                requirements = ?8
             WHERE id = ?1;",
            params![
                course.id.to_string(),
                course.title.as_str(),
                course.description.as_str(),
                level_to_db(course.level),
                modality_to_db(course.modality),
                course.duration.as_str(),
                string_list_to_db(&course.objectives),
                course.requirements.as_str(),
            ],
        )?;

        Ok(Some(course))
    }

    fn delete_course(&self, id: CourseId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM courses WHERE id = ?1;", [id.to_string()])?;
        Ok(changed > 0)
    }

    fn list_enrollments(&self) -> RepoResult<Vec<Enrollment>> {
        let mut stmt = self.conn.prepare(
            "SELECT course_id, status, enrolled_at
             FROM enrollments
             ORDER BY enrolled_at ASC, course_id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut enrollments = Vec::new();
        while let Some(row) = rows.next()? {
            enrollments.push(parse_enrollment_row(row)?);
        }
        Ok(enrollments)
    }

    fn get_enrollment(&self, course_id: CourseId) -> RepoResult<Option<Enrollment>> {
        let mut stmt = self.conn.prepare(
            "SELECT course_id, status, enrolled_at
             FROM enrollments
             WHERE course_id = ?1;",
        )?;
        let mut rows = stmt.query([course_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_enrollment_row(row)?));
        }
        Ok(None)
    }

    fn enroll(&self, course_id: CourseId, enrolled_at: i64) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO enrollments (course_id, status, enrolled_at)
             VALUES (?1, ?2, ?3);",
            params![
                course_id.to_string(),
                status_to_db(EnrollmentStatus::Pending),
                enrolled_at,
            ],
        )?;
        Ok(changed > 0)
    }

    fn set_enrollment_status(
        &self,
        course_id: CourseId,
        status: EnrollmentStatus,
    ) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE enrollments SET status = ?2 WHERE course_id = ?1;",
            params![course_id.to_string(), status_to_db(status)],
        )?;
        Ok(changed > 0)
    }
}

/// Inserts a fully-formed course row. Also used by catalog seeding.
pub(crate) fn insert_course(conn: &Connection, course: &Course) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO courses (
            id,
            title,
            description,
            level,
            modality,
            duration,
            objectives,
            requirements
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
        params![
            course.id.to_string(),
            course.title.as_str(),
            course.description.as_str(),
            level_to_db(course.level),
            modality_to_db(course.modality),
            course.duration.as_str(),
            string_list_to_db(&course.objectives),
            course.requirements.as_str(),
        ],
    )?;
    Ok(())
}

fn parse_course_row(row: &Row<'_>) -> RepoResult<Course> {
    let id_text: String = row.get("id")?;
    let level_text: String = row.get("level")?;
    let modality_text: String = row.get("modality")?;
    let objectives_text: String = row.get("objectives")?;

    Ok(Course {
        id: parse_uuid_column("courses.id", &id_text)?,
        title: row.get("title")?,
        description: row.get("description")?,
        level: parse_level(&level_text)?,
        modality: parse_modality(&modality_text)?,
        duration: row.get("duration")?,
        objectives: parse_string_list("courses.objectives", &objectives_text)?,
        requirements: row.get("requirements")?,
    })
}

fn parse_enrollment_row(row: &Row<'_>) -> RepoResult<Enrollment> {
    let course_id_text: String = row.get("course_id")?;
    let status_text: String = row.get("status")?;

    Ok(Enrollment {
        course_id: parse_uuid_column("enrollments.course_id", &course_id_text)?,
        status: parse_status(&status_text)?,
        enrolled_at: row.get("enrolled_at")?,
    })
}

pub(crate) fn level_to_db(level: CourseLevel) -> &'static str {
    match level {
        CourseLevel::Basico => "basico",
        CourseLevel::Intermedio => "intermedio",
        CourseLevel::Avanzado => "avanzado",
    }
}

/// Parses a course level from its persisted text form.
///
/// Also used by the FFI layer to decode level arguments from the shell.
pub fn parse_level(value: &str) -> RepoResult<CourseLevel> {
    match value {
        "basico" => Ok(CourseLevel::Basico),
        "intermedio" => Ok(CourseLevel::Intermedio),
        "avanzado" => Ok(CourseLevel::Avanzado),
        other => Err(crate::repo::RepoError::InvalidData(format!(
            "invalid course level `{other}` in courses.level"
        ))),
    }
}

pub(crate) fn modality_to_db(modality: CourseModality) -> &'static str {
    match modality {
        CourseModality::Online => "online",
        CourseModality::Presencial => "presencial",
        CourseModality::Hibrido => "hibrido",
    }
}

/// Parses a course modality from its persisted text form.
///
/// Also used by the FFI layer to decode modality arguments from the shell.
pub fn parse_modality(value: &str) -> RepoResult<CourseModality> {
    match value {
        "online" => Ok(CourseModality::Online),
        "presencial" => Ok(CourseModality::Presencial),
        "hibrido" => Ok(CourseModality::Hibrido),
        other => Err(crate::repo::RepoError::InvalidData(format!(
            "invalid course modality `{other}` in courses.modality"
        ))),
    }
}

pub(crate) fn status_to_db(status: EnrollmentStatus) -> &'static str {
    match status {
        EnrollmentStatus::Pending => "pending",
        EnrollmentStatus::InProgress => "in_progress",
        EnrollmentStatus::Completed => "completed",
    }
}

/// Parses an enrollment status from its persisted text form.
///
/// Also used by the FFI layer to decode status arguments from the shell.
pub fn parse_status(value: &str) -> RepoResult<EnrollmentStatus> {
    match value {
        "pending" => Ok(EnrollmentStatus::Pending),
        "in_progress" => Ok(EnrollmentStatus::InProgress),
        "completed" => Ok(EnrollmentStatus::Completed),
        other => Err(crate::repo::RepoError::InvalidData(format!(
            "invalid enrollment status `{other}` in enrollments.status"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_status, status_to_db};
    use crate::model::course::EnrollmentStatus;

    #[test]
    fn status_codec_covers_all_variants() {
        for status in [
            EnrollmentStatus::Pending,
            EnrollmentStatus::InProgress,
            EnrollmentStatus::Completed,
        ] {
            assert_eq!(parse_status(status_to_db(status)).unwrap(), status);
        }
    }

    #[test]
    fn parse_status_rejects_unknown_value() {
        assert!(parse_status("done").is_err());
    }
}
