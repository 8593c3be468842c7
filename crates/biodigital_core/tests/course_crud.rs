use biodigital_core::db::{open_db_in_memory, seed_catalog};
use biodigital_core::{
    CourseDraft, CourseLevel, CourseModality, CoursePatch, CourseRepository, CourseService,
    EnrollmentStatus, SqliteCourseRepository,
};
use rusqlite::Connection;
use uuid::Uuid;

fn draft(title: &str) -> CourseDraft {
    CourseDraft {
        title: title.to_string(),
        description: "descripción".to_string(),
        level: CourseLevel::Intermedio,
        modality: CourseModality::Presencial,
        duration: "3 semanas".to_string(),
        objectives: vec!["objetivo uno".to_string(), "objetivo dos".to_string()],
        requirements: "Ninguno".to_string(),
    }
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();

    let created = repo.create_course(draft("Alfabetización Digital")).unwrap();
    let loaded = repo.get_course(created.id).unwrap().unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.level, CourseLevel::Intermedio);
    assert_eq!(loaded.objectives.len(), 2);
}

#[test]
fn update_patch_merges_only_set_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let created = repo.create_course(draft("Original")).unwrap();

    let updated = repo
        .update_course(
            created.id,
            CoursePatch {
                title: Some("Renombrado".to_string()),
                level: Some(CourseLevel::Avanzado),
                ..CoursePatch::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Renombrado");
    assert_eq!(updated.level, CourseLevel::Avanzado);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.modality, created.modality);

    let loaded = repo.get_course(created.id).unwrap().unwrap();
    assert_eq!(loaded, updated);
}

#[test]
fn update_of_missing_course_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    repo.create_course(draft("Presente")).unwrap();

    let result = repo
        .update_course(
            Uuid::new_v4(),
            CoursePatch {
                title: Some("Fantasma".to_string()),
                ..CoursePatch::default()
            },
        )
        .unwrap();

    assert!(result.is_none());
    let titles: Vec<String> = repo
        .list_courses()
        .unwrap()
        .into_iter()
        .map(|course| course.title)
        .collect();
    assert_eq!(titles, vec!["Presente".to_string()]);
}

#[test]
fn delete_removes_exactly_one_course() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let keep = repo.create_course(draft("Se queda")).unwrap();
    let remove = repo.create_course(draft("Se va")).unwrap();

    assert!(repo.delete_course(remove.id).unwrap());

    let remaining = repo.list_courses().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);

    // Deleting again is a no-op.
    assert!(!repo.delete_course(remove.id).unwrap());
}

#[test]
fn enroll_is_idempotent_per_course() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let course = repo.create_course(draft("Único")).unwrap();
    let service = CourseService::new(repo);

    assert!(service.enroll(course.id).unwrap());
    assert!(!service.enroll(course.id).unwrap());

    let enrollments = service.enrollments().unwrap();
    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0].course_id, course.id);
    assert_eq!(enrollments[0].status, EnrollmentStatus::Pending);
    assert!(enrollments[0].enrolled_at > 0);
}

#[test]
fn progress_update_on_non_enrolled_course_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let course = repo.create_course(draft("Sin inscripción")).unwrap();
    let service = CourseService::new(repo);

    assert!(!service
        .update_progress(course.id, EnrollmentStatus::Completed)
        .unwrap());
    assert!(service.enrollments().unwrap().is_empty());
}

#[test]
fn progress_transitions_are_free() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let course = repo.create_course(draft("Progreso")).unwrap();
    let service = CourseService::new(repo);
    service.enroll(course.id).unwrap();

    // Jump straight to completed, then back to pending.
    assert!(service
        .update_progress(course.id, EnrollmentStatus::Completed)
        .unwrap());
    assert!(service
        .update_progress(course.id, EnrollmentStatus::Pending)
        .unwrap());

    let enrollment = service.get_enrollment(course.id).unwrap().unwrap();
    assert_eq!(enrollment.status, EnrollmentStatus::Pending);
}

#[test]
fn course_delete_leaves_enrollment_dangling() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let course = repo.create_course(draft("Intro")).unwrap();
    let service = CourseService::new(repo);

    assert!(service.enroll(course.id).unwrap());
    assert!(service
        .update_progress(course.id, EnrollmentStatus::Completed)
        .unwrap());
    assert!(service.delete_course(course.id).unwrap());

    assert!(service.get_course(course.id).unwrap().is_none());

    let enrollments = service.enrollments().unwrap();
    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0].course_id, course.id);
    assert_eq!(enrollments[0].status, EnrollmentStatus::Completed);

    let joined = service.enrolled_courses().unwrap();
    assert_eq!(joined.len(), 1);
    assert!(joined[0].course.is_none());
}

#[test]
fn enrolled_courses_join_live_records() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn).unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let service = CourseService::new(repo);

    let course = service.list_courses().unwrap().remove(0);
    service.enroll(course.id).unwrap();

    let joined = service.enrolled_courses().unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].course.as_ref().unwrap().id, course.id);
    assert_eq!(joined[0].enrollment.course_id, course.id);
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteCourseRepository::try_new(&conn);
    match result {
        Err(biodigital_core::RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}
