//! FFI use-case API for the mobile-shell-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the presentation shell.
//! - Keep error semantics simple for UI integration: envelopes, never
//!   panics across the FFI boundary.
//!
//! # Invariants
//! - The shell owns rendering and form validation; this layer only relays
//!   store capabilities.
//! - One process-wide session and one process-wide database path.

use biodigital_core::db::{open_db, seed_catalog};
use biodigital_core::repo::course_repo::{parse_level, parse_modality, parse_status};
use biodigital_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BookingRequest, Course, CourseDraft, CoursePatch, CourseService, Role, SessionService,
    SqliteCourseRepository, SqliteTelemedicineRepository, SqliteTramiteRepository,
    SqliteWifiRepository, TelemedicineService, TramiteService, WifiRepository,
};
use log::error;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

const APP_DB_FILE_NAME: &str = "biodigital_app.sqlite3";
static APP_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static SESSION: OnceLock<Mutex<SessionService>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking; never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`; reconfiguration attempts
///   return an error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Identity snapshot handed to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub display_name: String,
    /// `"admin"` or `"user"`.
    pub role: String,
    pub is_admin: bool,
}

/// Envelope for session mutations and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    pub ok: bool,
    pub user: Option<SessionUser>,
    pub message: String,
}

/// Generic action envelope for catalog mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Id of the touched record, when one exists.
    pub id: Option<String>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Logs in with the mock credential rule (any non-empty pair).
#[flutter_rust_bridge::frb(sync)]
pub fn login(email: String, password: String) -> SessionResponse {
    with_session(|session| match session.login(&email, &password) {
        Ok(identity) => SessionResponse {
            ok: true,
            user: Some(to_session_user(
                &identity.id.to_string(),
                &identity.email,
                &identity.display_name,
                identity.role,
            )),
            message: "Sesión iniciada.".to_string(),
        },
        Err(err) => SessionResponse {
            ok: false,
            user: None,
            message: format!("login failed: {err}"),
        },
    })
}

/// Clears the live session. Idempotent.
#[flutter_rust_bridge::frb(sync)]
pub fn logout() -> SessionResponse {
    with_session(|session| {
        session.logout();
        SessionResponse {
            ok: true,
            user: None,
            message: "Sesión cerrada.".to_string(),
        }
    })
}

/// Returns the live session snapshot, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn current_session() -> SessionResponse {
    with_session(|session| match session.current_user() {
        Some(identity) => SessionResponse {
            ok: true,
            user: Some(to_session_user(
                &identity.id.to_string(),
                &identity.email,
                &identity.display_name,
                identity.role,
            )),
            message: String::new(),
        },
        None => SessionResponse {
            ok: true,
            user: None,
            message: "Sin sesión activa.".to_string(),
        },
    })
}

/// Health center item for list display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCenterItem {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub specialties: Vec<String>,
}

/// List envelope for health centers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCenterListResponse {
    pub ok: bool,
    /// Empty on failure; `message` explains why.
    pub items: Vec<HealthCenterItem>,
    pub message: String,
}

/// Lists the seeded health centers.
#[flutter_rust_bridge::frb(sync)]
pub fn list_health_centers() -> HealthCenterListResponse {
    let result = with_connection(|conn| {
        let repo = SqliteTelemedicineRepository::try_new(conn).map_err(|err| err.to_string())?;
        let service = TelemedicineService::new(repo);
        let centers = service
            .list_health_centers()
            .map_err(|err| err.to_string())?;
        Ok(centers
            .into_iter()
            .map(|center| HealthCenterItem {
                id: center.id.to_string(),
                name: center.name,
                address: center.address,
                phone: center.phone,
                specialties: center.specialties,
            })
            .collect())
    });
    let (ok, items, message) = list_envelope("list_health_centers", result);
    HealthCenterListResponse { ok, items, message }
}

/// Books a telemedicine appointment.
#[flutter_rust_bridge::frb(sync)]
pub fn book_appointment(
    center_name: String,
    date: String,
    time: String,
    specialty: String,
) -> ActionResponse {
    let result = with_connection(|conn| {
        let repo = SqliteTelemedicineRepository::try_new(conn).map_err(|err| err.to_string())?;
        let service = TelemedicineService::new(repo);
        service
            .book_appointment(BookingRequest {
                center_name,
                date,
                time,
                specialty,
            })
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(appointment) => {
            ActionResponse::success("Cita agendada.", Some(appointment.id.to_string()))
        }
        Err(err) => ActionResponse::failure(format!("book_appointment failed: {err}")),
    }
}

/// Course item for list display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// `"basico" | "intermedio" | "avanzado"`.
    pub level: String,
    /// `"online" | "presencial" | "hibrido"`.
    pub modality: String,
    pub duration: String,
    pub objectives: Vec<String>,
    pub requirements: String,
    /// Enrollment status when the session is enrolled.
    pub enrollment_status: Option<String>,
}

/// List envelope for courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseListResponse {
    pub ok: bool,
    /// Empty on failure; `message` explains why.
    pub items: Vec<CourseItem>,
    pub message: String,
}

/// Lists courses joined with the session's enrollment status.
#[flutter_rust_bridge::frb(sync)]
pub fn list_courses() -> CourseListResponse {
    let result = with_connection(|conn| {
        let repo = SqliteCourseRepository::try_new(conn).map_err(|err| err.to_string())?;
        let service = CourseService::new(repo);
        let courses = service.list_courses().map_err(|err| err.to_string())?;
        let mut items = Vec::with_capacity(courses.len());
        for course in courses {
            let enrollment_status = service
                .get_enrollment(course.id)
                .map_err(|err| err.to_string())?
                .map(|enrollment| status_label(enrollment.status).to_string());
            items.push(to_course_item(course, enrollment_status));
        }
        Ok(items)
    });
    let (ok, items, message) = list_envelope("list_courses", result);
    CourseListResponse { ok, items, message }
}

/// Enrolls the session in a course. Idempotent per course id.
#[flutter_rust_bridge::frb(sync)]
pub fn enroll_in_course(course_id: String) -> ActionResponse {
    let Ok(id) = Uuid::parse_str(&course_id) else {
        return ActionResponse::failure(format!("invalid course id `{course_id}`"));
    };
    let result = with_connection(|conn| {
        let repo = SqliteCourseRepository::try_new(conn).map_err(|err| err.to_string())?;
        CourseService::new(repo).enroll(id).map_err(|err| err.to_string())
    });
    match result {
        Ok(true) => ActionResponse::success("Inscripción exitosa.", Some(course_id)),
        Ok(false) => ActionResponse::success("Ya inscrito en este curso.", Some(course_id)),
        Err(err) => ActionResponse::failure(format!("enroll_in_course failed: {err}")),
    }
}

/// Rewrites the enrollment status for a course.
///
/// `status` is one of `pending | in_progress | completed`.
#[flutter_rust_bridge::frb(sync)]
pub fn update_course_progress(course_id: String, status: String) -> ActionResponse {
    let Ok(id) = Uuid::parse_str(&course_id) else {
        return ActionResponse::failure(format!("invalid course id `{course_id}`"));
    };
    let parsed = match parse_status(&status) {
        Ok(parsed) => parsed,
        Err(err) => return ActionResponse::failure(format!("invalid status: {err}")),
    };
    let result = with_connection(|conn| {
        let repo = SqliteCourseRepository::try_new(conn).map_err(|err| err.to_string())?;
        CourseService::new(repo)
            .update_progress(id, parsed)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(true) => ActionResponse::success("Progreso actualizado.", Some(course_id)),
        Ok(false) => ActionResponse::success("Sin inscripción para este curso.", Some(course_id)),
        Err(err) => ActionResponse::failure(format!("update_course_progress failed: {err}")),
    }
}

/// Admin: creates a course.
#[flutter_rust_bridge::frb(sync)]
pub fn admin_create_course(
    title: String,
    description: String,
    level: String,
    modality: String,
    duration: String,
    objectives: Vec<String>,
    requirements: String,
) -> ActionResponse {
    let level = match parse_level(&level) {
        Ok(level) => level,
        Err(err) => return ActionResponse::failure(format!("invalid level: {err}")),
    };
    let modality = match parse_modality(&modality) {
        Ok(modality) => modality,
        Err(err) => return ActionResponse::failure(format!("invalid modality: {err}")),
    };
    let result = with_connection(|conn| {
        let repo = SqliteCourseRepository::try_new(conn).map_err(|err| err.to_string())?;
        CourseService::new(repo)
            .create_course(CourseDraft {
                title,
                description,
                level,
                modality,
                duration,
                objectives,
                requirements,
            })
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(course) => ActionResponse::success("Curso creado.", Some(course.id.to_string())),
        Err(err) => ActionResponse::failure(format!("admin_create_course failed: {err}")),
    }
}

/// Admin: applies a partial course update. Unset fields are kept.
#[flutter_rust_bridge::frb(sync)]
#[allow(clippy::too_many_arguments)]
pub fn admin_update_course(
    course_id: String,
    title: Option<String>,
    description: Option<String>,
    level: Option<String>,
    modality: Option<String>,
    duration: Option<String>,
    objectives: Option<Vec<String>>,
    requirements: Option<String>,
) -> ActionResponse {
    let Ok(id) = Uuid::parse_str(&course_id) else {
        return ActionResponse::failure(format!("invalid course id `{course_id}`"));
    };
    let level = match level {
        Some(value) => match parse_level(&value) {
            Ok(parsed) => Some(parsed),
            Err(err) => return ActionResponse::failure(format!("invalid level: {err}")),
        },
        None => None,
    };
    let modality = match modality {
        Some(value) => match parse_modality(&value) {
            Ok(parsed) => Some(parsed),
            Err(err) => return ActionResponse::failure(format!("invalid modality: {err}")),
        },
        None => None,
    };
    let patch = CoursePatch {
        title,
        description,
        level,
        modality,
        duration,
        objectives,
        requirements,
    };
    let result = with_connection(|conn| {
        let repo = SqliteCourseRepository::try_new(conn).map_err(|err| err.to_string())?;
        CourseService::new(repo)
            .update_course(id, patch)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(Some(_)) => ActionResponse::success("Curso actualizado.", Some(course_id)),
        Ok(None) => ActionResponse::success("Curso no encontrado.", Some(course_id)),
        Err(err) => ActionResponse::failure(format!("admin_update_course failed: {err}")),
    }
}

/// Admin: deletes a course. Enrollments are deliberately left in place.
#[flutter_rust_bridge::frb(sync)]
pub fn admin_delete_course(course_id: String) -> ActionResponse {
    let Ok(id) = Uuid::parse_str(&course_id) else {
        return ActionResponse::failure(format!("invalid course id `{course_id}`"));
    };
    let result = with_connection(|conn| {
        let repo = SqliteCourseRepository::try_new(conn).map_err(|err| err.to_string())?;
        CourseService::new(repo)
            .delete_course(id)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(true) => ActionResponse::success("Curso eliminado.", Some(course_id)),
        Ok(false) => ActionResponse::success("Curso no encontrado.", Some(course_id)),
        Err(err) => ActionResponse::failure(format!("admin_delete_course failed: {err}")),
    }
}

/// WiFi point item for list/map display.
#[derive(Debug, Clone, PartialEq)]
pub struct WifiPointItem {
    pub id: String,
    pub name: String,
    pub address: String,
    pub kind: String,
    pub schedule: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// List envelope for WiFi points.
#[derive(Debug, Clone, PartialEq)]
pub struct WifiPointListResponse {
    pub ok: bool,
    /// Empty on failure; `message` explains why.
    pub items: Vec<WifiPointItem>,
    pub message: String,
}

/// Lists the seeded public WiFi points.
#[flutter_rust_bridge::frb(sync)]
pub fn list_wifi_points() -> WifiPointListResponse {
    let result = with_connection(|conn| {
        let repo = SqliteWifiRepository::try_new(conn).map_err(|err| err.to_string())?;
        let points = repo.list_wifi_points().map_err(|err| err.to_string())?;
        Ok(points
            .into_iter()
            .map(|point| WifiPointItem {
                id: point.id.to_string(),
                name: point.name,
                address: point.address,
                kind: point.kind,
                schedule: point.schedule,
                latitude: point.coordinates.latitude,
                longitude: point.coordinates.longitude,
            })
            .collect())
    });
    let (ok, items, message) = list_envelope("list_wifi_points", result);
    WifiPointListResponse { ok, items, message }
}

/// Trámite item for list/detail display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TramiteItem {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub documents: Vec<String>,
    pub cost: String,
    pub estimated_time: String,
    pub digital_link: Option<String>,
}

/// List envelope for trámites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TramiteListResponse {
    pub ok: bool,
    /// Empty on failure; `message` explains why.
    pub items: Vec<TramiteItem>,
    pub message: String,
}

/// Lists the seeded trámites.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tramites() -> TramiteListResponse {
    let result = with_connection(|conn| {
        let repo = SqliteTramiteRepository::try_new(conn).map_err(|err| err.to_string())?;
        let tramites = TramiteService::new(repo)
            .list_tramites()
            .map_err(|err| err.to_string())?;
        Ok(tramites
            .into_iter()
            .map(|tramite| TramiteItem {
                id: tramite.id.to_string(),
                category: tramite.category,
                title: tramite.title,
                description: tramite.description,
                requirements: tramite.requirements,
                documents: tramite.documents,
                cost: tramite.cost,
                estimated_time: tramite.estimated_time,
                digital_link: tramite.digital_link,
            })
            .collect())
    });
    let (ok, items, message) = list_envelope("list_tramites", result);
    TramiteListResponse { ok, items, message }
}

/// Reserves an in-person slot for a trámite.
#[flutter_rust_bridge::frb(sync)]
pub fn schedule_tramite(tramite_id: String, date: String, time: String) -> ActionResponse {
    let Ok(id) = Uuid::parse_str(&tramite_id) else {
        return ActionResponse::failure(format!("invalid tramite id `{tramite_id}`"));
    };
    let result = with_connection(|conn| {
        let repo = SqliteTramiteRepository::try_new(conn).map_err(|err| err.to_string())?;
        let service = TramiteService::new(repo);
        let Some(tramite) = service.get_tramite(id).map_err(|err| err.to_string())? else {
            return Err(format!("tramite not found: {tramite_id}"));
        };
        service
            .schedule(&tramite, &date, &time)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(scheduled) => ActionResponse::success("Hora agendada.", Some(scheduled.id.to_string())),
        Err(err) => ActionResponse::failure(format!("schedule_tramite failed: {err}")),
    }
}

fn resolve_db_path() -> PathBuf {
    APP_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("BIODIGITAL_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(APP_DB_FILE_NAME)
        })
        .clone()
}

/// Opens the process-wide store, seeding the catalog on first use.
fn with_connection<T>(f: impl FnOnce(&Connection) -> Result<T, String>) -> Result<T, String> {
    let conn = match open_db(resolve_db_path()) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=store_open module=ffi status=error error={err}");
            return Err(format!("store open failed: {err}"));
        }
    };
    seed_catalog(&conn).map_err(|err| format!("catalog seed failed: {err}"))?;
    f(&conn)
}

/// Folds a read result into list-envelope fields. Failures are logged and
/// reported through `message`, never flattened into an empty catalog.
fn list_envelope<T>(
    operation: &'static str,
    result: Result<Vec<T>, String>,
) -> (bool, Vec<T>, String) {
    match result {
        Ok(items) => (true, items, String::new()),
        Err(err) => {
            error!("event={operation} module=ffi status=error error={err}");
            (false, Vec::new(), format!("{operation} failed: {err}"))
        }
    }
}

fn with_session(f: impl FnOnce(&mut SessionService) -> SessionResponse) -> SessionResponse {
    let session = SESSION.get_or_init(|| Mutex::new(SessionService::new()));
    match session.lock() {
        Ok(mut guard) => f(&mut guard),
        Err(_) => SessionResponse {
            ok: false,
            user: None,
            message: "session store unavailable".to_string(),
        },
    }
}

fn to_session_user(id: &str, email: &str, display_name: &str, role: Role) -> SessionUser {
    SessionUser {
        id: id.to_string(),
        email: email.to_string(),
        display_name: display_name.to_string(),
        role: role_label(role).to_string(),
        is_admin: role.is_admin(),
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "admin",
        Role::User => "user",
    }
}

fn status_label(status: biodigital_core::EnrollmentStatus) -> &'static str {
    match status {
        biodigital_core::EnrollmentStatus::Pending => "pending",
        biodigital_core::EnrollmentStatus::InProgress => "in_progress",
        biodigital_core::EnrollmentStatus::Completed => "completed",
    }
}

fn to_course_item(course: Course, enrollment_status: Option<String>) -> CourseItem {
    CourseItem {
        id: course.id.to_string(),
        title: course.title,
        description: course.description,
        level: level_label(course.level).to_string(),
        modality: modality_label(course.modality).to_string(),
        duration: course.duration,
        objectives: course.objectives,
        requirements: course.requirements,
        enrollment_status,
    }
}

fn level_label(level: biodigital_core::CourseLevel) -> &'static str {
    match level {
        biodigital_core::CourseLevel::Basico => "basico",
        biodigital_core::CourseLevel::Intermedio => "intermedio",
        biodigital_core::CourseLevel::Avanzado => "avanzado",
    }
}

fn modality_label(modality: biodigital_core::CourseModality) -> &'static str {
    match modality {
        biodigital_core::CourseModality::Online => "online",
        biodigital_core::CourseModality::Presencial => "presencial",
        biodigital_core::CourseModality::Hibrido => "hibrido",
    }
}
