//! Core domain logic for the Biobío Digital citizen-services app.
//! This crate is the single source of truth for session and catalog state.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::course::{
    Course, CourseDraft, CourseId, CourseLevel, CourseModality, CoursePatch, Enrollment,
    EnrollmentStatus,
};
pub use model::identity::{Identity, Role, UserId};
pub use model::telemedicine::{
    Appointment, AppointmentDraft, AppointmentId, HealthCenter, HealthCenterId,
};
pub use model::tramite::{ScheduledTramite, ScheduledTramiteId, Tramite, TramiteId};
pub use model::wifi::{Coordinates, WifiPoint, WifiPointId};
pub use repo::course_repo::{CourseRepository, SqliteCourseRepository};
pub use repo::telemedicine_repo::{SqliteTelemedicineRepository, TelemedicineRepository};
pub use repo::tramite_repo::{SqliteTramiteRepository, TramiteRepository};
pub use repo::wifi_repo::{SqliteWifiRepository, WifiRepository};
pub use repo::{RepoError, RepoResult};
pub use service::course_service::{CourseService, EnrolledCourse};
pub use service::session_service::{AuthError, SessionService};
pub use service::telemedicine_service::{
    BookingRequest, TelemedicineService, VIRTUAL_CONSULTATION_LINK,
};
pub use service::tramite_service::TramiteService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
