//! Telemedicine use-case service: center lookups and appointment booking.
//!
//! # Invariants
//! - Booking never validates slot availability or specialty membership;
//!   form-level checks belong to the presentation boundary.
//! - Every booked appointment carries the virtual consultation link.

use crate::model::telemedicine::{Appointment, AppointmentDraft, HealthCenter, HealthCenterId};
use crate::repo::telemedicine_repo::TelemedicineRepository;
use crate::repo::RepoResult;
use log::info;

/// Join link handed out for every virtual consultation.
pub const VIRTUAL_CONSULTATION_LINK: &str = "https://meet.example.com/virtual-consultation";

/// Booking input as collected by the appointment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// Display name of the chosen center (denormalized into the record).
    pub center_name: String,
    pub date: String,
    pub time: String,
    pub specialty: String,
}

/// Telemedicine service facade over a repository implementation.
pub struct TelemedicineService<R: TelemedicineRepository> {
    repo: R,
}

impl<R: TelemedicineRepository> TelemedicineService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_health_centers(&self) -> RepoResult<Vec<HealthCenter>> {
        self.repo.list_health_centers()
    }

    pub fn get_health_center(&self, id: HealthCenterId) -> RepoResult<Option<HealthCenter>> {
        self.repo.get_health_center(id)
    }

    /// Books an appointment with a fresh id and the virtual link attached.
    ///
    /// # Contract
    /// - No conflict detection: identical requests create distinct records.
    pub fn book_appointment(&self, request: BookingRequest) -> RepoResult<Appointment> {
        let appointment = self.repo.create_appointment(AppointmentDraft {
            center_name: request.center_name,
            date: request.date,
            time: request.time,
            specialty: request.specialty,
            virtual_link: VIRTUAL_CONSULTATION_LINK.to_string(),
        })?;
        info!(
            "event=appointment_booked module=telemedicine status=ok appointment_id={}",
            appointment.id
        );
        Ok(appointment)
    }

    pub fn appointments(&self) -> RepoResult<Vec<Appointment>> {
        self.repo.list_appointments()
    }
}
