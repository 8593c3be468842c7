//! Telemedicine models: health centers and booked appointments.
//!
//! # Invariants
//! - Health centers are immutable reference data after seeding.
//! - Appointments are append-only; overlapping bookings are permitted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type HealthCenterId = Uuid;
pub type AppointmentId = Uuid;

/// Public health facility offering telemedicine slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCenter {
    pub id: HealthCenterId,
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Specialties offered, as displayed to the citizen.
    pub specialties: Vec<String>,
}

/// A booked telemedicine appointment.
///
/// Not scoped to a user id; the store tracks one session's bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    /// Display name of the center at booking time (denormalized copy).
    pub center_name: String,
    /// Calendar date label, e.g. "2025-11-18".
    pub date: String,
    /// Time slot label, e.g. "09:00".
    pub time: String,
    pub specialty: String,
    /// Join link for the virtual consultation.
    pub virtual_link: String,
}

/// Input shape for booking; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub center_name: String,
    pub date: String,
    pub time: String,
    pub specialty: String,
    pub virtual_link: String,
}
