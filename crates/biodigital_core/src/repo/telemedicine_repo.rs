//! Telemedicine repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Serve the seeded health-center reference collection.
//! - Append and list booked appointments.
//!
//! # Invariants
//! - Appointments are append-only; no update or delete paths exist.
//! - No slot-conflict detection: identical bookings yield distinct rows.

use crate::model::telemedicine::{
    Appointment, AppointmentDraft, AppointmentId, HealthCenter, HealthCenterId,
};
use crate::repo::{
    ensure_connection_ready, parse_string_list, parse_uuid_column, string_list_to_db, RepoResult,
};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

/// Repository interface for telemedicine data access.
pub trait TelemedicineRepository {
    fn list_health_centers(&self) -> RepoResult<Vec<HealthCenter>>;
    fn get_health_center(&self, id: HealthCenterId) -> RepoResult<Option<HealthCenter>>;
    /// Appends an appointment with a fresh id and returns it.
    fn create_appointment(&self, draft: AppointmentDraft) -> RepoResult<Appointment>;
    fn list_appointments(&self) -> RepoResult<Vec<Appointment>>;
}

/// SQLite-backed telemedicine repository.
pub struct SqliteTelemedicineRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTelemedicineRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &["health_centers", "appointments"])?;
        Ok(Self { conn })
    }
}

impl TelemedicineRepository for SqliteTelemedicineRepository<'_> {
    fn list_health_centers(&self) -> RepoResult<Vec<HealthCenter>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, address, phone, specialties
             FROM health_centers
             ORDER BY name ASC, id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut centers = Vec::new();
        while let Some(row) = rows.next()? {
            centers.push(parse_center_row(row)?);
        }
        Ok(centers)
    }

    fn get_health_center(&self, id: HealthCenterId) -> RepoResult<Option<HealthCenter>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, address, phone, specialties
             FROM health_centers
             WHERE id = ?1;",
        )?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_center_row(row)?));
        }
        Ok(None)
    }

    fn create_appointment(&self, draft: AppointmentDraft) -> RepoResult<Appointment> {
        let appointment = Appointment {
            id: Uuid::new_v4(),
            center_name: draft.center_name,
            date: draft.date,
            time: draft.time,
            specialty: draft.specialty,
            virtual_link: draft.virtual_link,
        };

        self.conn.execute(
            "INSERT INTO appointments (id, center_name, date, time, specialty, virtual_link)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                appointment.id.to_string(),
                appointment.center_name.as_str(),
                appointment.date.as_str(),
                appointment.time.as_str(),
                appointment.specialty.as_str(),
                appointment.virtual_link.as_str(),
            ],
        )?;

        Ok(appointment)
    }

    fn list_appointments(&self) -> RepoResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, center_name, date, time, specialty, virtual_link
             FROM appointments
             ORDER BY created_at ASC, id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut appointments = Vec::new();
        while let Some(row) = rows.next()? {
            appointments.push(parse_appointment_row(row)?);
        }
        Ok(appointments)
    }
}

/// Inserts a health-center row. Only used by catalog seeding.
pub(crate) fn insert_health_center(conn: &Connection, center: &HealthCenter) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO health_centers (id, name, address, phone, specialties)
         VALUES (?1, ?2, ?3, ?4, ?5);",
        params![
            center.id.to_string(),
            center.name.as_str(),
            center.address.as_str(),
            center.phone.as_str(),
            string_list_to_db(&center.specialties),
        ],
    )?;
    Ok(())
}

fn parse_center_row(row: &Row<'_>) -> RepoResult<HealthCenter> {
    let id_text: String = row.get("id")?;
    let specialties_text: String = row.get("specialties")?;

    Ok(HealthCenter {
        id: parse_uuid_column("health_centers.id", &id_text)?,
        name: row.get("name")?,
        address: row.get("address")?,
        phone: row.get("phone")?,
        specialties: parse_string_list("health_centers.specialties", &specialties_text)?,
    })
}

fn parse_appointment_row(row: &Row<'_>) -> RepoResult<Appointment> {
    let id_text: String = row.get("id")?;

    Ok(Appointment {
        id: parse_uuid_column("appointments.id", &id_text)?,
        center_name: row.get("center_name")?,
        date: row.get("date")?,
        time: row.get("time")?,
        specialty: row.get("specialty")?,
        virtual_link: row.get("virtual_link")?,
    })
}
