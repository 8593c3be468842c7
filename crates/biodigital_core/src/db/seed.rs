//! Mock catalog seeding for the Biobío region.
//!
//! # Responsibility
//! - Populate the read-only reference collections (health centers, courses,
//!   WiFi points, trámites) on a freshly migrated database.
//!
//! # Invariants
//! - Seeding is idempotent: a database that already carries reference rows
//!   is left untouched.
//! - Seed ids are fresh uuids; callers discover records through list APIs,
//!   never through hardcoded ids.

use crate::model::course::{Course, CourseDraft, CourseLevel, CourseModality};
use crate::model::telemedicine::HealthCenter;
use crate::model::tramite::Tramite;
use crate::model::wifi::{Coordinates, WifiPoint};
use crate::repo::course_repo::insert_course;
use crate::repo::telemedicine_repo::insert_health_center;
use crate::repo::tramite_repo::insert_tramite;
use crate::repo::wifi_repo::insert_wifi_point;
use crate::repo::RepoResult;
use log::info;
use rusqlite::Connection;
use uuid::Uuid;

/// Seeds the reference catalog unless it already holds data.
///
/// Returns `true` when rows were inserted, `false` when the call was an
/// idempotent no-op.
pub fn seed_catalog(conn: &Connection) -> RepoResult<bool> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM health_centers;", [], |row| {
        row.get(0)
    })?;
    if existing > 0 {
        return Ok(false);
    }

    for center in health_centers() {
        insert_health_center(conn, &center)?;
    }
    for course in courses() {
        insert_course(conn, &course)?;
    }
    for point in wifi_points() {
        insert_wifi_point(conn, &point)?;
    }
    for tramite in tramites() {
        insert_tramite(conn, &tramite)?;
    }

    info!("event=catalog_seed module=db status=ok");
    Ok(true)
}

fn health_centers() -> Vec<HealthCenter> {
    vec![
        HealthCenter {
            id: Uuid::new_v4(),
            name: "Hospital de Concepción".to_string(),
            address: "Av. Roosevelt 1550, Concepción".to_string(),
            phone: "+56 41 2123456".to_string(),
            specialties: strings(&["Medicina General", "Pediatría", "Cardiología"]),
        },
        HealthCenter {
            id: Uuid::new_v4(),
            name: "CESFAM Talcahuano".to_string(),
            address: "Calle Principal 100, Talcahuano".to_string(),
            phone: "+56 41 2654321".to_string(),
            specialties: strings(&["Medicina General", "Enfermería"]),
        },
    ]
}

fn courses() -> Vec<Course> {
    vec![
        Course::from_draft(CourseDraft {
            title: "Introducción a la Informática".to_string(),
            description: "Aprende los conceptos básicos de computación".to_string(),
            level: CourseLevel::Basico,
            modality: CourseModality::Online,
            duration: "4 semanas".to_string(),
            objectives: strings(&[
                "Conocer el sistema operativo",
                "Navegar por Internet",
                "Usar correo electrónico",
            ]),
            requirements: "Ninguno".to_string(),
        }),
        Course::from_draft(CourseDraft {
            title: "Trámites Digitales".to_string(),
            description: "Cómo realizar trámites en línea de forma segura".to_string(),
            level: CourseLevel::Basico,
            modality: CourseModality::Online,
            duration: "2 semanas".to_string(),
            objectives: strings(&[
                "Identificar trámites digitales",
                "Usar clave única",
                "Navegar sitios gubernamentales",
            ]),
            requirements: "Conocimientos básicos de informática".to_string(),
        }),
    ]
}

fn wifi_points() -> Vec<WifiPoint> {
    vec![
        WifiPoint {
            id: Uuid::new_v4(),
            name: "Plaza Independencia".to_string(),
            address: "Plaza Independencia, Concepción".to_string(),
            kind: "WiFi Público".to_string(),
            schedule: "24 horas".to_string(),
            coordinates: Coordinates {
                latitude: -36.8201,
                longitude: -73.0444,
            },
        },
        WifiPoint {
            id: Uuid::new_v4(),
            name: "Biblioteca Municipal".to_string(),
            address: "Barros Arana 328, Concepción".to_string(),
            kind: "WiFi Público".to_string(),
            schedule: "Lun-Vie: 9:00-18:00".to_string(),
            coordinates: Coordinates {
                latitude: -36.8270,
                longitude: -73.0490,
            },
        },
    ]
}

fn tramites() -> Vec<Tramite> {
    vec![
        Tramite {
            id: Uuid::new_v4(),
            category: "Permisos de Circulación".to_string(),
            title: "Permiso de Circulación".to_string(),
            description: "Renovación anual del permiso de circulación de vehículos".to_string(),
            requirements: strings(&[
                "Revisión técnica al día",
                "Seguro obligatorio vigente",
                "Cédula de identidad",
            ]),
            documents: strings(&[
                "Certificado de revisión técnica",
                "Certificado de seguro",
            ]),
            cost: "$50.000 - $200.000".to_string(),
            estimated_time: "30 minutos".to_string(),
            digital_link: Some("https://www.ejemplo.cl/tramites".to_string()),
        },
        Tramite {
            id: Uuid::new_v4(),
            category: "Certificados".to_string(),
            title: "Certificado de Residencia".to_string(),
            description: "Certificado que acredita domicilio en la comuna".to_string(),
            requirements: strings(&["Cédula de identidad", "Comprobante de domicilio"]),
            documents: strings(&["Cédula de identidad", "Cuenta de servicios"]),
            cost: "Gratuito".to_string(),
            estimated_time: "15 minutos".to_string(),
            digital_link: None,
        },
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
