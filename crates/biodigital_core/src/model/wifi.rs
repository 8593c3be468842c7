//! Public WiFi point reference data.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type WifiPointId = Uuid;

/// Geographic position of a WiFi point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Free public WiFi access point. Immutable after seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiPoint {
    pub id: WifiPointId,
    pub name: String,
    pub address: String,
    /// Access-point category label, e.g. "WiFi Público".
    pub kind: String,
    /// Availability schedule as displayed, e.g. "24 horas".
    pub schedule: String,
    pub coordinates: Coordinates,
}
