//! Municipal procedure (trámite) models.
//!
//! # Invariants
//! - Trámite reference records are immutable after seeding.
//! - A scheduled trámite is a full copy of the source record plus a slot;
//!   scheduling the same trámite multiple times is permitted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type TramiteId = Uuid;
pub type ScheduledTramiteId = Uuid;

/// Municipal administrative procedure a citizen can complete digitally or
/// schedule in person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tramite {
    pub id: TramiteId,
    /// Grouping label, e.g. "Certificados".
    pub category: String,
    pub title: String,
    pub description: String,
    /// Ordered prerequisites the citizen must satisfy.
    pub requirements: Vec<String>,
    /// Ordered documents the citizen must bring.
    pub documents: Vec<String>,
    /// Cost label as displayed, e.g. "Gratuito".
    pub cost: String,
    /// Expected handling time label, e.g. "15 minutos".
    pub estimated_time: String,
    /// Online completion URL; `None` when in-person only.
    pub digital_link: Option<String>,
}

/// An in-person slot reserved for a trámite.
///
/// Carries a full copy of the source record so later catalog changes do not
/// rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTramite {
    /// Fresh id of the reservation itself.
    pub id: ScheduledTramiteId,
    /// Copy of the trámite as it looked at scheduling time.
    pub tramite: Tramite,
    pub date: String,
    pub time: String,
}
