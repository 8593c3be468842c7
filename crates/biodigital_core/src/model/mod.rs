//! Domain model for the Biobío Digital catalog and session.
//!
//! # Responsibility
//! - Define the canonical records held by the session and catalog stores.
//! - Keep persisted enum encodings stable across schema versions.
//!
//! # Invariants
//! - Every record is identified by a stable uuid assigned at creation.
//! - Reference records (health centers, WiFi points, trámites) are immutable
//!   after seeding; only courses accept admin mutations.

pub mod course;
pub mod identity;
pub mod telemedicine;
pub mod tramite;
pub mod wifi;
