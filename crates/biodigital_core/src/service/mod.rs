//! Core use-case services.
//!
//! # Responsibility
//! - Expose the session and catalog capability surfaces consumed by the
//!   presentation shell.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod course_service;
pub mod session_service;
pub mod telemedicine_service;
pub mod tramite_service;
