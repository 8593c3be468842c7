//! Session identity model.
//!
//! # Invariants
//! - At most one `Identity` is live per session store.
//! - `role` is derived once at login and never mutated afterwards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a logged-in identity.
pub type UserId = Uuid;

/// Authorization role attached to a session identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular citizen account.
    User,
    /// Course-administration account.
    Admin,
}

impl Role {
    /// Returns whether this role grants admin capabilities.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// The currently authenticated identity.
///
/// Created on successful login, destroyed on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Fresh uuid assigned at login time.
    pub id: UserId,
    /// Login email exactly as entered.
    pub email: String,
    /// Local part of the email (text before the first `@`).
    pub display_name: String,
    pub role: Role,
}
