//! Session store: the single authenticated identity and its lifecycle.
//!
//! # Responsibility
//! - Own the live `Identity` (at most one per store).
//! - Apply the mock credential rule: any non-empty email/password pair
//!   authenticates; the role is derived from the email text.
//!
//! # Invariants
//! - `login` is the only way an identity becomes live; `logout` is the only
//!   way it is destroyed. Both are synchronous and never block.
//! - The credential rule is a placeholder seam: a real deployment replaces
//!   `login` internals with actual verification without touching callers.

use crate::model::identity::{Identity, Role};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Authentication failure raised by the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Email or password was empty.
    InvalidCredentials,
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid credentials"),
        }
    }
}

impl Error for AuthError {}

/// Owned session store. Constructed once at application start and handed to
/// consumers by reference; never an ambient singleton.
#[derive(Debug, Default)]
pub struct SessionService {
    current: Option<Identity>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticates the given credentials and installs the live identity.
    ///
    /// # Contract
    /// - Fails with `InvalidCredentials` when either field is empty.
    /// - Otherwise always succeeds; a previous identity is replaced.
    /// - `role` is `Admin` iff the email contains `"admin"` (case-sensitive).
    /// - `display_name` is the local part of the email.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Identity, AuthError> {
        if email.is_empty() || password.is_empty() {
            warn!("event=login module=session status=error error_code=invalid_credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let identity = Identity {
            id: Uuid::new_v4(),
            email: email.to_string(),
            display_name: derive_display_name(email),
            role: derive_role(email),
        };
        info!(
            "event=login module=session status=ok role={}",
            match identity.role {
                Role::Admin => "admin",
                Role::User => "user",
            }
        );
        self.current = Some(identity.clone());
        Ok(identity)
    }

    /// Clears the live identity. Idempotent.
    pub fn logout(&mut self) {
        if self.current.take().is_some() {
            info!("event=logout module=session status=ok");
        }
    }

    /// Current identity snapshot, if any.
    pub fn current_user(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|identity| identity.role.is_admin())
    }
}

/// Mock role rule: substring match, deliberately case-sensitive to match
/// observed behavior.
fn derive_role(email: &str) -> Role {
    if email.contains("admin") {
        Role::Admin
    } else {
        Role::User
    }
}

/// Local part of the email; the full input when no `@` is present.
fn derive_display_name(email: &str) -> String {
    email
        .split('@')
        .next()
        .unwrap_or(email)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{derive_display_name, derive_role};
    use crate::model::identity::Role;

    #[test]
    fn role_matches_admin_substring_anywhere() {
        assert_eq!(derive_role("admin@biobio.cl"), Role::Admin);
        assert_eq!(derive_role("superadmin@biobio.cl"), Role::Admin);
        assert_eq!(derive_role("vecina@biobio.cl"), Role::User);
    }

    #[test]
    fn role_rule_is_case_sensitive() {
        assert_eq!(derive_role("Admin@biobio.cl"), Role::User);
    }

    #[test]
    fn display_name_is_the_local_part() {
        assert_eq!(derive_display_name("maria@biobio.cl"), "maria");
        assert_eq!(derive_display_name("sin-arroba"), "sin-arroba");
        assert_eq!(derive_display_name("a@b@c"), "a");
    }
}
