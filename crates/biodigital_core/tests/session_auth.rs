use biodigital_core::{AuthError, Role, SessionService};

#[test]
fn any_non_empty_credentials_log_in() {
    let mut session = SessionService::new();

    let identity = session.login("maria@biobio.cl", "whatever").unwrap();
    assert_eq!(identity.email, "maria@biobio.cl");
    assert_eq!(identity.display_name, "maria");
    assert_eq!(identity.role, Role::User);
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn admin_substring_grants_admin_role() {
    let mut session = SessionService::new();

    let identity = session.login("admin@municipio.cl", "x").unwrap();
    assert_eq!(identity.role, Role::Admin);
    assert!(session.is_admin());
}

#[test]
fn admin_match_is_case_sensitive() {
    let mut session = SessionService::new();

    let identity = session.login("Admin@municipio.cl", "x").unwrap();
    assert_eq!(identity.role, Role::User);
    assert!(!session.is_admin());
}

#[test]
fn empty_email_or_password_is_rejected() {
    let mut session = SessionService::new();

    assert_eq!(session.login("", "x"), Err(AuthError::InvalidCredentials));
    assert_eq!(session.login("x", ""), Err(AuthError::InvalidCredentials));
    assert!(!session.is_authenticated());
    assert!(session.current_user().is_none());
}

#[test]
fn logout_clears_identity_and_is_idempotent() {
    let mut session = SessionService::new();
    session.login("vecino@biobio.cl", "pw").unwrap();

    session.logout();
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());

    session.logout();
    assert!(session.current_user().is_none());
}

#[test]
fn login_replaces_the_previous_identity() {
    let mut session = SessionService::new();

    let first = session.login("uno@biobio.cl", "pw").unwrap();
    let second = session.login("admin.dos@biobio.cl", "pw").unwrap();

    assert_ne!(first.id, second.id);
    let current = session.current_user().unwrap();
    assert_eq!(current.email, "admin.dos@biobio.cl");
    assert_eq!(current.role, Role::Admin);
}

#[test]
fn display_name_falls_back_to_full_input_without_at_sign() {
    let mut session = SessionService::new();

    let identity = session.login("solo-nombre", "pw").unwrap();
    assert_eq!(identity.display_name, "solo-nombre");
}
