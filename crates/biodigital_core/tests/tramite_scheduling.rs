use biodigital_core::db::{open_db_in_memory, seed_catalog};
use biodigital_core::{SqliteTramiteRepository, TramiteService};

#[test]
fn seeded_tramites_expose_digital_availability() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn).unwrap();
    let repo = SqliteTramiteRepository::try_new(&conn).unwrap();
    let service = TramiteService::new(repo);

    let tramites = service.list_tramites().unwrap();
    assert_eq!(tramites.len(), 2);

    let residencia = tramites
        .iter()
        .find(|tramite| tramite.title == "Certificado de Residencia")
        .unwrap();
    assert!(residencia.digital_link.is_none());
    assert_eq!(residencia.cost, "Gratuito");

    let circulacion = tramites
        .iter()
        .find(|tramite| tramite.title == "Permiso de Circulación")
        .unwrap();
    assert_eq!(
        circulacion.digital_link.as_deref(),
        Some("https://www.ejemplo.cl/tramites")
    );
    assert_eq!(circulacion.requirements.len(), 3);
}

#[test]
fn categories_are_distinct_and_sorted() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn).unwrap();
    let repo = SqliteTramiteRepository::try_new(&conn).unwrap();
    let service = TramiteService::new(repo);

    let categories = service.categories().unwrap();
    assert_eq!(
        categories,
        vec![
            "Certificados".to_string(),
            "Permisos de Circulación".to_string()
        ]
    );
}

#[test]
fn scheduling_copies_the_record_and_assigns_a_fresh_id() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn).unwrap();
    let repo = SqliteTramiteRepository::try_new(&conn).unwrap();
    let service = TramiteService::new(repo);

    let tramite = service.list_tramites().unwrap().remove(0);
    let scheduled = service.schedule(&tramite, "2025-11-20", "11:00").unwrap();

    assert_ne!(scheduled.id, tramite.id);
    assert_eq!(scheduled.tramite, tramite);
    assert_eq!(scheduled.date, "2025-11-20");
    assert_eq!(scheduled.time, "11:00");

    let listed = service.scheduled().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], scheduled);
}

#[test]
fn the_same_tramite_can_be_scheduled_repeatedly() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn).unwrap();
    let repo = SqliteTramiteRepository::try_new(&conn).unwrap();
    let service = TramiteService::new(repo);

    let tramite = service.list_tramites().unwrap().remove(0);
    let first = service.schedule(&tramite, "2025-11-20", "11:00").unwrap();
    let second = service.schedule(&tramite, "2025-11-20", "11:00").unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(service.scheduled().unwrap().len(), 2);
}
