use biodigital_core::db::{open_db_in_memory, seed_catalog};
use biodigital_core::{SqliteWifiRepository, WifiRepository};
use rusqlite::Connection;

#[test]
fn seeding_populates_all_reference_collections() {
    let conn = open_db_in_memory().unwrap();

    assert!(seed_catalog(&conn).unwrap());

    assert_eq!(count(&conn, "health_centers"), 2);
    assert_eq!(count(&conn, "courses"), 2);
    assert_eq!(count(&conn, "wifi_points"), 2);
    assert_eq!(count(&conn, "tramites"), 2);

    // User-generated collections start empty.
    assert_eq!(count(&conn, "appointments"), 0);
    assert_eq!(count(&conn, "enrollments"), 0);
    assert_eq!(count(&conn, "scheduled_tramites"), 0);
}

#[test]
fn seeding_twice_is_a_noop() {
    let conn = open_db_in_memory().unwrap();

    assert!(seed_catalog(&conn).unwrap());
    assert!(!seed_catalog(&conn).unwrap());

    assert_eq!(count(&conn, "health_centers"), 2);
    assert_eq!(count(&conn, "courses"), 2);
}

#[test]
fn wifi_points_roundtrip_their_coordinates() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn).unwrap();
    let repo = SqliteWifiRepository::try_new(&conn).unwrap();

    let points = repo.list_wifi_points().unwrap();
    assert_eq!(points.len(), 2);

    let plaza = points
        .iter()
        .find(|point| point.name == "Plaza Independencia")
        .unwrap();
    assert_eq!(plaza.kind, "WiFi Público");
    assert_eq!(plaza.schedule, "24 horas");
    assert!((plaza.coordinates.latitude - -36.8201).abs() < 1e-9);
    assert!((plaza.coordinates.longitude - -73.0444).abs() < 1e-9);

    let loaded = repo.get_wifi_point(plaza.id).unwrap().unwrap();
    assert_eq!(&loaded, plaza);
}

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}
