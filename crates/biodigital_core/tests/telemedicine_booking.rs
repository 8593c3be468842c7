use biodigital_core::db::{open_db_in_memory, seed_catalog};
use biodigital_core::{
    BookingRequest, SqliteTelemedicineRepository, TelemedicineService, VIRTUAL_CONSULTATION_LINK,
};

fn booking(center_name: &str) -> BookingRequest {
    BookingRequest {
        center_name: center_name.to_string(),
        date: "2025-11-18".to_string(),
        time: "09:00".to_string(),
        specialty: "Medicina General".to_string(),
    }
}

#[test]
fn seeded_centers_carry_their_specialties() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn).unwrap();
    let repo = SqliteTelemedicineRepository::try_new(&conn).unwrap();
    let service = TelemedicineService::new(repo);

    let centers = service.list_health_centers().unwrap();
    assert_eq!(centers.len(), 2);

    let hospital = centers
        .iter()
        .find(|center| center.name == "Hospital de Concepción")
        .unwrap();
    assert_eq!(
        hospital.specialties,
        vec!["Medicina General", "Pediatría", "Cardiología"]
    );

    let loaded = service.get_health_center(hospital.id).unwrap().unwrap();
    assert_eq!(loaded.phone, "+56 41 2123456");
}

#[test]
fn booking_attaches_the_virtual_link() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn).unwrap();
    let repo = SqliteTelemedicineRepository::try_new(&conn).unwrap();
    let service = TelemedicineService::new(repo);

    let appointment = service
        .book_appointment(booking("CESFAM Talcahuano"))
        .unwrap();
    assert_eq!(appointment.center_name, "CESFAM Talcahuano");
    assert_eq!(appointment.virtual_link, VIRTUAL_CONSULTATION_LINK);

    let listed = service.appointments().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], appointment);
}

#[test]
fn identical_bookings_yield_distinct_records() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn).unwrap();
    let repo = SqliteTelemedicineRepository::try_new(&conn).unwrap();
    let service = TelemedicineService::new(repo);

    let first = service.book_appointment(booking("CESFAM Talcahuano")).unwrap();
    let second = service.book_appointment(booking("CESFAM Talcahuano")).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.date, second.date);
    assert_eq!(first.time, second.time);
    assert_eq!(service.appointments().unwrap().len(), 2);
}

#[test]
fn unknown_specialty_is_accepted_as_is() {
    // Form validation lives at the presentation boundary; the store does
    // not reject well-typed input it cannot verify.
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn).unwrap();
    let repo = SqliteTelemedicineRepository::try_new(&conn).unwrap();
    let service = TelemedicineService::new(repo);

    let appointment = service
        .book_appointment(BookingRequest {
            center_name: "CESFAM Talcahuano".to_string(),
            date: "2025-11-19".to_string(),
            time: "10:00".to_string(),
            specialty: "Astrología".to_string(),
        })
        .unwrap();
    assert_eq!(appointment.specialty, "Astrología");
}
