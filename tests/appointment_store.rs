use std::{collections::HashSet, sync::Arc, thread};

use appointment_service::{
    database::{
        self,
        appointments::{AppointmentStore, SqliteAppointmentStore},
    },
    models::appointments::NewAppointment,
};

fn memory_store() -> SqliteAppointmentStore {
    let pool = database::build_pool(":memory:", 1).unwrap();
    database::init_schema(&pool).unwrap();
    SqliteAppointmentStore::new(pool)
}

fn new_appointment(patient: &str, doctor: &str, date: &str) -> NewAppointment {
    NewAppointment {
        patient_name: Some(patient.to_string()),
        doctor_name: Some(doctor.to_string()),
        date: Some(date.to_string()),
    }
}

#[test]
fn create_assigns_id_and_keeps_fields() {
    let store = memory_store();

    let created = store
        .create(new_appointment("Alice", "Dr. Lee", "2024-01-01"))
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.patient_name.as_deref(), Some("Alice"));
    assert_eq!(created.doctor_name.as_deref(), Some("Dr. Lee"));
    assert_eq!(created.date.as_deref(), Some("2024-01-01"));

    assert_eq!(store.list().unwrap(), vec![created]);
}

#[test]
fn create_accepts_missing_and_empty_fields() {
    let store = memory_store();

    let created = store
        .create(NewAppointment {
            patient_name: Some("".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(created.patient_name.as_deref(), Some(""));
    assert_eq!(created.doctor_name, None);
    assert_eq!(created.date, None);
}

#[test]
fn list_is_empty_on_fresh_store() {
    let store = memory_store();
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn list_returns_rows_in_insertion_order() {
    let store = memory_store();
    let first = store.create(new_appointment("A", "Dr. X", "mon")).unwrap();
    let second = store.create(new_appointment("B", "Dr. Y", "tue")).unwrap();
    let third = store.create(new_appointment("C", "Dr. Z", "wed")).unwrap();

    assert_eq!(store.list().unwrap(), vec![first, second, third]);
}

#[test]
fn delete_removes_only_matching_row() {
    let store = memory_store();
    let kept = store.create(new_appointment("A", "Dr. X", "mon")).unwrap();
    let removed = store.create(new_appointment("B", "Dr. Y", "tue")).unwrap();

    assert_eq!(store.delete(removed.id).unwrap(), 1);
    assert_eq!(store.list().unwrap(), vec![kept]);
}

#[test]
fn delete_unknown_id_is_noop() {
    let store = memory_store();
    let kept = store.create(new_appointment("A", "Dr. X", "mon")).unwrap();

    assert_eq!(store.delete(999).unwrap(), 0);
    assert_eq!(store.delete(kept.id + 1).unwrap(), 0);
    assert_eq!(store.list().unwrap(), vec![kept]);
}

#[test]
fn ids_are_not_reused_after_deleting_newest_row() {
    let store = memory_store();
    store.create(new_appointment("A", "Dr. X", "mon")).unwrap();
    let newest = store.create(new_appointment("B", "Dr. Y", "tue")).unwrap();
    store.delete(newest.id).unwrap();

    let next = store.create(new_appointment("C", "Dr. Z", "wed")).unwrap();
    assert!(next.id > newest.id);
}

#[test]
fn memory_store_is_shared_across_pooled_connections() {
    let pool = database::build_pool(":memory:", 4).unwrap();
    database::init_schema(&pool).unwrap();
    let store = SqliteAppointmentStore::new(pool.clone());
    let created = store.create(new_appointment("Alice", "Dr. Lee", "mon")).unwrap();

    let _held = pool.get().unwrap();
    let _also_held = pool.get().unwrap();
    assert_eq!(store.list().unwrap(), vec![created.clone()]);

    let second = store.create(new_appointment("Bob", "Dr. Ng", "tue")).unwrap();
    assert_eq!(store.list().unwrap(), vec![created, second]);
}

#[test]
fn memory_stores_are_isolated_from_each_other() {
    let first = memory_store();
    let second = memory_store();

    first.create(new_appointment("Alice", "Dr. Lee", "mon")).unwrap();
    assert!(second.list().unwrap().is_empty());
}

#[test]
fn concurrent_creates_on_memory_store_get_distinct_ids() {
    let pool = database::build_pool(":memory:", 4).unwrap();
    database::init_schema(&pool).unwrap();
    let store = Arc::new(SqliteAppointmentStore::new(pool));

    let handles = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .create(new_appointment(&format!("patient-{}", i), "Dr. Lee", "today"))
                    .unwrap()
                    .id
            })
        })
        .collect::<Vec<_>>();

    let ids = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect::<HashSet<_>>();
    assert_eq!(ids.len(), 8);
    assert_eq!(store.list().unwrap().len(), 8);
}

#[test]
fn check_succeeds_on_open_store() {
    memory_store().check().unwrap();
}

#[test]
fn list_fails_without_schema() {
    let pool = database::build_pool(":memory:", 1).unwrap();
    let store = SqliteAppointmentStore::new(pool);

    let err = store.list().unwrap_err();
    assert_eq!(err.to_string(), "DB error");
}

#[test]
fn concurrent_creates_get_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appointments.db");
    let pool = database::build_pool(path.to_str().unwrap(), 4).unwrap();
    database::init_schema(&pool).unwrap();
    let store = Arc::new(SqliteAppointmentStore::new(pool));

    let handles = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .create(new_appointment(&format!("patient-{}", i), "Dr. Lee", "today"))
                    .unwrap()
                    .id
            })
        })
        .collect::<Vec<_>>();

    let ids = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect::<HashSet<_>>();
    assert_eq!(ids.len(), 8);
    assert_eq!(store.list().unwrap().len(), 8);
}

#[test]
fn rows_survive_reopening_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appointments.db");
    let url = path.to_str().unwrap();

    let created = {
        let pool = database::build_pool(url, 1).unwrap();
        database::init_schema(&pool).unwrap();
        SqliteAppointmentStore::new(pool)
            .create(new_appointment("Alice", "Dr. Lee", "2024-01-01"))
            .unwrap()
    };

    let pool = database::build_pool(url, 1).unwrap();
    database::init_schema(&pool).unwrap();
    let store = SqliteAppointmentStore::new(pool);
    assert_eq!(store.list().unwrap(), vec![created]);
}
