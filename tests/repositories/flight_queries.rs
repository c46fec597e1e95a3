use missions::entities::MissionStatus;
use missions::repositories::{MissionRepository, ModuleRepository};
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::common::{at, fixture, stored_mission, stored_module};

#[tokio::test]
async fn test_flight_modules_of_empty_mission() {
    let f = fixture().await;
    let draft = MissionRepository::create_draft(&f.storage.conn, &f.customer.uuid).await.unwrap();

    let modules = MissionRepository::get_flight_modules(&f.storage.conn, &draft.uuid).await.unwrap();
    assert!(modules.is_empty());
    assert_eq!(MissionRepository::count_modules(&f.storage.conn, &draft.uuid).await.unwrap(), 0);
}

#[tokio::test]
async fn test_flight_modules_only_for_their_mission() {
    let f = fixture().await;
    let conn = &f.storage.conn;
    let first = MissionRepository::create_draft(conn, &f.customer.uuid).await.unwrap();
    let second = stored_mission(&f.storage, f.other.uuid, MissionStatus::Formed, Some(at(2025, 2, 1))).await;

    let antenna = stored_module(&f.storage, "Antenna").await;
    let battery = stored_module(&f.storage, "Battery").await;
    let camera = stored_module(&f.storage, "Camera").await;

    MissionRepository::add_module(conn, &first.uuid, &antenna.uuid).await.unwrap();
    MissionRepository::add_module(conn, &first.uuid, &battery.uuid).await.unwrap();
    MissionRepository::add_module(conn, &second.uuid, &camera.uuid).await.unwrap();

    let mut names: Vec<String> = MissionRepository::get_flight_modules(conn, &first.uuid)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Antenna".to_string(), "Battery".to_string()]);

    let second_modules = MissionRepository::get_flight_modules(conn, &second.uuid).await.unwrap();
    assert_eq!(second_modules.len(), 1);
    assert_eq!(second_modules[0].uuid, camera.uuid);
}

#[tokio::test]
async fn test_count_matches_flight_modules() {
    let f = fixture().await;
    let conn = &f.storage.conn;
    let draft = MissionRepository::create_draft(conn, &f.customer.uuid).await.unwrap();

    for name in ["Antenna", "Battery", "Camera"] {
        let module = stored_module(&f.storage, name).await;
        MissionRepository::add_module(conn, &draft.uuid, &module.uuid).await.unwrap();
    }

    let modules = MissionRepository::get_flight_modules(conn, &draft.uuid).await.unwrap();
    let count = MissionRepository::count_modules(conn, &draft.uuid).await.unwrap();
    assert_eq!(count, 3);
    assert_eq!(count as usize, modules.len());
}

#[tokio::test]
async fn test_add_module_twice_keeps_one_flight() {
    let f = fixture().await;
    let conn = &f.storage.conn;
    let draft = MissionRepository::create_draft(conn, &f.customer.uuid).await.unwrap();
    let module = stored_module(&f.storage, "Antenna").await;

    MissionRepository::add_module(conn, &draft.uuid, &module.uuid).await.unwrap();
    MissionRepository::add_module(conn, &draft.uuid, &module.uuid).await.unwrap();

    assert_eq!(MissionRepository::count_modules(conn, &draft.uuid).await.unwrap(), 1);
}

#[tokio::test]
async fn test_remove_module_from_mission() {
    let f = fixture().await;
    let conn = &f.storage.conn;
    let draft = MissionRepository::create_draft(conn, &f.customer.uuid).await.unwrap();
    let antenna = stored_module(&f.storage, "Antenna").await;
    let battery = stored_module(&f.storage, "Battery").await;
    MissionRepository::add_module(conn, &draft.uuid, &antenna.uuid).await.unwrap();
    MissionRepository::add_module(conn, &draft.uuid, &battery.uuid).await.unwrap();

    let removed = MissionRepository::remove_module(conn, &draft.uuid, &antenna.uuid).await.unwrap();
    assert_eq!(removed, 1);

    let modules = MissionRepository::get_flight_modules(conn, &draft.uuid).await.unwrap();
    assert!(modules.iter().all(|m| m.uuid != antenna.uuid));
    assert_eq!(MissionRepository::count_modules(conn, &draft.uuid).await.unwrap(), 1);

    // The module itself survives
    let module = ModuleRepository::get_by_id(conn, &antenna.uuid).await.unwrap();
    assert!(module.is_some());
}

#[tokio::test]
async fn test_remove_missing_association_succeeds() {
    let f = fixture().await;
    let conn = &f.storage.conn;
    let draft = MissionRepository::create_draft(conn, &f.customer.uuid).await.unwrap();
    let module = stored_module(&f.storage, "Antenna").await;

    let removed = MissionRepository::remove_module(conn, &draft.uuid, &module.uuid).await.unwrap();
    assert_eq!(removed, 0);

    let removed = MissionRepository::remove_module(conn, &Uuid::new_v4(), &Uuid::new_v4()).await.unwrap();
    assert_eq!(removed, 0);
}

#[tokio::test]
async fn test_count_fails_without_flights_table() {
    let f = fixture().await;
    let conn = &f.storage.conn;
    conn.execute_unprepared("DROP TABLE flights").await.unwrap();

    let result = MissionRepository::count_modules(conn, &Uuid::new_v4()).await;
    assert!(result.unwrap_err().is_storage());
}
