use jiff::civil::date;

use outage_core::params::{CreateStep, UpdateStep};
use outage_core::storage::{SqliteStorage, Storage, PROTOCOL_KEY};
use outage_core::{DurationUnit, StepStatus, StepStoreBuilder};

mod common;

use common::create_test_environment;

#[tokio::test]
async fn test_complete_protocol_workflow() {
    let (_temp_dir, db_path) = create_test_environment();

    let mut store = StepStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");

    // Build a small protocol
    let prep = store
        .add_step(&CreateStep {
            name: "Preparation".to_string(),
            start_date: Some(date(2025, 3, 10)),
            end_date: Some(date(2025, 3, 11)),
            duration: Some(2.0),
            duration_unit: Some(DurationUnit::Days),
            responsible: Some("Safety team".to_string()),
            ..Default::default()
        })
        .await;
    let drain = store
        .add_step(&CreateStep {
            name: "Main drainage".to_string(),
            start_date: Some(date(2025, 3, 12)),
            end_date: Some(date(2025, 3, 14)),
            duration: Some(3.0),
            duration_unit: Some(DurationUnit::Days),
            dependencies: vec![prep.id],
            ..Default::default()
        })
        .await;

    store.set_window(date(2025, 3, 10), date(2025, 3, 20)).await;

    assert_eq!(store.len(), 2);
    assert!(!store.can_start(drain.id));
    assert!(store.set_status(prep.id, StepStatus::Done).await);
    assert!(store.can_start(drain.id));

    // Reopen the same database: everything survives
    let mut reloaded = StepStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to reopen store");

    assert_eq!(reloaded.len(), 2);
    assert_eq!(
        reloaded.get_step(prep.id).unwrap().status,
        StepStatus::Done
    );
    assert_eq!(reloaded.get_step(drain.id).unwrap().dependencies, vec![prep.id]);
    assert_eq!(reloaded.window().start, Some(date(2025, 3, 10)));

    // Mutations on the reopened store persist too
    assert!(
        reloaded
            .update_step(
                drain.id,
                UpdateStep {
                    duration: Some(12.0),
                    duration_unit: Some(DurationUnit::Hours),
                    ..Default::default()
                },
            )
            .await
    );
    assert_eq!(reloaded.get_step(drain.id).unwrap().duration_days, 0.5);
}

#[tokio::test]
async fn test_legacy_blob_is_migrated_on_disk() {
    let (_temp_dir, db_path) = create_test_environment();

    // Write a pre-migration blob straight through the storage backend
    let storage = SqliteStorage::open(&db_path).expect("Failed to open storage");
    let legacy = serde_json::json!({
        "steps": [{
            "id": 1,
            "name": "Old-style step",
            "startDate": "2025-03-10",
            "endDate": "2025-03-12",
            "durationDays": 3.0,
            "order": 1
        }],
        "windowStart": "2025-03-01",
        "windowEnd": "2025-04-15"
    });
    storage.save(PROTOCOL_KEY, &legacy).expect("Failed to seed blob");
    drop(storage);

    let store = StepStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to load store");

    let step = store.get_step(1).unwrap();
    assert_eq!(step.duration, 3.0);
    assert_eq!(step.duration_unit, DurationUnit::Days);
    assert_eq!(step.duration_days, 3.0);
    assert_eq!(store.window().start, Some(date(2025, 3, 1)));

    // The migration was written back: the raw blob now carries the
    // repaired duration fields
    let storage = SqliteStorage::open(&db_path).expect("Failed to reopen storage");
    let blob = storage.load(PROTOCOL_KEY).unwrap().unwrap();
    assert_eq!(blob["steps"][0]["duration"], 3.0);
    assert_eq!(blob["steps"][0]["durationUnit"], "days");
}

#[tokio::test]
async fn test_delete_persists_dependency_cleanup() {
    let (_temp_dir, db_path) = create_test_environment();

    let mut store = StepStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");

    let a = store
        .add_step(&CreateStep {
            name: "a".to_string(),
            start_date: Some(date(2025, 3, 10)),
            end_date: Some(date(2025, 3, 10)),
            ..Default::default()
        })
        .await;
    let b = store
        .add_step(&CreateStep {
            name: "b".to_string(),
            start_date: Some(date(2025, 3, 11)),
            end_date: Some(date(2025, 3, 11)),
            dependencies: vec![a.id],
            ..Default::default()
        })
        .await;

    assert!(store.delete_step(a.id).await);

    let reloaded = StepStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to reopen store");

    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.get_step(b.id).unwrap().dependencies.is_empty());
    assert!(reloaded.can_start(b.id));
}
