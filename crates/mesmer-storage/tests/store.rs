use std::collections::BTreeMap;

use tempfile::TempDir;
use uuid::Uuid;

use mesmer_core::models::assessment::{Assessment, AssessmentResult};
use mesmer_core::models::profile::Profile;
use mesmer_storage::error::StorageError;
use mesmer_storage::store::Store;

fn sample_assessment() -> Assessment {
    let answers: BTreeMap<u8, bool> = (1..=36).map(|id| (id, id % 2 == 0)).collect();
    Assessment {
        id: Uuid::new_v4(),
        result: AssessmentResult {
            q1_score: 50,
            q2_score: 45,
            combined_score: 95,
            physical_percentage: 56,
            emotional_percentage: 44,
            profile: Profile::PhysicalSuggestible,
            answers,
            completed_at: jiff::Timestamp::now(),
            methodology: "HMI E&P Suggestibility Assessment (Kappas Method)".to_string(),
        },
    }
}

#[tokio::test]
async fn save_then_load_roundtrips() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path());

    let assessment = sample_assessment();
    store.save(&assessment).await.unwrap();

    let loaded = store.load(assessment.id).await.unwrap();
    assert_eq!(loaded.id, assessment.id);
    assert_eq!(loaded.result.q1_score, 50);
    assert_eq!(loaded.result.combined_score, 95);
    assert_eq!(loaded.result.profile, Profile::PhysicalSuggestible);
    assert_eq!(loaded.result.answers, assessment.result.answers);
}

#[tokio::test]
async fn load_unknown_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path());

    match store.load(Uuid::new_v4()).await {
        Err(StorageError::NotFound { .. }) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn list_is_empty_before_any_save() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path());

    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_saved_assessments() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path());

    let first = sample_assessment();
    let second = sample_assessment();
    store.save(&first).await.unwrap();
    store.save(&second).await.unwrap();

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    let mut ids: Vec<Uuid> = listed.iter().map(|a| a.id).collect();
    ids.sort();
    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn delete_removes_the_assessment() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path());

    let assessment = sample_assessment();
    store.save(&assessment).await.unwrap();
    store.delete(assessment.id).await.unwrap();

    match store.load(assessment.id).await {
        Err(StorageError::NotFound { .. }) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }

    match store.delete(assessment.id).await {
        Err(StorageError::NotFound { .. }) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}
