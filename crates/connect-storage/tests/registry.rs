use connect_core::models::errand::NewErrand;
use connect_core::models::professional::NewProfessional;
use connect_storage::errands::ErrandStore;
use connect_storage::error::StorageError;
use connect_storage::professionals::ProfessionalRegistry;

fn professional(name: &str, profession: &str) -> NewProfessional {
    NewProfessional {
        name: name.to_string(),
        profession: profession.to_string(),
        lat: -33.87,
        lng: 151.21,
    }
}

#[tokio::test]
async fn registry_assigns_sequential_ids_from_one() {
    let dir = tempfile::tempdir().unwrap();
    let registry = ProfessionalRegistry::new(dir.path());

    let a = registry.register(professional("Dr Lee", "doctor")).await.unwrap();
    let b = registry.register(professional("Sam", "welder")).await.unwrap();
    let c = registry.register(professional("Dr Ng", "doctor")).await.unwrap();

    assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    assert_eq!(registry.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn ids_continue_after_reopening() {
    let dir = tempfile::tempdir().unwrap();
    ProfessionalRegistry::new(dir.path())
        .register(professional("Dr Lee", "doctor"))
        .await
        .unwrap();

    let reopened = ProfessionalRegistry::new(dir.path());
    let next = reopened.register(professional("Sam", "welder")).await.unwrap();
    assert_eq!(next.id, 2);
}

#[tokio::test]
async fn errands_are_listed_and_fetched_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = ErrandStore::new(dir.path());

    let posted = store
        .post(NewErrand {
            title: "Fix the plumber".to_string(),
            description: "Leaking tap".to_string(),
            budget_aud: Some(25.0),
        })
        .await
        .unwrap();

    let listed = store.list().await.unwrap();
    assert_eq!(listed, vec![posted.clone()]);
    assert_eq!(store.get(posted.id).await.unwrap(), posted);
}

#[tokio::test]
async fn unknown_errand_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = ErrandStore::new(dir.path());

    let missing = store.get(uuid::Uuid::new_v4()).await;
    assert!(matches!(missing, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn concurrent_registrations_get_distinct_sequential_ids() {
    let dir = tempfile::tempdir().unwrap();
    let registry = std::sync::Arc::new(ProfessionalRegistry::new(dir.path()));

    let mut handles = Vec::new();
    for i in 0..10 {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            registry
                .register(professional(&format!("Pro{i}"), "doctor"))
                .await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=10).collect::<Vec<u64>>());

    let stored: Vec<u64> = registry.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(stored.len(), 10);
}
