use connect_core::models::offer::HelpOffer;
use connect_storage::error::StorageError;
use connect_storage::offers::{JsonOfferStore, MemoryOfferStore, OfferStore};

fn offer(name: &str, help_type: &str, location: &str) -> HelpOffer {
    HelpOffer {
        name: name.to_string(),
        location: location.to_string(),
        help_type: help_type.to_string(),
        capacity: "5 people".to_string(),
        timeframe: "evenings".to_string(),
        contact_method: "email".to_string(),
        contact_details: format!("{}@example.com", name.to_lowercase()),
        message: String::new(),
    }
}

#[tokio::test]
async fn empty_data_dir_loads_no_offers() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonOfferStore::new(dir.path());
    assert!(store.load_all().await.is_empty());
}

#[tokio::test]
async fn submitted_offers_load_back_in_submission_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonOfferStore::new(dir.path());

    let submitted: Vec<HelpOffer> = (0..5)
        .map(|i| offer(&format!("Helper{i}"), "food", "Northside"))
        .collect();
    for o in &submitted {
        store.submit(o.clone()).await;
    }

    assert_eq!(store.load_all().await, submitted);
}

#[tokio::test]
async fn offers_survive_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    JsonOfferStore::new(dir.path())
        .try_submit(offer("Ann", "water", "Southside"))
        .await
        .unwrap();

    let reopened = JsonOfferStore::new(dir.path());
    let offers = reopened.load_all().await;
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].name, "Ann");

    let on_disk = std::fs::read_to_string(dir.path().join("helpOffers.json")).unwrap();
    assert!(on_disk.contains("\"helpType\""));
}

#[tokio::test]
async fn load_all_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonOfferStore::new(dir.path());
    store.submit(offer("Ann", "water", "Southside")).await;
    store.submit(offer("Bob", "food", "Northside")).await;

    let first = store.load_all().await;
    let second = store.load_all().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn malformed_stored_json_reads_as_no_offers() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("helpOffers.json"), "{not json").unwrap();

    let store = JsonOfferStore::new(dir.path());
    assert!(store.load_all().await.is_empty());
}

#[tokio::test]
async fn corrupt_collection_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("helpOffers.json");
    std::fs::write(&path, "[{\"name\": 1}]").unwrap();

    let store = JsonOfferStore::new(dir.path());
    let result = store.try_submit(offer("Ann", "water", "Southside")).await;
    assert!(matches!(result, Err(StorageError::Serialization(_))));

    // The fire-and-forget variant swallows the same failure.
    store.submit(offer("Ann", "water", "Southside")).await;
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[{\"name\": 1}]");
}

#[tokio::test]
async fn concurrent_submits_are_all_kept() {
    let dir = tempfile::tempdir().unwrap();
    let store = std::sync::Arc::new(JsonOfferStore::new(dir.path()));

    let mut handles = Vec::new();
    for i in 0..10 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .try_submit(offer(&format!("Helper{i}"), "shelter", "Eastside"))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.load_all().await.len(), 10);
}

#[tokio::test]
async fn memory_store_keeps_submission_order() {
    let store = MemoryOfferStore::new();
    store.submit(offer("Ann", "water", "Southside")).await;
    store.submit(offer("Bob", "food", "Northside")).await;

    let names: Vec<String> = store.load_all().await.into_iter().map(|o| o.name).collect();
    assert_eq!(names, ["Ann", "Bob"]);
}
