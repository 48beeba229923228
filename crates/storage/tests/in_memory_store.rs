use path_core::Locale;
use path_core::model::NodeId;
use path_core::seed::{BASIC_QUIZ_NODE, BASIC_VIDEO_NODE, TUTORIAL_NODE};
use storage::{InMemoryProgressStore, ProgressStore};

fn drive(store: &mut dyn ProgressStore) {
    assert!(store.mark_completed(TUTORIAL_NODE));
    assert!(store.unlock(BASIC_VIDEO_NODE));
    assert!(!store.unlock(NodeId::new(99)));
}

#[test]
fn store_is_usable_as_trait_object() {
    let mut store = InMemoryProgressStore::seeded(Locale::En);
    drive(&mut store);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.current, Some(BASIC_VIDEO_NODE));
    assert_eq!(snapshot.open_count(), 1);
}

#[test]
fn reset_keeps_the_latest_locale() {
    let mut store = InMemoryProgressStore::seeded(Locale::En);
    drive(&mut store);
    store.retitle(Locale::Es);
    let spanish = store.get(BASIC_QUIZ_NODE).unwrap().title().to_string();
    assert_eq!(spanish, "Quiz: Construyendo un LLM");

    store.reset();
    assert_eq!(store.get(BASIC_QUIZ_NODE).unwrap().title(), spanish);
    assert!(!store.get(TUTORIAL_NODE).unwrap().is_completed());
    assert!(store.get(BASIC_VIDEO_NODE).unwrap().is_locked());
}

#[test]
fn snapshot_serializes_for_observers() {
    let store = InMemoryProgressStore::default();
    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert_eq!(json["nodes"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["current"], 1);
}
