// Drives the public store API against a real file, the way the binary does.

use streams::modules::streams::adapters::outbound::json_file_store::JsonFileStreamStore;
use streams::modules::streams::core::ports::{StoreError, StreamStore};
use streams::modules::streams::core::stream::{
    NewStream, Stream, StreamElement, StreamPatch, StreamQuery, StreamRef,
};

fn new_stream(width: f64, height: f64) -> NewStream {
    NewStream {
        width,
        height,
        elements: vec![],
    }
}

#[tokio::test]
async fn store_survives_a_full_mutation_cycle_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("store.json");
    let store = JsonFileStreamStore::open(&path).await.unwrap();

    let first = store.create(new_stream(10.0, 20.0)).await.unwrap();
    store
        .push_multiple(vec![new_stream(1.0, 1.0), new_stream(2.0, 2.0)])
        .await
        .unwrap();
    assert_eq!(store.array().await.unwrap().len(), 3);

    let matched = store
        .patch(
            StreamQuery::by_id(&first.id),
            StreamPatch {
                elements: Some(vec![StreamElement {
                    x: 4.0,
                    y: 5.0,
                    content: "<em>hi</em>".to_string(),
                }]),
                ..StreamPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(matched, 1);

    let on_disk: Vec<Stream> = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, store.array().await.unwrap());
    assert_eq!(on_disk[0].elements[0].content, "<em>hi</em>");

    let rejected = store
        .patch(
            StreamQuery::default(),
            StreamPatch {
                id: Some("x".to_string()),
                ..StreamPatch::default()
            },
        )
        .await;
    assert!(matches!(rejected, Err(StoreError::ImmutableField)));

    store.delete(StreamRef::from(&first)).await.unwrap();
    assert_eq!(store.array().await.unwrap().len(), 2);
    assert!(matches!(
        store.delete(StreamRef::from(first.id.as_str())).await,
        Err(StoreError::NotFound)
    ));
    assert!(!store.object().await.unwrap().contains_key(&first.id));
}
