use modelsync_sync::mock::{RecordingSync, SyncCall};
use modelsync_sync::{RemoteSync, SyncError};
use modelsync_types::{Entity, EntityId};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Entity for Item {
    const FIELDS: &'static [&'static str] = &["id", "name"];

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }
}

fn item(id: Option<&str>, name: &str) -> Item {
    Item {
        id: id.map(EntityId::from),
        name: Some(name.to_string()),
    }
}

#[tokio::test]
async fn rejected_fetch_is_not_recorded() {
    let sync = RecordingSync::<Item>::new();

    let err = sync.fetch_one(None).await.unwrap_err();
    assert!(matches!(err, SyncError::InvalidArgument(_)));
    let err = sync.fetch_one(Some(&EntityId::new(""))).await.unwrap_err();
    assert!(matches!(err, SyncError::InvalidArgument(_)));

    assert_eq!(sync.call_count(), 0);
}

#[tokio::test]
async fn scripted_responses_are_consumed_in_order() {
    let sync = RecordingSync::<Item>::new()
        .respond_fetch_one(json!({"id": "1", "name": "first"}))
        .fail_fetch_one("boom");

    let id = EntityId::new("1");
    let first = sync.fetch_one(Some(&id)).await.unwrap();
    assert_eq!(first.get("name"), Some(&json!("first")));

    let err = sync.fetch_one(Some(&id)).await.unwrap_err();
    assert!(matches!(err, SyncError::Scripted(ref m) if m == "boom"));
    assert!(err.is_transport());

    // Queue exhausted.
    assert!(sync.fetch_one(Some(&id)).await.is_err());
    assert_eq!(sync.call_count(), 3);
}

#[tokio::test]
async fn fetch_all_records_call() {
    let sync = RecordingSync::<Item>::new().respond_fetch_all(vec![json!({"id": "1"})]);
    let items = sync.fetch_all().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(sync.calls(), vec![SyncCall::FetchAll]);
}

#[tokio::test]
async fn save_records_post_or_put() {
    let sync = RecordingSync::<Item>::new();

    sync.save(&item(None, "A")).await.unwrap();
    sync.save(&item(Some("7"), "B")).await.unwrap();

    let calls = sync.calls();
    assert_eq!(calls.len(), 2);
    match &calls[0] {
        SyncCall::Post(body) => assert_eq!(body.get("name"), Some(&json!("A"))),
        other => panic!("expected POST, got {other:?}"),
    }
    match &calls[1] {
        SyncCall::Put(id, body) => {
            assert_eq!(id.as_str(), "7");
            assert_eq!(body.get("id"), Some(&json!("7")));
        }
        other => panic!("expected PUT, got {other:?}"),
    }
}

#[tokio::test]
async fn save_with_empty_id_posts_without_id() {
    let sync = RecordingSync::<Item>::new();
    sync.save(&item(Some(""), "X")).await.unwrap();

    match &sync.calls()[0] {
        SyncCall::Post(body) => {
            assert_eq!(serde_json::Value::Object(body.clone()), json!({"name": "X"}));
        }
        other => panic!("expected POST, got {other:?}"),
    }
}

#[tokio::test]
async fn unserializable_entity_is_serialization_error() {
    #[derive(Clone, Deserialize)]
    struct Broken {
        id: Option<EntityId>,
    }

    impl Serialize for Broken {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot encode"))
        }
    }

    impl Entity for Broken {
        const FIELDS: &'static [&'static str] = &["id"];

        fn id(&self) -> Option<&EntityId> {
            self.id.as_ref()
        }
    }

    let sync = RecordingSync::<Broken>::new();
    let err = sync.save(&Broken { id: None }).await.unwrap_err();
    assert!(matches!(err, SyncError::Serialization(_)));
    assert_eq!(sync.call_count(), 0);
}

#[tokio::test]
async fn save_echoes_when_unscripted() {
    let sync = RecordingSync::<Item>::new();
    let payload = sync.save(&item(Some("3"), "echo")).await.unwrap();
    assert_eq!(serde_json::Value::Object(payload), json!({"id": "3", "name": "echo"}));
}

#[tokio::test]
async fn scripted_save_failure() {
    let sync = RecordingSync::<Item>::new().fail_save("offline");
    let err = sync.save(&item(None, "A")).await.unwrap_err();
    assert_eq!(err.to_string(), "scripted failure: offline");
    assert_eq!(sync.call_count(), 1);
}

#[tokio::test]
async fn non_object_script_fails_at_call_time() {
    let sync = RecordingSync::<Item>::new().respond_save(json!(5));
    assert!(sync.save(&item(None, "A")).await.is_err());
}
