use super::*;
use crate::services::store::SubmissionStore;
use crate::state::test_helpers::{self, dummy_draft};
use axum::body::Body;
use serde_json::{Value, json};

fn caller() -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::from(([203, 0, 113, 7], 51000)))
}

fn body(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> ContactBody {
    ContactBody(Ok(ContactPayload {
        name: name.map(str::to_owned),
        email: email.map(str::to_owned),
        message: message.map(str::to_owned),
    }))
}

async fn json_body(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// submit
// =============================================================================

#[tokio::test]
async fn submit_valid_form_persists_trimmed_record() {
    let state = test_helpers::test_app_state().await;
    let resp = submit_contact_form(
        State(state.clone()),
        caller(),
        body(Some("  Ada Lovelace "), Some(" ada@example.com "), Some(" Hello! ")),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let value = json_body(resp).await;
    assert_eq!(value["success"], true);
    assert_eq!(value["message"], MSG_RECEIVED);
    assert_eq!(value["data"]["name"], "Ada Lovelace");
    assert_eq!(value["data"]["email"], "ada@example.com");
    assert_eq!(value["data"]["message"], "Hello!");
    assert_eq!(value["data"]["sourceAddress"], "203.0.113.7");

    let stored = state.store.read_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(value["data"]["id"], stored[0]["id"]);
}

#[tokio::test]
async fn submit_with_missing_field_is_rejected_without_write() {
    let state = test_helpers::test_app_state().await;
    let cases = [
        body(None, Some("a@b.c"), Some("hi")),
        body(Some("Ada"), Some(""), Some("hi")),
        body(Some("Ada"), Some("a@b.c"), Some("   ")),
    ];
    for case in cases {
        let resp = submit_contact_form(State(state.clone()), caller(), case).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let value = json_body(resp).await;
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], MSG_MISSING_FIELDS);
    }
    assert!(state.store.read_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_with_undecodable_body_is_bad_request() {
    let state = test_helpers::test_app_state().await;
    let resp = submit_contact_form(State(state.clone()), caller(), ContactBody(Err("bad json".into()))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(state.store.read_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_on_corrupt_store_is_server_error() {
    let state = test_helpers::test_app_state().await;
    tokio::fs::write(state.store.path(), "not an array").await.unwrap();

    let resp = submit_contact_form(State(state), caller(), body(Some("Ada"), Some("a@b.c"), Some("hi"))).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let value = json_body(resp).await;
    assert_eq!(value["success"], false);
    assert_eq!(value["message"], MSG_SAVE_FAILED);
}

// =============================================================================
// read-back
// =============================================================================

#[tokio::test]
async fn get_submissions_returns_count_and_data() {
    let state = test_helpers::test_app_state().await;
    state.store.append(dummy_draft("Ada")).await.unwrap();
    state.store.append(dummy_draft("Grace")).await.unwrap();

    let resp = get_submissions(State(state)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let value = json_body(resp).await;
    assert_eq!(value["success"], true);
    assert_eq!(value["count"], 2);
    assert_eq!(value["data"][0]["name"], "Ada");
    assert_eq!(value["data"][1]["name"], "Grace");
}

#[tokio::test]
async fn get_submissions_returns_records_of_any_shape() {
    let state = test_helpers::test_app_state().await;
    state.store.append(dummy_draft("Ada")).await.unwrap();
    let mut records = state.store.read_all().await.unwrap();
    records.push(json!({ "id": 1.7e12, "name": "B" }));
    tokio::fs::write(state.store.path(), serde_json::to_vec(&records).unwrap()).await.unwrap();

    let resp = get_submissions(State(state)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let value = json_body(resp).await;
    assert_eq!(value["count"], 2);
    assert_eq!(value["data"][1]["name"], "B");
}

#[tokio::test]
async fn get_submissions_on_missing_file_is_server_error() {
    let state = test_helpers::test_app_state().await;
    tokio::fs::remove_file(state.store.path()).await.unwrap();

    let resp = get_submissions(State(state)).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(resp).await["message"], MSG_READ_FAILED);
}

#[tokio::test]
async fn download_is_byte_identical_attachment() {
    let state = test_helpers::test_app_state().await;
    state.store.append(dummy_draft("Ada")).await.unwrap();
    let on_disk = tokio::fs::read(state.store.path()).await.unwrap();

    let resp = download_submissions(State(state)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    let disposition = resp.headers()[CONTENT_DISPOSITION].to_str().unwrap().to_owned();
    assert!(disposition.starts_with("attachment; filename=\"submissions_"), "{disposition}");
    assert!(disposition.ends_with(".json\""), "{disposition}");

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(bytes.as_ref(), on_disk.as_slice());
}

#[tokio::test]
async fn clear_then_get_is_empty() {
    let state = test_helpers::test_app_state().await;
    state.store.append(dummy_draft("Ada")).await.unwrap();

    let resp = clear_submissions(State(state.clone())).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let value = json_body(resp).await;
    assert_eq!(value["success"], true);
    assert_eq!(value["message"], MSG_CLEARED);

    let value = json_body(get_submissions(State(state)).await).await;
    assert_eq!(value["count"], 0);
    assert_eq!(value["data"], json!([]));
}

#[tokio::test]
async fn clear_with_stopped_writer_is_unavailable() {
    let path = test_helpers::temp_store_path();
    let (store, writer) = SubmissionStore::open(&path, 1).await.unwrap();
    writer.abort();
    let _ = writer.await;

    let resp = clear_submissions(State(AppState::new(store))).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json_body(resp).await["message"], MSG_CLEAR_FAILED);
}

// =============================================================================
// helpers + extractor
// =============================================================================

#[test]
fn download_filename_embeds_millis() {
    assert_eq!(download_filename(1_700_000_000_123), "submissions_1700000000123.json");
}

#[test]
fn store_error_to_status_maps_io_and_closed() {
    let io = StoreError::Io(std::io::Error::other("disk full"));
    assert_eq!(store_error_to_status(&io), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(store_error_to_status(&StoreError::WriterClosed), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(store_error_to_status(&StoreError::WriterPanicked), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        store_error_to_status(&StoreError::IdsExhausted { last: u64::MAX }),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn contact_body_decodes_json() {
    let req = Request::builder()
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Ada","email":"a@b.c","message":"hi"}"#))
        .unwrap();
    let ContactBody(payload) = ContactBody::from_request(req, &()).await.unwrap();
    let payload = payload.unwrap();
    assert_eq!(payload.name.as_deref(), Some("Ada"));
    assert_eq!(payload.message.as_deref(), Some("hi"));
}

#[tokio::test]
async fn contact_body_decodes_html_form() {
    let req = Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Ada+L&email=a%40b.c&message=hello"))
        .unwrap();
    let ContactBody(payload) = ContactBody::from_request(req, &()).await.unwrap();
    let payload = payload.unwrap();
    assert_eq!(payload.name.as_deref(), Some("Ada L"));
    assert_eq!(payload.email.as_deref(), Some("a@b.c"));
}

#[tokio::test]
async fn contact_body_keeps_decode_failure() {
    let req = Request::builder()
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{oops"))
        .unwrap();
    let ContactBody(payload) = ContactBody::from_request(req, &()).await.unwrap();
    assert!(payload.is_err());
}
