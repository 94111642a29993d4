//! Integration tests for session lifecycle routes.

mod common;

use axum::http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn test_create_session_returns_opening_state() {
    let (app, _clock) = common::build_test_app();

    let (status, json) = common::post_empty(app, "/api/v1/sessions").await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(json["session_id"].is_string());
    assert_eq!(json["state"]["scene"], "courtyard");
    assert!(json["state"]["dialogue"].is_string());
    assert!(json["state"]["active_view"].is_null());
    assert_eq!(json["pending"], serde_json::json!([]));
    assert_eq!(json["transitioning"], false);
}

#[tokio::test]
async fn test_get_session_round_trip() {
    let (app, _clock) = common::build_test_app();
    let session_id = common::create_session(app.clone()).await;

    let (status, json) = common::get_json(app, &format!("/api/v1/sessions/{session_id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["session_id"], session_id);
    assert_eq!(json["state"]["scene"], "courtyard");
}

#[tokio::test]
async fn test_missing_session_returns_404() {
    let (app, _clock) = common::build_test_app();
    let session_id = Uuid::new_v4();

    let (status, json) = common::get_json(app, &format!("/api/v1/sessions/{session_id}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "session_not_found");
}

#[tokio::test]
async fn test_invalid_session_id_is_rejected() {
    let (app, _clock) = common::build_test_app();

    let (status, _json) = common::get_json(app, "/api/v1/sessions/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_restart_returns_fresh_state_under_same_id() {
    let (app, _clock) = common::build_test_app();
    let session_id = common::create_session(app.clone()).await;
    let (status, _json) = common::post_json(
        app.clone(),
        &format!("/api/v1/sessions/{session_id}/interact"),
        &serde_json::json!({ "target": "wall" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) =
        common::post_empty(app, &format!("/api/v1/sessions/{session_id}/restart")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["event_ids"], serde_json::json!([]));
    assert_eq!(json["state"]["session_id"], session_id);
    assert!(json["state"]["state"]["active_view"].is_null());
}

#[tokio::test]
async fn test_delete_session_ends_it() {
    let (app, _clock) = common::build_test_app();
    let session_id = common::create_session(app.clone()).await;

    let (status, _json) =
        common::delete(app.clone(), &format!("/api/v1/sessions/{session_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _json) = common::get_json(app, &format!("/api/v1/sessions/{session_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cancel_unknown_task_returns_400() {
    let (app, _clock) = common::build_test_app();
    let session_id = common::create_session(app.clone()).await;

    let (status, json) =
        common::delete(app, &format!("/api/v1/sessions/{session_id}/tasks/42")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_events_lists_recorded_changes() {
    // Arrange
    let (app, _clock) = common::build_test_app();
    let session_id = common::create_session(app.clone()).await;
    let (_status, command) = common::post_json(
        app.clone(),
        &format!("/api/v1/sessions/{session_id}/interact"),
        &serde_json::json!({ "target": "door" }),
    )
    .await;

    // Act
    let (status, json) =
        common::get_json(app, &format!("/api/v1/sessions/{session_id}/events")).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let events = json.as_array().unwrap();
    assert_eq!(events.len(), command["event_ids"].as_array().unwrap().len());
    assert_eq!(events[0]["event_type"], "world_state.scene_changed");
    assert_eq!(events[0]["change"]["change"], "scene_changed");
    assert_eq!(events[0]["change"]["to"], "main_hall");
    assert_eq!(events[0]["metadata"]["event_id"], command["event_ids"][0]);
    assert_eq!(events[0]["metadata"]["sequence_number"], 1);
}

#[tokio::test]
async fn test_events_of_missing_session_returns_404() {
    let (app, _clock) = common::build_test_app();

    let (status, json) =
        common::get_json(app, &format!("/api/v1/sessions/{}/events", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "session_not_found");
}
