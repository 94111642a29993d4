//! Integration tests for scene interaction routes.

mod common;

use axum::http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn test_interact_travels_through_door() {
    // Arrange
    let (app, _clock) = common::build_test_app();
    let session_id = common::create_session(app.clone()).await;

    // Act
    let (status, json) = common::post_json(
        app,
        &format!("/api/v1/sessions/{session_id}/interact"),
        &serde_json::json!({ "target": "door" }),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert!(!json["event_ids"].as_array().unwrap().is_empty());
    assert_eq!(json["state"]["state"]["scene"], "main_hall");
    assert!(
        json["state"]["state"]["hotspots"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("firepit"))
    );
}

#[tokio::test]
async fn test_interact_with_unknown_target_returns_400() {
    let (app, _clock) = common::build_test_app();
    let session_id = common::create_session(app.clone()).await;

    let (status, json) = common::post_json(
        app.clone(),
        &format!("/api/v1/sessions/{session_id}/interact"),
        &serde_json::json!({ "target": "firepit" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "unknown_target");

    let (_status, json) = common::get_json(app, &format!("/api/v1/sessions/{session_id}")).await;
    assert_eq!(json["state"]["scene"], "courtyard");
    assert_eq!(json["state"]["version"], 0);
}

#[tokio::test]
async fn test_interact_on_missing_session_returns_404() {
    let (app, _clock) = common::build_test_app();
    let session_id = Uuid::new_v4();

    let (status, json) = common::post_json(
        app,
        &format!("/api/v1/sessions/{session_id}/interact"),
        &serde_json::json!({ "target": "wall" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "session_not_found");
}

#[tokio::test]
async fn test_select_toggles_held_item() {
    // Arrange: the chairs hide the key.
    let (app, _clock) = common::build_test_app();
    let session_id = common::create_session(app.clone()).await;
    for target in ["door", "chairs"] {
        let (status, _json) = common::post_json(
            app.clone(),
            &format!("/api/v1/sessions/{session_id}/interact"),
            &serde_json::json!({ "target": target }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let uri = format!("/api/v1/sessions/{session_id}/select");

    // Act / Assert
    let (status, json) =
        common::post_json(app.clone(), &uri, &serde_json::json!({ "item": "key" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"]["state"]["selected_item"], "key");

    let (status, json) = common::post_json(app, &uri, &serde_json::json!({ "item": "key" })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["state"]["state"]["selected_item"].is_null());
}

#[tokio::test]
async fn test_select_item_not_held_returns_409() {
    let (app, _clock) = common::build_test_app();
    let session_id = common::create_session(app.clone()).await;

    let (status, json) = common::post_json(
        app.clone(),
        &format!("/api/v1/sessions/{session_id}/select"),
        &serde_json::json!({ "item": "key" }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "item_not_held");

    let (_status, json) = common::get_json(app, &format!("/api/v1/sessions/{session_id}")).await;
    assert!(json["state"]["selected_item"].is_null());
    assert_eq!(json["state"]["version"], 0);
}

#[tokio::test]
async fn test_select_unknown_item_is_rejected() {
    let (app, _clock) = common::build_test_app();
    let session_id = common::create_session(app.clone()).await;

    let (status, _json) = common::post_json(
        app,
        &format!("/api/v1/sessions/{session_id}/select"),
        &serde_json::json!({ "item": "crowbar" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_dismiss_dialogue_clears_line() {
    let (app, _clock) = common::build_test_app();
    let session_id = common::create_session(app.clone()).await;

    let (status, json) = common::post_empty(
        app,
        &format!("/api/v1/sessions/{session_id}/dialogue/dismiss"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["state"]["state"]["dialogue"].is_null());
}
