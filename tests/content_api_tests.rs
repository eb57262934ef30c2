mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;
use showcase_cms::db::seed::{DEFAULT_SERVICES, DEFAULT_TEAM};

#[tokio::test]
async fn fresh_store_lists_default_services_in_order() {
    let t = TestApp::spawn().await;

    let (status, services) = t.json("GET", "/api/services", None).await;
    assert_eq!(status, StatusCode::OK);
    let services = services.as_array().expect("array");
    assert_eq!(services.len(), DEFAULT_SERVICES.len());
    for (got, (title, description, icon)) in services.iter().zip(DEFAULT_SERVICES) {
        assert_eq!(got["title"], *title);
        assert_eq!(got["description"], *description);
        assert_eq!(got["icon"], *icon);
        assert!(got["file_url"].is_null());
    }
}

#[tokio::test]
async fn service_crud_round() {
    let t = TestApp::spawn().await;

    let (status, created) = t
        .json(
            "POST",
            "/api/services",
            Some(json!({
                "title": "SEO Audit",
                "description": "Find what holds your rankings back.",
                "icon": "search",
                "file_url": "/uploads/1700000000000-42.pdf"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["title"], "SEO Audit");
    assert_eq!(created["file_url"], "/uploads/1700000000000-42.pdf");
    let uri = format!("/api/services/{}", created["id"]);

    let (status, body) = t
        .json(
            "PUT",
            &uri,
            Some(json!({"title": "SEO Review", "description": "d", "icon": "search"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, services) = t.json("GET", "/api/services", None).await;
    let updated = services
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == created["id"])
        .expect("updated service listed")
        .clone();
    assert_eq!(updated["title"], "SEO Review");
    // every editable field is overwritten, including clearing the file
    assert!(updated["file_url"].is_null());

    let (status, _) = t.json("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, services) = t.json("GET", "/api/services", None).await;
    assert_eq!(services.as_array().unwrap().len(), DEFAULT_SERVICES.len());
}

#[tokio::test]
async fn team_member_with_icon_round() {
    let t = TestApp::spawn().await;

    let (status, created) = t
        .json(
            "POST",
            "/api/team",
            Some(json!({
                "name": "Priya Patel",
                "title": "Designer",
                "image": "/uploads/1700000000000-7.jpg",
                "icon": "pen-tool"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["icon"], "pen-tool");

    let (_, team) = t.json("GET", "/api/team", None).await;
    let team = team.as_array().unwrap();
    assert_eq!(team.len(), DEFAULT_TEAM.len() + 1);
    assert_eq!(team.last().unwrap(), &created);
}

#[tokio::test]
async fn deleting_missing_team_member_is_silent_success() {
    let t = TestApp::spawn().await;
    let (_, before) = t.json("GET", "/api/team", None).await;

    let (status, body) = t.json("DELETE", "/api/team/424242", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, after) = t.json("GET", "/api/team", None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn updating_missing_service_is_silent_success() {
    let t = TestApp::spawn().await;
    let (_, before) = t.json("GET", "/api/services", None).await;

    let (status, _) = t
        .json(
            "PUT",
            "/api/services/31337",
            Some(json!({"title": "x", "description": "y", "icon": "z"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = t.json("GET", "/api/services", None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn non_numeric_id_gets_json_client_error() {
    let t = TestApp::spawn().await;

    let (status, body) = t.json("DELETE", "/api/team/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|m| m.contains("abc")));

    let (status, body) = t
        .json(
            "PUT",
            "/api/users/not-a-number",
            Some(json!({"username": "x", "name": "X"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, team) = t.json("GET", "/api/team", None).await;
    assert_eq!(team.as_array().unwrap().len(), DEFAULT_TEAM.len());
}
