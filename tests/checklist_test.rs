//! Integration tests for the checklist lifecycle.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

use helpers::TestApp;

async fn create(app: &TestApp, token: &str, body: Value) -> Value {
    let response = app
        .request("POST", "/api/v1/checklists", Some(body), Some(token))
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "Create failed: {:?}",
        response.body
    );
    response.body
}

#[tokio::test]
async fn test_create_derives_status_and_score() {
    let app = TestApp::new();
    let token = app.register_token("a@x.com", "dealer", "t1").await;

    let empty = create(&app, &token, json!({ "title": "Empty" })).await;
    assert_eq!(empty["status"], "pending");
    assert_eq!(empty["kpi_score"], 0.0);

    let mixed = create(
        &app,
        &token,
        json!({
            "title": "Opening",
            "description": "Morning routine",
            "tasks": [
                { "title": "Unlock doors", "status": "completed" },
                { "title": "Count till" },
            ],
        }),
    )
    .await;
    assert_eq!(mixed["status"], "in_progress");
    assert_eq!(mixed["kpi_score"], 50.0);
    assert_eq!(mixed["tasks"].as_array().unwrap().len(), 2);
    assert!(mixed["tasks"][1]["id"].is_string());
}

#[tokio::test]
async fn test_create_requires_title() {
    let app = TestApp::new();
    let token = app.register_token("a@x.com", "dealer", "t1").await;

    let response = app
        .request(
            "POST",
            "/api/v1/checklists",
            Some(json!({ "title": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("POST", "/api/v1/checklists", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_merges_and_tasks_override_status() {
    let app = TestApp::new();
    let token = app.register_token("a@x.com", "dealer", "t1").await;
    let created = create(
        &app,
        &token,
        json!({ "title": "Opening", "description": "keep me", "tasks": [{ "title": "A" }] }),
    )
    .await;
    let path = format!("/api/v1/checklists/{}", created["id"].as_str().unwrap());

    let response = app
        .request("PUT", &path, Some(json!({ "title": "Renamed" })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Renamed");
    assert_eq!(response.body["description"], "keep me");
    assert_eq!(response.body["tasks"].as_array().unwrap().len(), 1);

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({
                "status": "completed",
                "tasks": [{ "title": "A" }, { "title": "B", "status": "completed" }],
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "in_progress");
    assert_eq!(response.body["kpi_score"], 50.0);
}

#[tokio::test]
async fn test_complete_is_idempotent() {
    let app = TestApp::new();
    let token = app.register_token("a@x.com", "dealer", "t1").await;
    let created = create(
        &app,
        &token,
        json!({ "title": "Closing", "tasks": [{ "title": "A" }, { "title": "B" }] }),
    )
    .await;
    let path = format!(
        "/api/v1/checklists/{}/complete",
        created["id"].as_str().unwrap()
    );

    for _ in 0..2 {
        let response = app.request("POST", &path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["status"], "completed");
        assert_eq!(response.body["kpi_score"], 100.0);
        let tasks = response.body["tasks"].as_array().unwrap();
        assert!(tasks.iter().all(|t| t["status"] == "completed"));
    }
}

#[tokio::test]
async fn test_checklists_are_owner_scoped() {
    let app = TestApp::new();
    let owner = app.register_token("a@x.com", "dealer", "t1").await;
    let other = app.register_token("b@x.com", "dealer", "t1").await;
    let created = create(&app, &owner, json!({ "title": "Mine" })).await;
    let path = format!("/api/v1/checklists/{}", created["id"].as_str().unwrap());

    let response = app.request("GET", &path, None, Some(&other)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Checklist not found");

    let response = app.request("DELETE", &path, None, Some(&other)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let list = app
        .request("GET", "/api/v1/checklists", None, Some(&other))
        .await;
    assert_eq!(list.body["total"], 0);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = TestApp::new();
    let token = app.register_token("a@x.com", "dealer", "t1").await;
    let created = create(&app, &token, json!({ "title": "Temp" })).await;
    let path = format!("/api/v1/checklists/{}", created["id"].as_str().unwrap());

    let response = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("GET", "/api/v1/checklists/not-a-uuid", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_pagination() {
    let app = TestApp::new();
    let token = app.register_token("a@x.com", "dealer", "t1").await;
    for i in 0..5 {
        create(&app, &token, json!({ "title": format!("List {i}") })).await;
    }

    let response = app
        .request("GET", "/api/v1/checklists?page=2&limit=2", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], 2);
    assert_eq!(response.body["limit"], 2);
    assert_eq!(response.body["total"], 5);
    assert_eq!(response.body["total_pages"], 3);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 2);

    let response = app
        .request("GET", "/api/v1/checklists?page=abc&limit=xyz", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["limit"], 10);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_list_with_huge_page_is_empty() {
    let app = TestApp::new();
    let token = app.register_token("a@x.com", "dealer", "t1").await;
    create(&app, &token, json!({ "title": "Only" })).await;

    let response = app
        .request(
            "GET",
            "/api/v1/checklists?page=9223372036854775807",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 1);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_bad_query_string_uses_error_shape() {
    let app = TestApp::new();
    let token = app.register_token("a@x.com", "dealer", "t1").await;

    let response = app
        .request("GET", "/api/v1/checklists?page=1&page=2", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid query parameters");
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn test_update_with_empty_title_keeps_title() {
    let app = TestApp::new();
    let token = app.register_token("a@x.com", "dealer", "t1").await;
    let created = create(
        &app,
        &token,
        json!({ "title": "Opening", "description": "old" }),
    )
    .await;
    let path = format!("/api/v1/checklists/{}", created["id"].as_str().unwrap());

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({ "title": "", "description": "new" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Opening");
    assert_eq!(response.body["description"], "new");
}

#[tokio::test]
async fn test_oversized_body_is_413() {
    let app = TestApp::new();
    let token = app.register_token("a@x.com", "dealer", "t1").await;

    let big = "x".repeat(app.config.server.max_body_bytes + 1);
    let response = app
        .request(
            "POST",
            "/api/v1/checklists",
            Some(json!({ "title": big })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["error"], "Payload too large");
}

#[tokio::test]
async fn test_repeated_task_ids_stay_unique() {
    let app = TestApp::new();
    let token = app.register_token("a@x.com", "dealer", "t1").await;
    let created = create(&app, &token, json!({ "title": "Dup", "tasks": [{ "title": "A" }] })).await;
    let task_id = created["tasks"][0]["id"].as_str().unwrap();
    let path = format!("/api/v1/checklists/{}", created["id"].as_str().unwrap());

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({
                "tasks": [
                    { "id": task_id, "title": "A" },
                    { "id": task_id, "title": "A again" },
                ],
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let tasks = response.body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["id"], task_id);
    assert_ne!(tasks[1]["id"], task_id);
}
