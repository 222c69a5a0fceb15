//! Integration tests for profiles and the dealer directory.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_profile_partial_update_keeps_omitted_fields() {
    let app = TestApp::new();
    let token = app.register_token("a@x.com", "dealer", "t1").await;

    let response = app
        .request(
            "PUT",
            "/api/v1/users/profile",
            Some(json!({ "first_name": "Ada", "phone": "555-0100" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["first_name"], "Ada");

    let response = app
        .request(
            "PUT",
            "/api/v1/users/profile",
            Some(json!({ "last_name": "Lovelace", "first_name": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["first_name"], "Ada");
    assert_eq!(response.body["last_name"], "Lovelace");
    assert_eq!(response.body["phone"], "555-0100");

    let profile = app
        .request("GET", "/api/v1/users/profile", None, Some(&token))
        .await;
    assert_eq!(profile.status, StatusCode::OK);
    assert_eq!(profile.body["last_name"], "Lovelace");
    assert!(profile.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new();
    let token = app.register_token("a@x.com", "dealer", "t1").await;

    let wrong = app
        .request(
            "PUT",
            "/api/v1/users/profile/password",
            Some(json!({ "current_password": "nope-nope", "new_password": "brand-new-pass" })),
            Some(&token),
        )
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);

    let ok = app
        .request(
            "PUT",
            "/api/v1/users/profile/password",
            Some(json!({ "current_password": PASSWORD, "new_password": "brand-new-pass" })),
            Some(&token),
        )
        .await;
    assert_eq!(ok.status, StatusCode::OK);

    app.login("a@x.com", "brand-new-pass").await;
    let old = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": "a@x.com", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_dealers_are_tenant_scoped() {
    let app = TestApp::new();
    let owner = app.register_token("owner@a.com", "franchise-owner", "tenant-a").await;
    app.register("d1@a.com", "dealer", "tenant-a").await;
    app.register("d2@a.com", "dealer", "tenant-a").await;
    app.register("m1@a.com", "manager", "tenant-a").await;
    let foreign = app.register("d1@b.com", "dealer", "tenant-b").await;

    let response = app
        .request("GET", "/api/v1/dealers", None, Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let dealers = response.body.as_array().unwrap();
    assert_eq!(dealers.len(), 2);
    assert!(dealers.iter().all(|d| d["tenant_id"] == "tenant-a"));
    assert!(dealers.iter().all(|d| d["role"] == "dealer"));

    let managers = app
        .request("GET", "/api/v1/dealers?type=manager", None, Some(&owner))
        .await;
    assert_eq!(managers.status, StatusCode::OK);
    assert_eq!(managers.body.as_array().unwrap().len(), 1);

    let foreign_id = foreign["user"]["id"].as_str().unwrap();
    let response = app
        .request(
            "GET",
            &format!("/api/v1/dealers/{foreign_id}"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Dealer not found");
}

#[tokio::test]
async fn test_get_dealer_by_id() {
    let app = TestApp::new();
    let owner = app.register_token("owner@a.com", "franchise-owner", "tenant-a").await;
    let dealer = app.register("d1@a.com", "dealer", "tenant-a").await;
    let dealer_id = dealer["user"]["id"].as_str().unwrap();

    let response = app
        .request(
            "GET",
            &format!("/api/v1/dealers/{dealer_id}"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "d1@a.com");

    let response = app
        .request("GET", "/api/v1/dealers/not-a-uuid", None, Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dealers_forbidden_for_non_owners() {
    let app = TestApp::new();
    let dealer = app.register_token("d1@a.com", "dealer", "tenant-a").await;

    let response = app
        .request("GET", "/api/v1/dealers", None, Some(&dealer))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("GET", "/api/v1/dealers", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
