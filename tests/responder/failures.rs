//! tests/responder/failures.rs
//! Error and client-error envelopes.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

async fn get(path: &str) -> reqwest::Response {
    let base_url: String = common::spawn_app();

    reqwest::get(format!("{}{}", base_url, path))
        .await
        .expect("Failed to execute request.")
}

#[tokio::test]
async fn error_carries_message_code_and_payload() {
    let resp: reqwest::Response = get("/crash").await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(
        json,
        json!({
            "code": 5001,
            "message": "upstream service unavailable",
            "payload": { "retry": true }
        })
    );
}

#[tokio::test]
async fn error_surfaces_the_first_field_error() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/accounts", base_url))
        .json(&json!({ "email": "nope", "password": "secret" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["code"], 4001);
    assert_eq!(json["message"], "`nope` is not a valid email address");
    assert_eq!(json["payload"], Value::Null);
}

#[tokio::test]
async fn not_found_failure_becomes_404() {
    let resp: reqwest::Response = get("/users/000000000000000000000000").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json, json!({ "code": 404, "message": "resource not found", "payload": null }));
}

#[tokio::test]
async fn unauthorized_and_forbidden() {
    let resp: reqwest::Response = get("/private").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(
        json,
        json!({ "code": 401, "message": "a valid session is required", "payload": null })
    );

    let resp: reqwest::Response = get("/admin").await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json, json!({ "code": 403, "message": "forbidden", "payload": null }));
}
