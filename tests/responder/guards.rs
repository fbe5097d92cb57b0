//! tests/responder/guards.rs
//! Route guards stop the request before the handler runs.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn body_guard_rejects_missing_fields() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/accounts", base_url))
        .json(&json!({ "password": "secret" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_ACCEPTABLE);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "properties `email` are mandatory but yet missing");
}

#[tokio::test]
async fn body_guard_hands_the_body_to_the_handler() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/accounts", base_url))
        .json(&json!({ "email": "leia@alderaan.sw", "password": "secret" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["payload"], json!({ "email": "leia@alderaan.sw" }));
}

#[tokio::test]
async fn params_guard_rejects_malformed_ids() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/users/not-an-object-id", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp: reqwest::Response = reqwest::get(format!("{}/users/507f1f77bcf86cd799439011", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["payload"], json!({ "id": "507f1f77bcf86cd799439011" }));
}

#[tokio::test]
async fn query_guard_requires_parameters() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/search", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_ACCEPTABLE);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "properties `q` are mandatory but yet missing");

    let resp: reqwest::Response = reqwest::get(format!("{}/search?q=droids", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["payload"], json!({ "query": "droids", "results": [] }));
}
