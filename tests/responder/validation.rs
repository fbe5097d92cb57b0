//! tests/responder/validation.rs
//! In-handler validation through `RequestFields`.

#[path = "../mod.rs"]
mod common;

use axum_responder::config::environment::EnvironmentVariables;
use axum_responder::responder::{IdValidation, ResponderOptions};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn missing_body_fields_are_listed_in_order() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/users", base_url))
        .json(&json!({ "email": "anakin@tatooine.sw" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_ACCEPTABLE);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(
        json,
        json!({
            "code": 406,
            "message": "properties `username, password` are mandatory but yet missing",
            "payload": null
        })
    );
}

#[tokio::test]
async fn empty_body_misses_every_field() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/users", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/users", base_url))
        .header("content-type", "application/json")
        .body("{\"username\":")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "request body is not valid JSON");
}

#[tokio::test]
async fn inline_id_check() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    let resp: reqwest::Response = client
        .delete(format!("{}/users/507f1f77bcf86cd799439011", base_url))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp: reqwest::Response = client
        .delete(format!("{}/users/42", base_url))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn inline_id_check_can_be_disabled() {
    let options: ResponderOptions =
        ResponderOptions::default().id_validation(IdValidation::Disabled);
    let base_url: String = common::spawn_app_with(EnvironmentVariables::default(), options);

    let resp: reqwest::Response = reqwest::Client::new()
        .delete(format!("{}/users/42", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
}
