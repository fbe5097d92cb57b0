//! tests/responder/jsonp.rs
//! JSONP responses are produced only when asked for and enabled.

#[path = "../mod.rs"]
mod common;

use axum_responder::config::environment::EnvironmentVariables;
use axum_responder::responder::{JsonpMode, ResponderOptions};
use reqwest::StatusCode;

#[tokio::test]
async fn callback_wraps_the_envelope() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/search?q=r2&callback=show", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["x-content-type-options"], "nosniff");
    assert!(resp.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/javascript"));

    let body: String = resp.text().await.unwrap();
    assert_eq!(
        body,
        r#"/**/ typeof show === 'function' && show({"code":200,"message":"ok","payload":{"query":"r2","results":[]}});"#
    );
}

#[tokio::test]
async fn unauthorized_honors_jsonp() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/private?callback=onAuth", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: String = resp.text().await.unwrap();
    assert!(body.starts_with("/**/ typeof onAuth === 'function' && onAuth("));
}

#[tokio::test]
async fn disabled_mode_sends_plain_json() {
    let options: ResponderOptions = ResponderOptions::default().jsonp(JsonpMode::Disabled);
    let base_url: String = common::spawn_app_with(EnvironmentVariables::default(), options);

    let resp: reqwest::Response = reqwest::get(format!("{}/search?q=r2&callback=show", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.headers()["content-type"], "application/json");

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["code"], 200);
}
