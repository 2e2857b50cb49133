//! HttpTranslator against a local LibreTranslate-style stub.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use lingo_core::domain::LanguageCode;
use lingo_core::impls::HttpTranslator;
use lingo_core::ports::{TranslateError, Translator};
use serde_json::{Value, json};

async fn stub_translate(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["api_key"] != "secret" {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"error": "Invalid API key"})),
        );
    }
    assert_eq!(body["source"], "auto");
    assert_eq!(body["format"], "text");
    match (body["q"].as_str(), body["target"].as_str()) {
        (Some("Hello"), Some("fr")) => (StatusCode::OK, Json(json!({"translatedText": "Bonjour"}))),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "target language not supported"})),
        ),
    }
}

async fn spawn_stub() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    let router = Router::new().route("/translate", post(stub_translate));
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

fn lang(code: &str) -> LanguageCode {
    LanguageCode::parse(code).expect("language")
}

#[tokio::test]
async fn translates_through_http() {
    let addr = spawn_stub().await;
    let translator = HttpTranslator::new(format!("http://{addr}"))
        .expect("client")
        .with_api_key("secret");

    let translated = translator.translate("Hello", &lang("fr")).await.expect("translate");

    assert_eq!(translated, "Bonjour");
}

#[tokio::test]
async fn api_errors_carry_status_and_message() {
    let addr = spawn_stub().await;
    let translator = HttpTranslator::new(format!("http://{addr}"))
        .expect("client")
        .with_api_key("secret");

    let err = translator
        .translate("Hello", &lang("tlh"))
        .await
        .expect_err("unsupported language");

    assert!(matches!(
        err,
        TranslateError::Api { status: 400, ref message }
            if message == "target language not supported"
    ));
    assert_eq!(
        err.to_string(),
        "translation API error: 400 - target language not supported"
    );
}

#[tokio::test]
async fn missing_api_key_is_rejected() {
    let addr = spawn_stub().await;
    let translator = HttpTranslator::new(format!("http://{addr}")).expect("client");

    let err = translator
        .translate("Hello", &lang("fr"))
        .await
        .expect_err("forbidden");

    assert!(matches!(err, TranslateError::Api { status: 403, .. }));
}
