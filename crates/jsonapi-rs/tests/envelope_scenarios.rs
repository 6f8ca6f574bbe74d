//! End-to-end envelope scenarios through the public facade.

use jsonapi_rs::http::{header, HeaderValue, Method, StatusCode};
use jsonapi_rs::prelude::*;
use jsonapi_rs::{automatic_redirect_allowed, Environment, ErrorKind, TestResponse};

fn responder() -> Responder {
    Responder::new(EnvelopeConfig::default().environment(Environment::Development))
}

async fn finish(transport: HttpTransport) -> TestResponse {
    TestResponse::from_response(transport.into_response().unwrap()).await
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn created_widget() {
    let mut transport = HttpTransport::new();
    responder()
        .created(&mut transport, Envelope::new("Widget created", json!({ "id": 42 })))
        .unwrap();

    finish(transport)
        .await
        .assert_status(201)
        .assert_header("content-type", "application/json")
        .assert_body(r#"{"message":"Widget created","data":{"id":42}}"#);
}

#[tokio::test]
async fn not_found_with_defaults() {
    let mut transport = HttpTransport::new();
    responder().not_found(&mut transport, Envelope::empty()).unwrap();

    finish(transport)
        .await
        .assert_status(404)
        .assert_body(r#"{"message":"","data":{}}"#);
}

#[tokio::test]
async fn method_not_allowed_does_not_populate_allow() {
    let mut transport = HttpTransport::new();
    responder()
        .method_not_allowed(&mut transport, Envelope::message("PUT not supported"))
        .unwrap();

    finish(transport)
        .await
        .assert_status(405)
        .assert_no_header("allow")
        .assert_body(r#"{"message":"PUT not supported","data":{}}"#);
}

#[tokio::test]
async fn unknown_code_is_rejected_before_writing() {
    let mut transport = HttpTransport::new();
    let err = responder()
        .respond_with_code(&mut transport, 999, Envelope::empty())
        .unwrap_err();

    assert!(matches!(err, EnvelopeError::UnsupportedStatus(999)));
    assert_eq!(err.kind(), ErrorKind::CallerMisuse);
    assert!(!transport.is_finalized());
    assert!(transport.body().is_empty());
}

#[tokio::test]
async fn ok_with_defaults() {
    let response = responder().build(ApiStatus::Ok, Envelope::empty()).unwrap();
    TestResponse::from_response(response)
        .await
        .assert_status(200)
        .assert_envelope("", &json!({}));
}

// ============================================================================
// Handler-style replies
// ============================================================================

#[derive(Serialize)]
struct Widget {
    id: u64,
    name: String,
    tags: Vec<String>,
}

fn create_widget(name: &str) -> Result<Reply<Widget>> {
    let widget = Widget {
        id: 7,
        name: name.to_string(),
        tags: vec![],
    };
    Reply::created(Envelope::new("Widget created", widget)).header("location", "/widgets/7")
}

fn replace_widget() -> Reply {
    Reply::method_not_allowed(Envelope::message("PUT not supported"))
        .with_header(header::ALLOW, HeaderValue::from_static("GET, DELETE"))
}

#[tokio::test]
async fn reply_carries_caller_headers() {
    let response = create_widget("gear").into_response();
    TestResponse::from_response(response)
        .await
        .assert_status(201)
        .assert_header("location", "/widgets/7")
        .assert_envelope("Widget created", &json!({ "id": 7, "name": "gear", "tags": [] }));

    let response = replace_widget().into_response();
    TestResponse::from_response(response)
        .await
        .assert_status(405)
        .assert_header("allow", "GET, DELETE");
}

#[cfg(feature = "redirects")]
#[tokio::test]
async fn see_other_carries_link_in_data() {
    let response = Reply::see_other(Envelope::new(
        "Order accepted",
        json!({ "links": { "self": "/orders/12" } }),
    ))
    .header("location", "/orders/12")
    .unwrap()
    .into_response();

    TestResponse::from_response(response)
        .await
        .assert_status(303)
        .assert_header("location", "/orders/12")
        .assert_envelope("Order accepted", &json!({ "links": { "self": "/orders/12" } }));
}

#[test]
fn redirect_policy_belongs_to_caller() {
    assert!(automatic_redirect_allowed(&Method::GET));
    assert!(automatic_redirect_allowed(&Method::HEAD));
    assert!(!automatic_redirect_allowed(&Method::POST));
}

// ============================================================================
// Properties
// ============================================================================

#[tokio::test]
async fn every_enabled_status_round_trips() {
    let data = json!({
        "empty": {},
        "list": [[], {}, null],
        "text": "Grüße, 世界",
    });

    for status in ApiStatus::enabled() {
        let response = responder()
            .build(status, Envelope::new(status.reason(), data.clone()))
            .unwrap();
        let test = TestResponse::from_response(response).await;

        assert_eq!(test.status(), StatusCode::from(status));
        test.assert_envelope(status.reason(), &data);
    }
}

#[tokio::test]
async fn identical_calls_produce_identical_bytes() {
    let r = responder();
    let make = || Envelope::new("Conflict", json!({ "field": "email", "values": [1, 2, 3] }));

    let first = TestResponse::from_response(r.build(ApiStatus::Conflict, make()).unwrap()).await;
    let second = TestResponse::from_response(r.build(ApiStatus::Conflict, make()).unwrap()).await;
    assert_eq!(first.body(), second.body());
}

#[tokio::test]
async fn empty_no_content_policy() {
    let r = Responder::new(EnvelopeConfig::default().no_content(NoContentPolicy::Empty));
    let response = r.build(ApiStatus::NoContent, Envelope::message("deleted")).unwrap();

    let test = TestResponse::from_response(response).await;
    test.assert_status(204).assert_no_header("content-type");
    assert!(test.body().is_empty());
}
