//! End-to-end relay behavior through the axum router.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use contact_relay::handler::{DELIVERY_FAILED, MAIL_SENT, METHOD_NOT_ALLOWED};
use contact_relay::{
    router, ContactRelay, Invocation, MailTransport, OutboundMail, ResponseBody, TransportError,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct RecordingTransport {
    sent: Mutex<Vec<OutboundMail>>,
}

impl RecordingTransport {
    fn sent(&self) -> Vec<OutboundMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, mail: &OutboundMail) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

struct FailingTransport;

#[async_trait]
impl MailTransport for FailingTransport {
    async fn send(&self, _mail: &OutboundMail) -> Result<(), TransportError> {
        Err(TransportError::Unavailable("connection refused".into()))
    }
}

fn relay_with(transport: Arc<dyn MailTransport>) -> ContactRelay {
    ContactRelay::new(transport, "site@example.com", "owner@example.com")
}

async fn request(app: axum::Router, method: Method, body: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .uri("/send-mail")
        .method(method)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

fn as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

const VALID: &str =
    r#"{"name":"Ada","email":"ada@example.com","subject":"Hi","message":"Hello\nthere"}"#;

#[tokio::test]
async fn valid_submission_is_delivered() {
    let transport = Arc::new(RecordingTransport::default());
    let app = router(Arc::new(relay_with(transport.clone())));

    let (status, body) = request(app, Method::POST, VALID).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({"status": "success", "message": MAIL_SENT}));

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, "site@example.com");
    assert_eq!(sent[0].to, "owner@example.com");
    assert_eq!(sent[0].reply_to, "ada@example.com");
    assert_eq!(sent[0].subject, "Portfolio Message: Hi");
    assert!(sent[0].html.contains("Hello<br>there"));
}

#[tokio::test]
async fn missing_subject_uses_placeholder() {
    let transport = Arc::new(RecordingTransport::default());
    let app = router(Arc::new(relay_with(transport.clone())));

    let (status, _) = request(
        app,
        Method::POST,
        r#"{"name":"Ada","email":"ada@example.com","message":"hi"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(transport.sent()[0].subject, "Portfolio Message: No Subject");
}

#[tokio::test]
async fn missing_fields_are_rejected_without_delivery() {
    let transport = Arc::new(RecordingTransport::default());
    let relay = Arc::new(relay_with(transport.clone()));

    for body in [
        r#"{"email":"ada@example.com","message":"hi"}"#,
        r#"{"name":"Ada","message":"hi"}"#,
        r#"{"name":"Ada","email":"ada@example.com","message":""}"#,
        r#"{}"#,
    ] {
        let (status, reply) = request(router(relay.clone()), Method::POST, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(as_json(&reply), json!({"status": "error", "message": "Missing fields"}));
    }
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn unusable_bodies_report_missing_fields() {
    let transport = Arc::new(RecordingTransport::default());
    let relay = Arc::new(relay_with(transport.clone()));

    for body in ["name=Ada&email=x", "garbage", "", "null", "[1,2]", r#""text""#] {
        let (status, reply) = request(router(relay.clone()), Method::POST, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(as_json(&reply), json!({"status": "error", "message": "Missing fields"}));
    }
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn non_string_fields_are_delivered() {
    let transport = Arc::new(RecordingTransport::default());
    let app = router(Arc::new(relay_with(transport.clone())));

    let (status, _) = request(
        app,
        Method::POST,
        r#"{"name":42,"email":"a@x.com","message":"hi"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].html.contains("<strong>Name:</strong> 42"));
}

#[tokio::test]
async fn non_post_methods_are_not_allowed() {
    let transport = Arc::new(RecordingTransport::default());
    let relay = Arc::new(relay_with(transport.clone()));

    for method in [Method::GET, Method::PUT, Method::DELETE, Method::OPTIONS] {
        let (status, body) = request(router(relay.clone()), method, VALID).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, METHOD_NOT_ALLOWED.as_bytes());
    }
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn delivery_failure_hides_details_in_production() {
    let app = router(Arc::new(relay_with(Arc::new(FailingTransport))));

    let (status, body) = request(app, Method::POST, VALID).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let reply = as_json(&body);
    assert_eq!(reply, json!({"status": "error", "message": DELIVERY_FAILED}));
    assert!(reply.get("error").is_none());
}

#[tokio::test]
async fn delivery_failure_shows_details_in_development() {
    let relay = relay_with(Arc::new(FailingTransport)).development(true);
    let app = router(Arc::new(relay));

    let (status, body) = request(app, Method::POST, VALID).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let reply = as_json(&body);
    assert_eq!(reply["message"], DELIVERY_FAILED);
    assert!(reply["error"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn handler_is_usable_without_a_server() {
    let relay = relay_with(Arc::new(RecordingTransport::default()));
    let response = relay.handle(Invocation::new(Method::POST, VALID)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(matches!(response.body, ResponseBody::Json(ref reply) if reply.status == "success"));

    let response = relay.handle(Invocation::new(Method::GET, "")).await;
    assert_eq!(response.body, ResponseBody::Text("Method Not Allowed"));
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let transport = Arc::new(RecordingTransport::default());
    let relay = Arc::new(relay_with(transport.clone()));

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let relay = relay.clone();
            tokio::spawn(async move {
                let body =
                    format!(r#"{{"name":"User {i}","email":"u{i}@example.com","message":"m"}}"#);
                relay.handle(Invocation::new(Method::POST, body)).await
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().status, StatusCode::OK);
    }
    assert_eq!(transport.sent().len(), 8);
}
