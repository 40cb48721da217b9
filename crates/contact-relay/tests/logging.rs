//! Operator-facing log output of the relay.
//!
//! Lives in its own test binary so the process-wide logger below is the
//! only one installed.

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use contact_relay::{ContactRelay, Invocation, MailTransport, OutboundMail, TransportError};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex, OnceLock};
use std::thread::{self, ThreadId};

struct Captured {
    thread: ThreadId,
    level: Level,
    text: String,
}

#[derive(Default)]
struct CaptureLogger {
    records: Mutex<Vec<Captured>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push(Captured {
            thread: thread::current().id(),
            level: record.level(),
            text: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

fn logger() -> &'static CaptureLogger {
    static LOGGER: OnceLock<CaptureLogger> = OnceLock::new();
    let logger = LOGGER.get_or_init(CaptureLogger::default);
    // Only the first call installs it.
    let _ = log::set_logger(logger);
    log::set_max_level(LevelFilter::Trace);
    logger
}

/// Position in the capture buffer to read from later.
fn mark() -> usize {
    logger().records.lock().unwrap().len()
}

/// Records at `level` emitted on the calling thread since `from`. Each
/// `#[tokio::test]` runs its runtime on the test thread, so parallel tests
/// don't mix.
fn records_since(from: usize, level: Level) -> Vec<String> {
    let me = thread::current().id();
    logger().records.lock().unwrap()[from..]
        .iter()
        .filter(|r| r.thread == me && r.level == level)
        .map(|r| r.text.clone())
        .collect()
}

struct FailingTransport;

#[async_trait]
impl MailTransport for FailingTransport {
    async fn send(&self, _mail: &OutboundMail) -> Result<(), TransportError> {
        Err(TransportError::Unavailable("auth rejected by smtp.example.com".into()))
    }
}

struct AcceptingTransport;

#[async_trait]
impl MailTransport for AcceptingTransport {
    async fn send(&self, _mail: &OutboundMail) -> Result<(), TransportError> {
        Ok(())
    }
}

fn relay(transport: Arc<dyn MailTransport>) -> ContactRelay {
    ContactRelay::new(transport, "site@example.com", "owner@example.com")
}

const VALID: &str = r#"{"name":"Ada","email":"ada@example.com","message":"hi"}"#;

#[tokio::test]
async fn delivery_failure_is_logged_as_error() {
    let from = mark();
    let response = relay(Arc::new(FailingTransport))
        .handle(Invocation::new(Method::POST, VALID))
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

    let errors = records_since(from, Level::Error);
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert!(errors[0].contains("auth rejected by smtp.example.com"));
}

#[tokio::test]
async fn production_failure_is_still_logged() {
    let from = mark();
    let response = relay(Arc::new(FailingTransport))
        .development(false)
        .handle(Invocation::new(Method::POST, VALID))
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

    let errors = records_since(from, Level::Error);
    assert!(errors.iter().any(|e| e.contains("auth rejected")));
}

#[tokio::test]
async fn rejected_submissions_log_no_errors() {
    let from = mark();
    let relay = relay(Arc::new(FailingTransport));

    for body in [r#"{"name":"Ada","email":"ada@example.com"}"#, "garbage", "null"] {
        let response = relay.handle(Invocation::new(Method::POST, body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
    }
    let response = relay.handle(Invocation::new(Method::GET, VALID)).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);

    assert!(records_since(from, Level::Error).is_empty());
}

#[tokio::test]
async fn successful_delivery_logs_no_errors() {
    let from = mark();
    let response = relay(Arc::new(AcceptingTransport))
        .handle(Invocation::new(Method::POST, VALID))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(records_since(from, Level::Error).is_empty());
    assert!(!records_since(from, Level::Info).is_empty());
}
