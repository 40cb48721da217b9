//! Request handling independent of the hosting runtime

use crate::{ContactForm, MailTransport, RelayConfig, RelayError};
use axum::http::{Method, StatusCode};
use serde::Serialize;
use std::sync::Arc;

pub const MISSING_FIELDS: &str = "Missing fields";
pub const MAIL_SENT: &str = "Mail sent successfully";
pub const DELIVERY_FAILED: &str = "Failed to send email. Check function logs for details.";
pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

/// One HTTP request as the hosting runtime hands it over.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub method: Method,
    pub body: Vec<u8>,
}

impl Invocation {
    pub fn new(method: Method, body: impl Into<Vec<u8>>) -> Self {
        Self {
            method,
            body: body.into(),
        }
    }
}

/// JSON reply body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyBody {
    pub status: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Json(ReplyBody),
    Text(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl RelayResponse {
    fn json(status: StatusCode, outcome: &'static str, message: &'static str) -> Self {
        Self {
            status,
            body: ResponseBody::Json(ReplyBody {
                status: outcome,
                message,
                error: None,
            }),
        }
    }

    pub fn sent() -> Self {
        Self::json(StatusCode::OK, "success", MAIL_SENT)
    }

    pub fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            body: ResponseBody::Text(METHOD_NOT_ALLOWED),
        }
    }

    /// Map a failure to its response. `detail` exposes the error text.
    pub fn from_error(err: &RelayError, detail: bool) -> Self {
        match err {
            RelayError::MissingFields | RelayError::InvalidPayload(_) => {
                Self::json(StatusCode::BAD_REQUEST, "error", MISSING_FIELDS)
            }
            RelayError::Delivery(transport) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: ResponseBody::Json(ReplyBody {
                    status: "error",
                    message: DELIVERY_FAILED,
                    error: detail.then(|| transport.to_string()),
                }),
            },
        }
    }
}

/// The contact form endpoint.
pub struct ContactRelay {
    transport: Arc<dyn MailTransport>,
    sender: String,
    destination: String,
    development: bool,
}

impl ContactRelay {
    pub fn new(
        transport: Arc<dyn MailTransport>,
        sender: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            sender: sender.into(),
            destination: destination.into(),
            development: false,
        }
    }

    pub fn from_config(transport: Arc<dyn MailTransport>, config: &RelayConfig) -> Self {
        Self::new(transport, &config.smtp.username, &config.destination)
            .development(config.development)
    }

    /// Include transport error details in 500 responses.
    pub fn development(mut self, enabled: bool) -> Self {
        self.development = enabled;
        self
    }

    pub async fn handle(&self, invocation: Invocation) -> RelayResponse {
        if invocation.method != Method::POST {
            log::debug!("rejecting {} request", invocation.method);
            return RelayResponse::method_not_allowed();
        }

        match self.relay(&invocation.body).await {
            Ok(()) => RelayResponse::sent(),
            Err(err) => {
                if err.is_client_error() {
                    log::info!("rejected submission: {err}");
                } else {
                    log::error!("Mail Error: {err}");
                }
                RelayResponse::from_error(&err, self.development)
            }
        }
    }

    async fn relay(&self, body: &[u8]) -> Result<(), RelayError> {
        let message = ContactForm::parse(body)?.validate()?;
        let mail = message.compose(&self.sender, &self.destination);
        self.transport.send(&mail).await?;
        log::info!("relayed message from {}", message.email);
        Ok(())
    }
}
