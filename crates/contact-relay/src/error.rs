use thiserror::Error;

/// Why a mail could not be handed to the SMTP server.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Outcome of a rejected or failed submission.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("missing fields")]
    MissingFields,

    /// Reported to the caller as missing fields.
    #[error("unreadable body: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("delivery failed: {0}")]
    Delivery(#[from] TransportError),
}

impl RelayError {
    /// Client errors never reach the transport.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, RelayError::Delivery(_))
    }
}
