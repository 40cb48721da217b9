//! # Contact Relay
//!
//! Stateless handler behind the portfolio contact form: parse the JSON
//! submission, validate it, compose an HTML mail and hand it to a
//! [`MailTransport`]. The same [`ContactRelay`] serves every request; it holds
//! no per-request state.

pub mod config;
pub mod error;
pub mod handler;
pub mod message;
pub mod server;
pub mod transport;

pub use config::{ConfigError, RelayConfig, SmtpSettings};
pub use error::{RelayError, TransportError};
pub use handler::{ContactRelay, Invocation, RelayResponse, ReplyBody, ResponseBody};
pub use message::{escape_html, ContactForm, ContactMessage, OutboundMail};
pub use server::router;
pub use transport::{MailTransport, SmtpMailer};
