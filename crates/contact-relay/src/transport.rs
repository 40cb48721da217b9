//! Mail delivery seam

use crate::{OutboundMail, SmtpSettings, TransportError};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Anything that can deliver a composed mail.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: &OutboundMail) -> Result<(), TransportError>;
}

/// SMTP delivery through lettre.
///
/// The connection is built once and pooled; each send is independent.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, TransportError> {
        let builder = if settings.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
        };

        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        log::info!(
            "SMTP relay {}:{} ({})",
            settings.host,
            settings.port,
            if settings.secure { "TLS" } else { "STARTTLS" }
        );

        Ok(Self { transport })
    }
}

/// Build the wire message. Fails on unparsable addresses.
pub fn build_message(mail: &OutboundMail) -> Result<Message, TransportError> {
    let from: Mailbox = mail.from.parse()?;
    let to: Mailbox = mail.to.parse()?;
    let reply_to: Mailbox = mail.reply_to.parse()?;

    Ok(Message::builder()
        .from(from)
        .to(to)
        .reply_to(reply_to)
        .subject(mail.subject.as_str())
        .header(ContentType::TEXT_HTML)
        .body(mail.html.clone())?)
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, mail: &OutboundMail) -> Result<(), TransportError> {
        let message = build_message(mail)?;
        let response = self.transport.send(message).await?;
        log::debug!("SMTP accepted message: {:?}", response.code());
        Ok(())
    }
}
