//! Contact relay server
//!
//! Reads its configuration from the environment and serves the contact form
//! endpoint at `POST /send-mail`.

use anyhow::Context;
use contact_relay::{router, ContactRelay, RelayConfig, SmtpMailer};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RelayConfig::from_env().context("reading relay configuration")?;
    let mailer = SmtpMailer::new(&config.smtp).context("configuring SMTP transport")?;
    let relay = ContactRelay::from_config(Arc::new(mailer), &config);
    if config.development {
        log::warn!("Development mode: transport errors are returned to clients");
    }

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("binding {}", config.listen))?;
    log::info!("Contact relay listening on http://{}", config.listen);

    axum::serve(listener, router(Arc::new(relay))).await?;
    Ok(())
}
